// 核心公共结构体+枚举
pub mod core;
// 应答样板语句剥离（not-found 判定前置步骤）
pub mod cleaner;
// 注册状态分类器（五类布尔判定 + 兜底判定）
pub mod classifier;
// 注册局字段名归一化
pub mod normalizer;
// 多值字段修正（域名状态/NS 列表）
pub mod fixer;
// 规则源（内置规则集 + JSON 规则集解析）
pub mod source;
// 内核错误定义
pub mod error;

// 顶层导出常用类型
pub use crate::core::{BoilerplateList, Classification, KeywordRule, RuleLibrary};
pub use classifier::{
    WhoisClassifier, classify, fallback, is_blocked, is_dnssec_enabled, is_limit_exceeded,
    is_not_found, is_premium,
};
pub use cleaner::strip_boilerplate;
pub use error::{CoreError, CoreResult};
pub use fixer::{fix_domain_status, fix_name_servers};
pub use normalizer::{NormalizationTable, clear_name};
pub use source::{RuleSetParser, builtin_rules};
