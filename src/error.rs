//! rswhois-engine 内核错误定义
//! 仅覆盖规则集装配/解析失败；分类结论本身是普通返回值，永不作为错误传播
use thiserror::Error;

/// 内核核心错误枚举
/// 封装规则集加载、校验两类错误，专注内核级逻辑错误
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================== 规则相关错误 =====================
    /// 规则集解析失败（JSON 语法/格式错误）
    #[error("Rule set parse failed: {0}")]
    RuleParseError(#[from] serde_json::Error),

    /// 规则集校验失败（归一化键重复/关键表为空）
    #[error("Rule set validation failed: {0}")]
    RuleValidateError(String),
}

/// 内核层全局Result类型别名
/// 统一使用CoreError作为内核层错误类型
pub type CoreResult<T> = Result<T, CoreError>;
