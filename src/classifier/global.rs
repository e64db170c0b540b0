//! 全局默认分类器管理
//! 面向仅需内置规则集的调用方的便捷入口；
//! 需要替代规则集时直接构建 WhoisClassifier 实例
use once_cell::sync::Lazy;

use super::classifier::WhoisClassifier;
use crate::core::Classification;

/// 全局默认分类器实例（内置规则集）
static DEFAULT_CLASSIFIER: Lazy<WhoisClassifier> = Lazy::new(WhoisClassifier::with_builtin);

/// 判定域名未注册（内置规则集）
pub fn is_not_found(text: &str) -> bool {
    DEFAULT_CLASSIFIER.is_not_found(text)
}

/// 判定保留/溢价域名（内置规则集）
pub fn is_premium(text: &str) -> bool {
    DEFAULT_CLASSIFIER.is_premium(text)
}

/// 判定品牌封锁（内置规则集）
pub fn is_blocked(text: &str) -> bool {
    DEFAULT_CLASSIFIER.is_blocked(text)
}

/// 判定配额超限（内置规则集）
pub fn is_limit_exceeded(text: &str) -> bool {
    DEFAULT_CLASSIFIER.is_limit_exceeded(text)
}

/// 判定 DNSSEC 启用态（内置规则集）
pub fn is_dnssec_enabled(token: &str) -> bool {
    DEFAULT_CLASSIFIER.is_dnssec_enabled(token)
}

/// 兜底判定（内置规则集）
pub fn fallback(text: &str) -> Classification {
    DEFAULT_CLASSIFIER.fallback(text)
}

/// 聚合分类（内置规则集）
pub fn classify(text: &str) -> Classification {
    DEFAULT_CLASSIFIER.classify(text)
}
