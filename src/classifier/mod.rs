mod classifier;
mod global;

// 导出常用项
pub use classifier::WhoisClassifier;
pub use global::{
    classify, fallback, is_blocked, is_dnssec_enabled, is_limit_exceeded, is_not_found,
    is_premium,
};
