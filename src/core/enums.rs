use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 注册状态分类枚举，内核所有可产出结论的封闭集合
/// 取代原始实现的哨兵错误身份比较，匹配分支穷尽可由编译器保证
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// 域名未注册（关键词命中或兜底全文命中）
    NotFound,
    /// 保留/溢价域名（可注册但按溢价出售）
    Premium,
    /// 品牌保护类封锁（如 DPML），不可据此推断未注册
    Blocked,
    /// 查询配额超限，调用方应视为可重试
    RateLimited,
    /// 无任何否定信号，按已注册处理
    Registered,
    /// 无法分类的应答文本，不可据此推断注册状态
    InvalidData,
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::NotFound => write!(f, "not_found"),
            Classification::Premium => write!(f, "premium"),
            Classification::Blocked => write!(f, "blocked"),
            Classification::RateLimited => write!(f, "rate_limited"),
            Classification::Registered => write!(f, "registered"),
            Classification::InvalidData => write!(f, "invalid_data"),
        }
    }
}
