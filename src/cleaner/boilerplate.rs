//! 应答样板语句剥离
//! 注册局应答中常见法律/隐私免责声明会携带 "available" 等危险短片段，
//! 必须在 not-found 关键词判定前整句剥离，否则产生误报
use std::borrow::Cow;

use crate::core::BoilerplateList;

/// 按表序逐条剥离样板短语
/// 核心约束：
/// 1. 每条短语仅移除首次出现（与规则集语义一致）
/// 2. 原始大小写精确子串匹配，剥离发生在小写化之前
/// 3. 无命中时零拷贝返回原文
pub fn strip_boilerplate<'a>(text: &'a str, list: &BoilerplateList) -> Cow<'a, str> {
    let mut stripped = Cow::Borrowed(text);
    for phrase in &list.0 {
        if stripped.contains(phrase.as_str()) {
            stripped = Cow::Owned(stripped.replacen(phrase.as_str(), "", 1));
        }
    }
    stripped
}
