//! JSON 规则集解析
//! 部署侧可通过 JSON 工件固定替代版本的关键词/归一化规则集，
//! 解析后强制完整性校验，拒绝不合法规则集进入运行期
use serde_json::Value;

use crate::core::RuleLibrary;
use crate::error::CoreResult;

/// 规则集解析器
#[derive(Debug, Clone, Default)]
pub struct RuleSetParser;

impl RuleSetParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 字符串解析规则库（解析 + 校验）
    pub fn parse_from_str(&self, content: &str) -> CoreResult<RuleLibrary> {
        let lib: RuleLibrary = serde_json::from_str(content)?;
        lib.validate()?;
        Ok(lib)
    }

    /// 从字节流解析规则库
    pub fn parse_from_bytes(&self, bytes: &[u8]) -> CoreResult<RuleLibrary> {
        let lib: RuleLibrary = serde_json::from_slice(bytes)?;
        lib.validate()?;
        Ok(lib)
    }

    /// 从 serde_json::Value 解析规则库
    pub fn parse_from_value(&self, value: &Value) -> CoreResult<RuleLibrary> {
        let lib: RuleLibrary = serde_json::from_value(value.clone())?;
        lib.validate()?;
        Ok(lib)
    }
}
