use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// 关键词规则：有序大小写不敏感片段集合
/// 片段命中逻辑：小写化全文中 ANY 片段为子串即命中
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordRule(pub Vec<String>);

impl KeywordRule {
    /// 判断小写化文本是否命中任一片段
    /// 约定：入参必须已小写化（片段表本身全小写存储）
    #[inline(always)]
    pub fn matches(&self, lowered: &str) -> bool {
        self.0.iter().any(|key| lowered.contains(key.as_str()))
    }
}

/// 样板语句表：有序精确短语列表
/// 每条短语仅移除首次出现，保持原始大小写匹配
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoilerplateList(pub Vec<String>);

/// 核心规则库结构体，内核统一标准结构
/// 一次性构建后全程只读，可跨线程无锁共享
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleLibrary {
    /// 规则集版本号（版本化配置工件标识）
    pub version: String,
    /// not-found 判定前剥离的免责声明短语
    pub ignore_sentences: BoilerplateList,
    /// 未注册关键词
    pub not_found_keys: KeywordRule,
    /// 保留/溢价关键词
    pub premium_keys: KeywordRule,
    /// 品牌封锁关键词
    pub blocked_keys: KeywordRule,
    /// 配额超限关键词
    pub limit_keys: KeywordRule,
    /// DNSSEC 启用态取值（整词精确匹配，非子串）
    pub dnssec_enabled_tokens: Vec<String>,
    /// 兜底判定用的完整应答体（逐字节相等才视为未注册）
    pub fallback_not_found_bodies: Vec<String>,
    /// 归一化映射对（清洗后标签 → 规范键），多对一允许，键必须唯一
    pub key_rules: Vec<(String, String)>,
}

impl RuleLibrary {
    /// 校验规则库完整性
    /// 核心约束：
    /// 1. 四张关键词表与 dnssec 取值表非空
    /// 2. 片段全小写且非空（匹配入参已小写化，大写片段永不命中，空片段恒命中）
    /// 3. 归一化映射键唯一（重复键静默覆盖会掩盖规则集错误）
    pub fn validate(&self) -> CoreResult<()> {
        let required: [(&str, &[String]); 5] = [
            ("not_found_keys", &self.not_found_keys.0),
            ("premium_keys", &self.premium_keys.0),
            ("blocked_keys", &self.blocked_keys.0),
            ("limit_keys", &self.limit_keys.0),
            ("dnssec_enabled_tokens", &self.dnssec_enabled_tokens),
        ];
        for (name, table) in required {
            if table.is_empty() {
                return Err(CoreError::RuleValidateError(format!(
                    "required table is empty: {}",
                    name
                )));
            }
            for key in table {
                if key.is_empty() {
                    return Err(CoreError::RuleValidateError(format!(
                        "empty fragment in {}",
                        name
                    )));
                }
                if *key != key.to_lowercase() {
                    return Err(CoreError::RuleValidateError(format!(
                        "non-lowercase fragment in {}: {}",
                        name, key
                    )));
                }
            }
        }

        let mut seen = FxHashSet::default();
        for (key, _) in &self.key_rules {
            if !seen.insert(key.as_str()) {
                return Err(CoreError::RuleValidateError(format!(
                    "duplicate normalization key: {}",
                    key
                )));
            }
        }

        Ok(())
    }
}
