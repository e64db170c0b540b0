use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::key_name::clear_name;
use crate::error::{CoreError, CoreResult};
use crate::source::builtin_rules;

/// 全局内置归一化表（一次构建，进程生命周期只读）
/// 内置映射对在测试中全量校验，运行期异常回退到空表（全部查询未命中）
static BUILTIN_TABLE: Lazy<NormalizationTable> = Lazy::new(|| {
    NormalizationTable::from_rules(&builtin_rules().key_rules).unwrap_or_else(|e| {
        log::warn!("Builtin normalization table rejected: {}", e);
        NormalizationTable::default()
    })
});

/// 归一化表：清洗后标签 → 规范键
/// 多对一允许（同义标签收敛），键唯一由构建期强制
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizationTable {
    map: FxHashMap<String, String>,
}

impl NormalizationTable {
    /// 从映射对构建归一化表
    /// 重复键直接拒绝：静默覆盖会掩盖规则集自身的冲突
    pub fn from_rules(pairs: &[(String, String)]) -> CoreResult<Self> {
        let mut map = FxHashMap::default();
        for (key, value) in pairs {
            if map.insert(key.clone(), value.clone()).is_some() {
                return Err(CoreError::RuleValidateError(format!(
                    "duplicate normalization key: {}",
                    key
                )));
            }
        }

        log::debug!("NormalizationTable ready: {} keys", map.len());
        Ok(Self { map })
    }

    /// 获取内置归一化表
    pub fn builtin() -> &'static NormalizationTable {
        &BUILTIN_TABLE
    }

    /// 查询原始标签对应的规范键
    /// 先清洗再查表；未命中返回空串，表示"忽略该字段"，永不报错
    pub fn find_key_name(&self, raw_label: &str) -> String {
        match self.map.get(&clear_name(raw_label)) {
            Some(value) => value.clone(),
            None => String::new(),
        }
    }

    /// 按升序字典序返回全部键
    /// 与底层哈希表迭代顺序无关，用于诊断输出与可复现测试
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.map.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
