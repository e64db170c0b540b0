use std::sync::Arc;

use crate::cleaner::strip_boilerplate;
use crate::core::{Classification, RuleLibrary};
use crate::source::builtin_rules;

/// 注册状态分类器
/// 持有只读规则库（Arc 共享），自身无任何可变状态，
/// 可在任意多线程间并发调用，无需加锁
#[derive(Debug, Clone)]
pub struct WhoisClassifier {
    rules: Arc<RuleLibrary>,
}

impl Default for WhoisClassifier {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl WhoisClassifier {
    /// 基于显式规则库构建分类器（测试可注入替代规则集）
    pub fn new(rules: Arc<RuleLibrary>) -> Self {
        log::debug!(
            "WhoisClassifier ready: version={} not_found={} premium={} blocked={} limit={}",
            rules.version,
            rules.not_found_keys.0.len(),
            rules.premium_keys.0.len(),
            rules.blocked_keys.0.len(),
            rules.limit_keys.0.len(),
        );
        Self { rules }
    }

    /// 基于内置规则集构建分类器
    pub fn with_builtin() -> Self {
        Self::new(builtin_rules())
    }

    /// 访问当前规则库
    pub fn rules(&self) -> &RuleLibrary {
        &self.rules
    }

    /// 判定域名未注册
    /// 核心流程：剥离样板语句 → 小写化 → ANY 未注册片段子串命中
    /// 样板剥离仅此路径执行，其余四类判定均基于未剥离原文
    pub fn is_not_found(&self, text: &str) -> bool {
        let stripped = strip_boilerplate(text, &self.rules.ignore_sentences);
        self.rules.not_found_keys.matches(&stripped.to_lowercase())
    }

    /// 判定保留/溢价域名（可注册但按溢价出售）
    pub fn is_premium(&self, text: &str) -> bool {
        self.rules.premium_keys.matches(&text.to_lowercase())
    }

    /// 判定品牌保护类封锁（DPML 等），封锁不等于未注册
    pub fn is_blocked(&self, text: &str) -> bool {
        self.rules.blocked_keys.matches(&text.to_lowercase())
    }

    /// 判定查询配额超限
    pub fn is_limit_exceeded(&self, text: &str) -> bool {
        self.rules.limit_keys.matches(&text.to_lowercase())
    }

    /// 判定 DNSSEC 启用态
    /// 整词大小写不敏感精确匹配，非子串（"unsigned" 不得命中 "signed"）
    pub fn is_dnssec_enabled(&self, token: &str) -> bool {
        let lowered = token.to_lowercase();
        self.rules
            .dnssec_enabled_tokens
            .iter()
            .any(|t| t == &lowered)
    }

    /// 兜底判定：所有正向信号均未命中后的最终裁决
    /// 与已知"无关键词未注册应答"逐字节比对，命中为 NotFound，否则 InvalidData
    pub fn fallback(&self, text: &str) -> Classification {
        for body in &self.rules.fallback_not_found_bodies {
            if text == body {
                return Classification::NotFound;
            }
        }

        Classification::InvalidData
    }

    /// 聚合分类：按配额超限 → 未注册 → 溢价 → 封锁的顺序取首个命中结论
    /// 配额应答通常不含其他信号，必须最先判定；无命中视为已注册
    pub fn classify(&self, text: &str) -> Classification {
        if self.is_limit_exceeded(text) {
            Classification::RateLimited
        } else if self.is_not_found(text) {
            Classification::NotFound
        } else if self.is_premium(text) {
            Classification::Premium
        } else if self.is_blocked(text) {
            Classification::Blocked
        } else {
            Classification::Registered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoilerplateList, KeywordRule};

    fn classifier() -> WhoisClassifier {
        WhoisClassifier::with_builtin()
    }

    #[test]
    fn test_is_not_found_plain_keyword() {
        // 测试场景：未被样板剥离的 "no match" 必为 true
        assert!(classifier().is_not_found("No match for \"EXAMPLE-FREE.COM\".\r\n"));
        assert!(classifier().is_not_found("Status: free"));
        assert!(classifier().is_not_found("The queried object does not exist: no entries found"));
    }

    #[test]
    fn test_is_not_found_ignores_disclaimer_boilerplate() {
        // 测试场景：免责声明含 "is available" 危险片段，剥离后不得误报
        let text = "Domain Name: EXAMPLE.COM\r\n\
                    Registrar: Example Registrar, LLC\r\n\
                    Note that the lack of a whois record for a particular domain does not indicate that the name is available for registration.\r\n";
        assert!(!classifier().is_not_found(text));
    }

    #[test]
    fn test_is_not_found_registered_reply() {
        let text = "Domain Name: EXAMPLE.COM\r\nRegistry Domain ID: 2336799_DOMAIN_COM-VRSN\r\n";
        assert!(!classifier().is_not_found(text));
    }

    #[test]
    fn test_is_premium() {
        assert!(classifier().is_premium("This platinum domain is available for purchase"));
        assert!(classifier().is_premium("Domain reserved by the Registry operator"));
        assert!(!classifier().is_premium("Registrar: Example LLC"));
    }

    #[test]
    fn test_is_blocked() {
        assert!(classifier().is_blocked("The registration of this domain is restricted"));
        assert!(classifier().is_blocked("This name subscribes to the DPML Block service"));
        assert!(!classifier().is_blocked("Domain Name: EXAMPLE.COM"));
    }

    #[test]
    fn test_is_limit_exceeded() {
        assert!(classifier().is_limit_exceeded("WHOIS LIMIT EXCEEDED - SEE WWW.PIR.ORG/WHOIS"));
        assert!(classifier().is_limit_exceeded("Your query rate is now high, please try it again later"));
        assert!(!classifier().is_limit_exceeded("Domain Name: EXAMPLE.COM"));
    }

    #[test]
    fn test_is_dnssec_enabled_exact_token() {
        // 测试场景：整词精确匹配，"unsigned" 含 "signed" 子串但不得命中
        let c = classifier();
        assert!(c.is_dnssec_enabled("Signed"));
        assert!(c.is_dnssec_enabled("signedDelegation"));
        assert!(c.is_dnssec_enabled("yes"));
        assert!(c.is_dnssec_enabled("ACTIVE"));
        assert!(!c.is_dnssec_enabled("unsigned"));
        assert!(!c.is_dnssec_enabled("inactive"));
        assert!(!c.is_dnssec_enabled(""));
    }

    #[test]
    fn test_fallback_exact_body() {
        // 测试场景：.bo 应答体逐字节相等为 NotFound，任何偏差为 InvalidData
        let c = classifier();
        let body = "\r\n\r\nwhois.nic.bo solo acepta consultas con dominios .bo";
        assert_eq!(c.fallback(body), Classification::NotFound);
        assert_eq!(c.fallback(&body[2..]), Classification::InvalidData);
        assert_eq!(c.fallback("garbled reply"), Classification::InvalidData);
    }

    #[test]
    fn test_classify_order_rate_limit_first() {
        // 测试场景：配额应答即便含其他片段也先判 RateLimited
        let c = classifier();
        assert_eq!(
            c.classify("Query limit exceeded, no match shown"),
            Classification::RateLimited
        );
        assert_eq!(c.classify("No match for domain"), Classification::NotFound);
        assert_eq!(
            c.classify("reserved domain name"),
            Classification::Premium
        );
        assert_eq!(c.classify("DPML Block"), Classification::Blocked);
        assert_eq!(
            c.classify("Domain Name: EXAMPLE.COM"),
            Classification::Registered
        );
    }

    #[test]
    fn test_classifier_with_substituted_rules() {
        // 测试场景：显式注入替代规则集（逐测试替换隐式全局表）
        let lib = RuleLibrary {
            version: "custom".to_string(),
            ignore_sentences: BoilerplateList(vec!["ignore me".to_string()]),
            not_found_keys: KeywordRule(vec!["totally gone".to_string()]),
            premium_keys: KeywordRule(vec!["pricey".to_string()]),
            blocked_keys: KeywordRule(vec!["walled".to_string()]),
            limit_keys: KeywordRule(vec!["slow down".to_string()]),
            dnssec_enabled_tokens: vec!["on".to_string()],
            ..Default::default()
        };
        let c = WhoisClassifier::new(Arc::new(lib));
        assert!(c.is_not_found("domain TOTALLY GONE"));
        assert!(!c.is_not_found("no match")); // 内置片段不再生效
        assert!(c.is_dnssec_enabled("on"));
        assert_eq!(c.fallback("anything"), Classification::InvalidData);
    }

    #[test]
    fn test_checks_are_deterministic() {
        // 测试场景：相同输入重复调用结果恒定
        let c = classifier();
        let text = "Status: AVAILABLE\r\n";
        let first = (
            c.is_not_found(text),
            c.is_premium(text),
            c.is_blocked(text),
            c.is_limit_exceeded(text),
        );
        for _ in 0..3 {
            let again = (
                c.is_not_found(text),
                c.is_premium(text),
                c.is_blocked(text),
                c.is_limit_exceeded(text),
            );
            assert_eq!(first, again);
        }
    }
}
