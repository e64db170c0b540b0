//! 内置规则集（版本化配置工件）
//! 片段表逐字节固定，不得随意增删改：关键词表是跨数百注册局长期实测沉淀，
//! 过度合并变体会重新引入样板剥离所要防范的误报风险
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::core::{BoilerplateList, KeywordRule, RuleLibrary};

/// 内置规则集版本号
pub const BUILTIN_VERSION: &str = "builtin-2020.05";

/// not-found 判定前剥离的免责声明短语（原始大小写，整句）
static IGNORE_SENTENCES: &[&str] = &[
    "(i) to assist persons in determining whether a specific domain name registration record is available or not in the Registry Operator database",
    "It allows\r\n% persons to check whether a specific domain name is still available or not",
    "a specific domain name registration record is available or not",
    "obtain information about whether a .tel domain name is available for registration",

    "Domain names not found in this WHOIS database are not necessarily available for registration.",
    "(i) a response from the Service indicating no match was found, does not guarantee",
    "Note that the lack of a whois record for a particular domain does not indicate that the name is available for registration.",
    "By submitting a query you agree not to use the information made available",

    "service is available to any Internet user",
    "Our contact information is available at",
    "More details on the domain may be available at below whois-web URL.",
    "request further details is available.",
    "The full WHOIS output may be available to individuals and organisations with a legitimate interest",
    "The contact details for this contact ID may be available\r\n",
    "Registrant Credit: Not Available",

    "Status:\tNOT AVAILABLE",
];

/// 未注册关键词（全小写存储，子串命中）
static NOT_FOUND_KEYS: &[&str] = &[
    "no found",
    "no match",
    "not found",
    "not match",
    "no entries found",
    "no data found",
    "no data was found",
    "this query returned 0 objects",
    "not registered",
    "not been registered",
    "object does not exist",
    "no object found",
    "object_not_found",
    "nothing found",
    "domain unknown",
    "domain name not known",
    "no such domain",
    "does not exist",
    "we do not have an entry in our database matching your query.",
    "not find matchingrecord", // .xn--55qw42g
    "no information available about domain name",
    "is free",
    "is available",
    "available\r\n",
    "status: available",
    "status:\t\t\tavailable",
    "status:             available",
    "registration status: available",
    "status: free",
    "query_status: 220 available",
    "error.",                               // .sa
    "invalid input",                        // .tr  with latin chars
    "invalid domain name",                  // .xn--90a3ac with latin chars
    "parameter value syntax error",         // .xn--90ais with latin chars
    "invalid query syntax",                 // .xn--cg4bki with latin chars
    "wrong top level domain name in query", // .xn--y9a3aq with latin chars
];

/// 保留/溢价域名关键词
static PREMIUM_KEYS: &[&str] = &[
    "reserved domain name",
    "reserved by the registry",
    "reserved by",
    "platinum domain",
];

/// 品牌封锁关键词（DPML 等）
static BLOCKED_KEYS: &[&str] = &[
    "the registration of this domain is restricted",
    "dpml block",
    "not available for registration",
    "the domain name is not available", // .qa
    "object cannot be registered",
];

/// 查询配额超限关键词
static LIMIT_KEYS: &[&str] = &[
    "limit exceeded",
    "query rate is now high",
    "please try it again",
];

/// DNSSEC 启用态取值（整词精确匹配）
static DNSSEC_ENABLED_TOKENS: &[&str] = &["yes", "active", "signed", "signeddelegation"];

/// 兜底判定用的完整应答体（无任何可识别关键词的注册局）
static FALLBACK_NOT_FOUND_BODIES: &[&str] = &[
    "\r\n\r\nwhois.nic.bo solo acepta consultas con dominios .bo", // no special content for domain not found states
];

/// 归一化映射对：清洗后标签 → 规范键
/// 多对一允许（不同注册局同义标签收敛到同一规范键），左列键全局唯一
static KEY_RULES: &[(&str, &str)] = &[
    // ---------- 域名本体 ----------
    ("id", "domain_id"),
    ("roid", "domain_id"),
    ("domain id", "domain_id"),
    ("domain", "domain_name"),
    ("domain name", "domain_name"),
    ("query", "domain_name"),
    ("status", "domain_status"),
    ("state", "domain_status"),
    ("domain status", "domain_status"),
    ("domain state", "domain_status"),
    ("registration status", "domain_status"),
    ("query status", "domain_status"),
    ("dnssec", "domain_dnssec"),
    ("dnssec ds data", "domain_dnssec"),
    ("signing key", "domain_dnssec"),
    ("whois server", "whois_server"),
    ("registrar whois server", "whois_server"),
    // ---------- NS ----------
    ("dns", "name_servers"),
    ("nserver", "name_servers"),
    ("name server", "name_servers"),
    ("name servers", "name_servers"),
    ("nameserver", "name_servers"),
    ("nameservers", "name_servers"),
    ("name servers information", "name_servers"),
    ("host name", "name_servers"),
    ("dns servers", "name_servers"),
    ("domain nameservers", "name_servers"),
    ("domain servers in listed order", "name_servers"),
    // ---------- 时间 ----------
    ("created", "created_date"),
    ("create date", "created_date"),
    ("created date", "created_date"),
    ("created on", "created_date"),
    ("creation date", "created_date"),
    ("registered", "created_date"),
    ("registered on", "created_date"),
    ("registered date", "created_date"),
    ("registration date", "created_date"),
    ("registration time", "created_date"),
    ("commencement date", "created_date"),
    ("domain registration date", "created_date"),
    ("domain create date", "created_date"),
    ("record created", "created_date"),
    ("activated", "created_date"),
    ("changed", "updated_date"),
    ("modified", "updated_date"),
    ("updated", "updated_date"),
    ("updated on", "updated_date"),
    ("update date", "updated_date"),
    ("updated date", "updated_date"),
    ("last update", "updated_date"),
    ("last updated", "updated_date"),
    ("last updated on", "updated_date"),
    ("last modified", "updated_date"),
    ("domain datelastmodified", "updated_date"),
    ("record last updated", "updated_date"),
    ("expire", "expired_date"),
    ("expires", "expired_date"),
    ("expired", "expired_date"),
    ("expires on", "expired_date"),
    ("expire date", "expired_date"),
    ("expiry date", "expired_date"),
    ("expiration date", "expired_date"),
    ("expiration time", "expired_date"),
    ("expiration datetime", "expired_date"),
    ("registrar registration expiration date", "expired_date"),
    ("domain expiration date", "expired_date"),
    ("record expires", "expired_date"),
    ("paid till", "expired_date"),
    ("valid until", "expired_date"),
    ("renewal date", "expired_date"),
    // ---------- 注册商 ----------
    ("registrar id", "registrar_id"),
    ("registrar iana id", "registrar_id"),
    ("registrar", "registrar_name"),
    ("registrar name", "registrar_name"),
    ("registrar organization", "registrar_name"),
    ("registration service provider", "registrar_name"),
    ("authorized agency", "registrar_name"),
    ("url", "referral_url"),
    ("web", "referral_url"),
    ("referral url", "referral_url"),
    ("registrar url", "referral_url"),
    ("registrar web", "referral_url"),
    ("registration service url", "referral_url"),
    ("registrar phone", "registrar_phone"),
    ("registrar phone number", "registrar_phone"),
    ("registrar abuse contact phone", "registrar_phone"),
    ("registrar email", "registrar_email"),
    ("registrar contact email", "registrar_email"),
    ("registrar abuse contact email", "registrar_email"),
    // ---------- 注册人 ----------
    ("registrant id", "registrant_id"),
    ("registrant", "registrant_name"),
    ("registrant name", "registrant_name"),
    ("registrant contact", "registrant_name"),
    ("registrant contact name", "registrant_name"),
    ("holder", "registrant_name"),
    ("registrant org", "registrant_organization"),
    ("registrant organization", "registrant_organization"),
    ("registrant organisation", "registrant_organization"),
    ("registrant street", "registrant_street"),
    ("registrant address", "registrant_street"),
    ("registrant s address", "registrant_street"),
    ("registrant city", "registrant_city"),
    ("registrant state province", "registrant_state_province"),
    ("registrant postal code", "registrant_postal_code"),
    ("registrant country", "registrant_country"),
    ("registrant country economy", "registrant_country"),
    ("registrant phone", "registrant_phone"),
    ("registrant phone number", "registrant_phone"),
    ("registrant phone ext", "registrant_phone_ext"),
    ("registrant fax", "registrant_fax"),
    ("registrant fax no", "registrant_fax"),
    ("registrant facsimile", "registrant_fax"),
    ("registrant facsimile number", "registrant_fax"),
    ("registrant fax ext", "registrant_fax_ext"),
    ("registrant email", "registrant_email"),
    ("registrant e mail", "registrant_email"),
    ("registrant contact email", "registrant_email"),
    // ---------- 管理联系人 ----------
    ("admin c", "administrative_id"),
    ("admin id", "administrative_id"),
    ("administrative id", "administrative_id"),
    ("admin name", "administrative_name"),
    ("administrative name", "administrative_name"),
    ("admin contact", "administrative_name"),
    ("administrative contact", "administrative_name"),
    ("admin org", "administrative_organization"),
    ("admin organization", "administrative_organization"),
    ("administrative organization", "administrative_organization"),
    ("admin street", "administrative_street"),
    ("administrative street", "administrative_street"),
    ("admin address", "administrative_street"),
    ("admin city", "administrative_city"),
    ("administrative city", "administrative_city"),
    ("admin state province", "administrative_state_province"),
    ("administrative state province", "administrative_state_province"),
    ("admin postal code", "administrative_postal_code"),
    ("administrative postal code", "administrative_postal_code"),
    ("admin country", "administrative_country"),
    ("administrative country", "administrative_country"),
    ("admin phone", "administrative_phone"),
    ("administrative phone", "administrative_phone"),
    ("admin phone ext", "administrative_phone_ext"),
    ("administrative phone ext", "administrative_phone_ext"),
    ("admin fax", "administrative_fax"),
    ("administrative fax", "administrative_fax"),
    ("admin fax ext", "administrative_fax_ext"),
    ("administrative fax ext", "administrative_fax_ext"),
    ("admin email", "administrative_email"),
    ("administrative email", "administrative_email"),
    ("admin contact email", "administrative_email"),
    // ---------- 技术联系人 ----------
    ("tech c", "technical_id"),
    ("tech id", "technical_id"),
    ("technical id", "technical_id"),
    ("tech name", "technical_name"),
    ("technical name", "technical_name"),
    ("tech contact", "technical_name"),
    ("technical contact", "technical_name"),
    ("tech org", "technical_organization"),
    ("tech organization", "technical_organization"),
    ("technical organization", "technical_organization"),
    ("tech street", "technical_street"),
    ("technical street", "technical_street"),
    ("tech address", "technical_street"),
    ("tech city", "technical_city"),
    ("technical city", "technical_city"),
    ("tech state province", "technical_state_province"),
    ("technical state province", "technical_state_province"),
    ("tech postal code", "technical_postal_code"),
    ("technical postal code", "technical_postal_code"),
    ("tech country", "technical_country"),
    ("technical country", "technical_country"),
    ("tech phone", "technical_phone"),
    ("technical phone", "technical_phone"),
    ("tech phone ext", "technical_phone_ext"),
    ("technical phone ext", "technical_phone_ext"),
    ("tech fax", "technical_fax"),
    ("technical fax", "technical_fax"),
    ("tech fax ext", "technical_fax_ext"),
    ("technical fax ext", "technical_fax_ext"),
    ("tech email", "technical_email"),
    ("technical email", "technical_email"),
    ("tech contact email", "technical_email"),
    // ---------- 账务联系人 ----------
    ("billing c", "billing_id"),
    ("billing id", "billing_id"),
    ("billing name", "billing_name"),
    ("billing contact", "billing_name"),
    ("billing org", "billing_organization"),
    ("billing organization", "billing_organization"),
    ("billing street", "billing_street"),
    ("billing address", "billing_street"),
    ("billing city", "billing_city"),
    ("billing state province", "billing_state_province"),
    ("billing postal code", "billing_postal_code"),
    ("billing country", "billing_country"),
    ("billing phone", "billing_phone"),
    ("billing phone ext", "billing_phone_ext"),
    ("billing fax", "billing_fax"),
    ("billing fax ext", "billing_fax_ext"),
    ("billing email", "billing_email"),
    ("billing contact email", "billing_email"),
];

fn to_string_vec(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|s| s.to_string()).collect()
}

/// 从静态表装配内置规则库
pub fn build_builtin_library() -> RuleLibrary {
    RuleLibrary {
        version: BUILTIN_VERSION.to_string(),
        ignore_sentences: BoilerplateList(to_string_vec(IGNORE_SENTENCES)),
        not_found_keys: KeywordRule(to_string_vec(NOT_FOUND_KEYS)),
        premium_keys: KeywordRule(to_string_vec(PREMIUM_KEYS)),
        blocked_keys: KeywordRule(to_string_vec(BLOCKED_KEYS)),
        limit_keys: KeywordRule(to_string_vec(LIMIT_KEYS)),
        dnssec_enabled_tokens: to_string_vec(DNSSEC_ENABLED_TOKENS),
        fallback_not_found_bodies: to_string_vec(FALLBACK_NOT_FOUND_BODIES),
        key_rules: KEY_RULES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

/// 全局内置规则库单例（零拷贝共享，进程生命周期只读）
static BUILTIN_RULES: Lazy<Arc<RuleLibrary>> = Lazy::new(|| {
    let lib = build_builtin_library();
    // 内置表在测试中全量校验，运行期失败仅记录
    if let Err(e) = lib.validate() {
        log::warn!("Builtin rule library validation failed: {}", e);
    }
    Arc::new(lib)
});

/// 获取内置规则库（Arc clone 仅增加引用计数）
pub fn builtin_rules() -> Arc<RuleLibrary> {
    BUILTIN_RULES.clone()
}
