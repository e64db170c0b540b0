//! 多值字段修正
//! EPP 状态行常携带 ICANN 说明 URL（"clientTransferProhibited https://..."），
//! NS 行可能携带根点或 IP 注记，统一缩减为单个规范 token

/// 缩减首 token：按空白切分取首段并小写化
/// 空串切分无结果时保留空串，保证长度/顺序不变
#[inline(always)]
fn first_token_lowered(entry: &str) -> String {
    entry
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// 修正域名状态列表（逐项缩减为首 token 小写）
pub fn fix_domain_status(status: &[String]) -> Vec<String> {
    status.iter().map(|entry| first_token_lowered(entry)).collect()
}

/// 修正 NS 列表（首 token 小写 + 去除尾部根点）
pub fn fix_name_servers(servers: &[String]) -> Vec<String> {
    servers
        .iter()
        .map(|entry| first_token_lowered(entry).trim_end_matches('.').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fix_domain_status_drops_epp_url() {
        // 测试场景：EPP 状态携带 ICANN URL，仅保留首 token 并小写
        let input = owned(&[
            "clientTransferProhibited https://icann.org/epp#clientTransferProhibited",
            "ok",
        ]);
        assert_eq!(
            fix_domain_status(&input),
            vec!["clienttransferprohibited", "ok"]
        );
    }

    #[test]
    fn test_fix_domain_status_preserves_length_and_order() {
        let input = owned(&["  serverHold  ", "", "PendingDelete extra"]);
        assert_eq!(fix_domain_status(&input), vec!["serverhold", "", "pendingdelete"]);
    }

    #[test]
    fn test_fix_name_servers_trims_root_dot() {
        // 测试场景：尾部根点去除，大小写归一
        let input = owned(&["NS1.EXAMPLE.COM.", "ns2.example.com"]);
        assert_eq!(
            fix_name_servers(&input),
            vec!["ns1.example.com", "ns2.example.com"]
        );
    }

    #[test]
    fn test_fix_name_servers_drops_glue_annotation() {
        let input = owned(&["ns1.example.com. 192.0.2.53", "NS2.EXAMPLE.ORG.\t2001:db8::1"]);
        assert_eq!(
            fix_name_servers(&input),
            vec!["ns1.example.com", "ns2.example.org"]
        );
    }

    #[test]
    fn test_fixers_empty_input() {
        // 测试场景：空入参产出空结果
        assert!(fix_domain_status(&[]).is_empty());
        assert!(fix_name_servers(&[]).is_empty());
    }
}
