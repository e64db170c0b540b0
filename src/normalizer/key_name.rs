//! 注册局字段名清洗
//! 不同注册局对同一属性的标签写法混杂（连字符/下划线/括号注记/前缀），
//! 统一清洗后才能进入归一化表查询

/// 清洗原始字段标签
/// 清洗流程（顺序固定）：
/// 1. 截断首个字面括号及其后内容
/// 2. 连字符/下划线/斜杠/反斜杠/撇号/句点 → 空格
/// 3. 去除字面前缀 "Registry " 与 "Sponsoring "
/// 4. 去除首尾空白，小写化
pub fn clear_name(key: &str) -> String {
    let key = match key.split_once('(') {
        Some((head, _)) => head,
        None => key,
    };

    let replaced: String = key
        .chars()
        .map(|c| match c {
            '-' | '_' | '/' | '\\' | '\'' | '.' => ' ',
            other => other,
        })
        .collect();

    let stripped = replaced.strip_prefix("Registry ").unwrap_or(&replaced);
    let stripped = stripped.strip_prefix("Sponsoring ").unwrap_or(stripped);

    stripped.trim().to_lowercase()
}
