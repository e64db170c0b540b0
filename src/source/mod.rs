mod builtin;
mod json;

// 导出常用项
pub use builtin::{BUILTIN_VERSION, build_builtin_library, builtin_rules};
pub use json::RuleSetParser;
