mod enums;
mod rule;

// 导出常用项
pub use enums::Classification;
pub use rule::{BoilerplateList, KeywordRule, RuleLibrary};
