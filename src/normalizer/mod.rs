mod key_name;
mod table;

// 导出常用项
pub use key_name::clear_name;
pub use table::NormalizationTable;
