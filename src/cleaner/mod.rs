mod boilerplate;

pub use boilerplate::strip_boilerplate;
