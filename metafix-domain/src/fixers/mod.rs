mod default_value;

pub use default_value::{DefaultValueFixer, default_value_from_column_default};
