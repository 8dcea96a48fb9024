pub mod rect;
pub mod types;
