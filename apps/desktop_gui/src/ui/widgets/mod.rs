pub mod pagination;
pub mod user_table;
