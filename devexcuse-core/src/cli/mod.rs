pub mod conf;
pub mod offline;
