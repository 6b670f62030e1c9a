pub mod arena;
pub mod types;
