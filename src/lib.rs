pub mod config;
pub mod retrieval;
pub mod schema;
pub mod text;
