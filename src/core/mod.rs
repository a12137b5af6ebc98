pub mod engine;
pub mod index;
pub mod matcher;
pub mod rules;
pub mod types;
