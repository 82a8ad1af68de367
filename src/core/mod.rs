pub mod lenient;
pub mod types;
