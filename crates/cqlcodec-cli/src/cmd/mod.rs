pub mod literal;
pub mod read;
pub mod resolve;
pub mod types;
