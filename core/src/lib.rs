pub mod filter;
pub mod matcher;
pub mod scanner;
