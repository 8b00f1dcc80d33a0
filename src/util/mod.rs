pub mod filter;
pub mod time;
