pub mod calculator;
pub mod store;
pub mod token;
