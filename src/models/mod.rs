pub mod plan;
pub mod quote;
