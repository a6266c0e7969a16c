pub mod account;
pub mod funding;
pub mod greet;
pub mod program;
pub mod report;
