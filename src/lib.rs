pub mod catalog;
pub mod compute;
pub mod grade;
pub mod input;
pub mod output;
pub mod session;
