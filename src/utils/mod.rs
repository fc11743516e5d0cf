pub mod config;
pub mod grading;
pub mod input;
pub mod report;
