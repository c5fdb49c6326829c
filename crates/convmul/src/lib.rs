//! convmul library: the associativity and timing harness behind the binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod experiment;
pub mod generator;
pub mod report;
