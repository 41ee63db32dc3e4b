pub mod app;
pub mod runner;
