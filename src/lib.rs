pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod ui;
