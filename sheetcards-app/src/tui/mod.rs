pub mod app;
pub mod inputs;
pub mod views;
