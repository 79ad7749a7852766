pub mod commands;
pub mod configuration;
pub mod model;
pub mod shell;
pub mod util;
pub mod views;
