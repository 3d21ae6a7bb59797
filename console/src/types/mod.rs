const DEFAULT_LOG_DIR: &str = "logs";

const DEFAULT_SESSION: &str = "console";

pub mod config;

pub mod console_error;

pub mod seed;

pub mod render;

pub mod menu;
