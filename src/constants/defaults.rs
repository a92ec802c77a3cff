pub const LOG_LEVEL: &str = "info";
