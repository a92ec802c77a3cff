pub const LOG_LEVEL: &str = "BETASDK_LOG_LEVEL";
/// Extra `.env` file loaded after the one in the working directory.
pub const ENV_FILE: &str = "BETASDK_ENV_FILE";
