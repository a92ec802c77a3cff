use std::env;

use crate::constants::envvars;

/// Loads `.env` from the working directory, then the file named by
/// `BETASDK_ENV_FILE` if set. Returns what was loaded so it can be logged
/// once the logger is up.
pub fn load_dotenv() -> Vec<String> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path.display().to_string());
    }
    if let Ok(env_file) = env::var(envvars::ENV_FILE) {
        if dotenv::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }
    loaded
}
