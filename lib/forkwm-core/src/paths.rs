use std::path::PathBuf;

const APP_DIR: &str = "forkwm";

/// `<config dir>/forkwm/config.yaml`. The file may not exist yet.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_DIR).join("config.yaml"))
}

/// `<local data dir>/forkwm/forkwm.log`, creating the directory if needed. `None` when the
/// platform has no data dir or it cannot be created.
pub fn log_file_path() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join(APP_DIR);
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join(format!("{APP_DIR}.log")))
}
