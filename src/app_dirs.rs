use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Where the log file goes: `$HOME/.local/state/typetest`, else the platform data dir.
    pub fn log_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(
                PathBuf::from(home)
                    .join(".local")
                    .join("state")
                    .join("typetest"),
            )
        } else {
            ProjectDirs::from("", "", "typetest").map(|pd| pd.data_local_dir().to_path_buf())
        }
    }
}
