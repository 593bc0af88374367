use std::{env, path::PathBuf};

pub const NOTES_KEY: &str = "daily-notes-app";
pub const MILESTONES_KEY: &str = "daily-notes-milestones";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub notes_key: String,
    pub milestones_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            notes_key: NOTES_KEY.to_string(),
            milestones_key: MILESTONES_KEY.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var("JOURNAL_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }
        config
    }
}
