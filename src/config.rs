use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default configuration
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_THEME: &str = "dark";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    /// Base URL of the Nova API backend.
    pub api_url: String,
    /// "dark" or "light".
    pub theme: String,
    /// Sent-message history for up/down recall in the input bar.
    #[serde(default)]
    pub history: Vec<String>,
    /// Last conversation id, so a session can be resumed.
    #[serde(default)]
    pub last_conversation_id: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme: DEFAULT_THEME.to_string(),
            history: Vec::new(),
            last_conversation_id: None,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "nova", "nova-client") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}
