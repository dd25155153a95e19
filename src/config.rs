use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "https://api.vebo.xyz/api";
pub const DEFAULT_OUTPUT_DIR: &str = "stream";
pub const DEFAULT_FILE_NAME: &str = "playlist.m3u";
/// Fixtures are keyed by the calendar date in GMT+7.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

/// Settings for a single playlist run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub output_dir: PathBuf,
    pub file_name: String,
    pub utc_offset_hours: i32,
}

impl Config {
    /// Full path of the playlist file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}
