use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub capture_rate: Duration,
    pub display_count: usize,
    pub still_image_path: PathBuf,
    pub logger_timezone: chrono::FixedOffset,
    pub use_gui_display: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            capture_rate: Duration::from_secs(1),
            display_count: 3,
            still_image_path: PathBuf::from("assets/cat.jpg"),
            logger_timezone: mountain_standard_time(),
            use_gui_display: false,
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
