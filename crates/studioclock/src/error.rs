use std::path::PathBuf;

use studioclock_engine::text::FontLoadError;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No usable font found ({} locations searched)", .searched.len())]
    FontNotFound { searched: Vec<PathBuf> },
    #[error("Failed to load font {path:?}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: FontLoadError,
    },
    #[error("Invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidReading { hour: u8, minute: u8, second: u8 },
    #[error("Invalid highlight time {hour:02}:{minute:02}")]
    InvalidHighlight { hour: u8, minute: u8 },
    #[error("Throttle interval must be non-zero")]
    ZeroThrottle,
    #[error("Window {width}x{height} is too small for the clock face")]
    WindowTooSmall { width: u32, height: u32 },
}
