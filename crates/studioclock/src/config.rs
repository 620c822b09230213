//! Clock configuration: palette, layout, highlight rules and window setup.
//!
//! [`ClockConfig::default`] reproduces the reference studio clock: 800x600,
//! red LEDs on black, yellow flashes at 09:28 and 13:35.

use std::path::PathBuf;
use std::time::Duration;

use studioclock_engine::paint::Color;
use studioclock_engine::window::{RuntimeConfig, WindowMode};
use winit::dpi::LogicalSize;

use crate::error::{Error, Result};
use crate::time_source::ClockReading;

/// An opaque sRGB color triple.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BRIGHT_BLUE: Rgb = Rgb(0, 50, 255);
    pub const DARK_RED: Rgb = Rgb(128, 0, 0);

    #[inline]
    pub fn to_color(self) -> Color {
        Color::opaque(self.0, self.1, self.2)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    /// Markers and the second indicator.
    pub led: Rgb,
    /// Color for rules added with [`ClockConfig::with_alarm`].
    pub highlight: Rgb,
    /// Center readout.
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            led: Rgb::RED,
            highlight: Rgb::YELLOW,
            text: Rgb::RED,
        }
    }
}

/// Pixel layout derived from the window size.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub center_x: i32,
    pub center_y: i32,
    /// LED dot radius.
    pub led_size: i32,
    /// Radius of the seconds ring.
    pub clock_size: i32,
    pub font_size: i32,
}

impl Layout {
    /// Scales every dimension off the window height, truncating to whole
    /// pixels.
    pub fn from_window(width: u32, height: u32) -> Self {
        let h = height as f64;
        Self {
            width,
            height,
            center_x: (width / 2) as i32,
            center_y: (height / 2) as i32,
            led_size: (h / 70.0) as i32,
            clock_size: (h / 2.4) as i32,
            font_size: (h / 5.0) as i32,
        }
    }

    /// Radius of the five-minute marker ring, just outside the seconds ring.
    pub fn marker_radius(&self) -> f64 {
        self.clock_size as f64 * 1.1
    }

    pub fn second_radius(&self) -> f64 {
        self.clock_size as f64
    }

    /// Top-left corner of the "HH:MM" text block.
    pub fn readout_origin(&self) -> (f64, f64) {
        let font = self.font_size as f64;
        (
            self.center_x as f64 - font * 1.85,
            self.center_y as f64 - font / 1.15,
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_window(800, 600)
    }
}

/// Flash the face in `color` on even seconds during one minute of the day.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HighlightRule {
    pub hour: u8,
    pub minute: u8,
    pub color: Rgb,
}

impl HighlightRule {
    pub fn new(hour: u8, minute: u8, color: Rgb) -> Self {
        Self {
            hour,
            minute,
            color,
        }
    }

    /// Minute match only; the even-second gate is applied by the face.
    pub fn matches(&self, reading: &ClockReading) -> bool {
        reading.hour() == self.hour && reading.minute() == self.minute
    }

    fn validate(&self) -> Result<()> {
        if self.hour > 23 || self.minute > 59 {
            return Err(Error::InvalidHighlight {
                hour: self.hour,
                minute: self.minute,
            });
        }
        Ok(())
    }
}

/// Everything the clock needs to open its window and draw.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub title: String,
    pub window_mode: WindowMode,
    pub layout: Layout,
    pub palette: Palette,
    /// Checked in order; the first match wins.
    pub highlights: Vec<HighlightRule>,
    /// Minimum time between frames.
    pub throttle: Duration,
    /// Font files tried in order; the first that loads is used.
    pub font_paths: Vec<PathBuf>,
}

pub const DEFAULT_TITLE: &str = "Studio Clock";
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(100);

/// DejaVu Sans Bold in the places common Linux distributions install it.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
    "/usr/local/share/fonts/DejaVuSans-Bold.ttf",
];

impl Default for ClockConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            title: DEFAULT_TITLE.to_string(),
            window_mode: WindowMode::Windowed,
            layout: Layout::default(),
            palette,
            highlights: vec![
                HighlightRule::new(9, 28, palette.highlight),
                HighlightRule::new(13, 35, palette.highlight),
            ],
            throttle: DEFAULT_THROTTLE,
            font_paths: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl ClockConfig {
    pub fn with_window_mode(mut self, mode: WindowMode) -> Self {
        self.window_mode = mode;
        self
    }

    /// Resizes the window and recomputes the layout from it.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.layout = Layout::from_window(width, height);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replaces all highlight rules.
    pub fn with_highlights(mut self, rules: impl IntoIterator<Item = HighlightRule>) -> Self {
        self.highlights = rules.into_iter().collect();
        self
    }

    /// Appends a rule in the palette's highlight color.
    pub fn with_alarm(mut self, hour: u8, minute: u8) -> Self {
        self.highlights
            .push(HighlightRule::new(hour, minute, self.palette.highlight));
        self
    }

    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_font_paths(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.font_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// The first rule matching the reading's hour and minute.
    pub fn highlight_for(&self, reading: &ClockReading) -> Option<&HighlightRule> {
        self.highlights.iter().find(|rule| rule.matches(reading))
    }

    pub fn validate(&self) -> Result<()> {
        for rule in &self.highlights {
            rule.validate()?;
        }

        if self.throttle.is_zero() {
            return Err(Error::ZeroThrottle);
        }

        let layout = &self.layout;
        if layout.led_size < 1 || layout.font_size < 1 || layout.width == 0 {
            return Err(Error::WindowTooSmall {
                width: layout.width,
                height: layout.height,
            });
        }

        Ok(())
    }

    /// Window settings for the engine runtime.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.layout.width as f64, self.layout.height as f64),
            mode: self.window_mode,
            resizable: false,
            frame_interval: Some(self.throttle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_layout() {
        let l = Layout::from_window(800, 600);
        assert_eq!((l.center_x, l.center_y), (400, 300));
        assert_eq!(l.led_size, 8);
        assert_eq!(l.clock_size, 250);
        assert_eq!(l.font_size, 120);
        assert!((l.marker_radius() - 275.0).abs() < 1e-9);

        let (x, y) = l.readout_origin();
        assert!((x - 178.0).abs() < 1e-9);
        assert!((y - (300.0 - 120.0 / 1.15)).abs() < 1e-9);
    }

    #[test]
    fn default_config_is_valid() {
        let c = ClockConfig::default();
        c.validate().unwrap();
        assert_eq!(c.title, "Studio Clock");
        assert_eq!(c.throttle, Duration::from_millis(100));
        assert_eq!(c.highlights.len(), 2);
        assert!(c.highlights.iter().all(|r| r.color == Rgb::YELLOW));
    }

    #[test]
    fn first_matching_rule_wins() {
        let c = ClockConfig::default().with_highlights([
            HighlightRule::new(7, 0, Rgb::GREEN),
            HighlightRule::new(7, 0, Rgb::WHITE),
        ]);
        let r = ClockReading::new(7, 0, 10).unwrap();
        assert_eq!(c.highlight_for(&r).map(|rule| rule.color), Some(Rgb::GREEN));
        assert!(c.highlight_for(&ClockReading::new(7, 1, 10).unwrap()).is_none());
    }

    #[test]
    fn alarm_uses_palette_highlight() {
        let c = ClockConfig::default()
            .with_palette(Palette {
                highlight: Rgb::BRIGHT_BLUE,
                ..Palette::default()
            })
            .with_alarm(18, 0);
        assert_eq!(c.highlights.last(), Some(&HighlightRule::new(18, 0, Rgb::BRIGHT_BLUE)));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_rule = ClockConfig::default().with_alarm(24, 0);
        assert!(matches!(bad_rule.validate(), Err(Error::InvalidHighlight { hour: 24, .. })));

        let zero = ClockConfig::default().with_throttle(Duration::ZERO);
        assert!(matches!(zero.validate(), Err(Error::ZeroThrottle)));

        let tiny = ClockConfig::default().with_window_size(100, 50);
        assert!(matches!(tiny.validate(), Err(Error::WindowTooSmall { .. })));
    }

    #[test]
    fn runtime_config_carries_window_settings() {
        let rc = ClockConfig::default()
            .with_window_mode(WindowMode::Fullscreen)
            .runtime_config();
        assert_eq!(rc.title, "Studio Clock");
        assert_eq!(rc.mode, WindowMode::Fullscreen);
        assert_eq!(rc.frame_interval, Some(Duration::from_millis(100)));
        assert_eq!(rc.initial_size.width, 800.0);
        assert_eq!(rc.initial_size.height, 600.0);
    }
}
