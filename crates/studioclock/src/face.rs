//! The clock's per-frame state machine.
//!
//! Each [`ClockFace::step`] is one iteration of the render loop:
//!
//! 1. look for a quit request among the frame's input events
//! 2. sample the time source
//! 3. pick this frame's colors (highlight rules, even seconds only)
//! 4. wipe the canvas at second 0
//! 5. draw the twelve five-minute markers
//! 6. light the current second
//! 7. draw the "HH:MM" readout
//!
//! Frame pacing is the runtime's job (see [`ClockConfig::throttle`]).
//!
//! Nothing is erased between frames except at the top of the minute, so
//! second indicators accumulate into a ring as the minute runs.

use std::sync::Arc;

use studioclock_engine::coords::Vec2;
use studioclock_engine::input::{InputEvent, Key, KeyState};
use studioclock_engine::scene::Canvas;
use studioclock_engine::text::FontId;

use crate::config::{ClockConfig, Layout, Rgb};
use crate::geometry::{tick_position, Point2D};
use crate::time_source::{ClockReading, TimeSource};

/// Ticks between five-minute markers.
pub const MARKER_STEP: usize = 5;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Colors for one frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FrameColors {
    /// Markers and second indicator.
    pub marks: Rgb,
    pub text: Rgb,
    pub highlighted: bool,
}

/// Window close, or Escape released.
pub fn is_quit_event(event: &InputEvent) -> bool {
    matches!(
        event,
        InputEvent::CloseRequested
            | InputEvent::Key {
                key: Key::Escape,
                state: KeyState::Released,
                ..
            }
    )
}

pub fn frame_colors(config: &ClockConfig, reading: &ClockReading) -> FrameColors {
    let rule = if reading.is_even_second() {
        config.highlight_for(reading)
    } else {
        None
    };

    match rule {
        Some(rule) => FrameColors {
            marks: rule.color,
            text: rule.color,
            highlighted: true,
        },
        None => FrameColors {
            marks: config.palette.led,
            text: config.palette.text,
            highlighted: false,
        },
    }
}

#[inline]
pub fn should_clear(reading: &ClockReading) -> bool {
    reading.second() == 0
}

/// Whole-pixel canvas position of a tick, truncated toward zero.
fn pixel(p: Point2D) -> Vec2 {
    Vec2::new(p.x.trunc() as f32, p.y.trunc() as f32)
}

pub struct ClockFace<T> {
    config: Arc<ClockConfig>,
    time: T,
    font: FontId,
    /// Starts as the configured layout; follows the surface once it is known.
    layout: Layout,
    state: LoopState,
    highlighted: bool,
    frames: u64,
}

impl<T: TimeSource> ClockFace<T> {
    pub fn new(config: Arc<ClockConfig>, time: T, font: FontId) -> Self {
        Self {
            layout: config.layout,
            config,
            time,
            font,
            state: LoopState::Running,
            highlighted: false,
            frames: 0,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Re-centers the face on a surface of `width` x `height` logical pixels.
    ///
    /// A fullscreen window ignores the configured size, so the layout is
    /// recomputed from what the window actually got. Marks drawn for the old
    /// layout are wiped. Surfaces too small to hold a face (a minimized
    /// window) keep the current layout.
    pub fn fit_surface(&mut self, width: u32, height: u32, canvas: &mut Canvas) {
        let layout = Layout::from_window(width, height);
        if layout == self.layout {
            return;
        }
        if width == 0 || layout.led_size < 1 || layout.font_size < 1 {
            log::debug!("surface {width}x{height} too small; keeping current layout");
            return;
        }

        log::info!(
            "surface is {width}x{height}, configured {}x{}; re-centering face",
            self.layout.width,
            self.layout.height,
        );
        self.layout = layout;
        canvas.clear(self.config.palette.background.to_color());
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one iteration. Once stopped, further calls do nothing.
    pub fn step(&mut self, events: &[InputEvent], canvas: &mut Canvas) -> LoopState {
        if self.state == LoopState::Stopped {
            return LoopState::Stopped;
        }

        if let Some(event) = events.iter().find(|e| is_quit_event(e)) {
            log::info!("quit requested ({event:?}) after {} frames", self.frames);
            self.state = LoopState::Stopped;
            return LoopState::Stopped;
        }

        let reading = self.time.now();
        let colors = frame_colors(&self.config, &reading);

        if colors.highlighted != self.highlighted {
            self.highlighted = colors.highlighted;
            let state = if colors.highlighted { "on" } else { "off" };
            log::info!("highlight {state} at {reading}");
        }

        if should_clear(&reading) {
            log::debug!("new minute at {reading}, clearing face");
            canvas.clear(self.config.palette.background.to_color());
        }

        self.draw_markers(canvas, colors.marks);
        self.draw_second(canvas, &reading, colors.marks);
        self.draw_readout(canvas, &reading, colors.text);

        self.frames += 1;
        log::trace!(
            "frame {} at {reading}: {} draw items",
            self.frames,
            canvas.items().len()
        );

        LoopState::Running
    }

    fn draw_markers(&self, canvas: &mut Canvas, color: Rgb) {
        let layout = &self.layout;
        let (cx, cy) = (layout.center_x as f64, layout.center_y as f64);
        let radius = layout.marker_radius();

        for tick in (0..60).step_by(MARKER_STEP) {
            let p = tick_position(tick, radius, cx, cy);
            canvas.fill_circle(pixel(p), layout.led_size as f32, color.to_color());
        }
    }

    fn draw_second(&self, canvas: &mut Canvas, reading: &ClockReading, color: Rgb) {
        let layout = &self.layout;
        let p = tick_position(
            reading.second() as i64,
            layout.second_radius(),
            layout.center_x as f64,
            layout.center_y as f64,
        );
        canvas.fill_circle(pixel(p), layout.led_size as f32, color.to_color());
    }

    fn draw_readout(&self, canvas: &mut Canvas, reading: &ClockReading, color: Rgb) {
        let layout = &self.layout;
        let (x, y) = layout.readout_origin();
        canvas.draw_text(
            reading.readout(),
            self.font,
            layout.font_size as f32,
            color.to_color(),
            Vec2::new(x.trunc() as f32, y.trunc() as f32),
        );
    }
}
