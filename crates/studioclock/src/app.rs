//! Engine adapter: drives a [`ClockFace`] from the windowed runtime.

use std::sync::Arc;

use studioclock_engine::core::{App, AppControl, FrameCtx};
use studioclock_engine::device::GpuInit;
use studioclock_engine::render::shapes::circle::CircleRenderer;
use studioclock_engine::render::shapes::text::TextRenderer;
use studioclock_engine::scene::Canvas;
use studioclock_engine::text::FontSystem;
use studioclock_engine::window::Runtime;

use crate::config::ClockConfig;
use crate::error::Result;
use crate::face::{ClockFace, LoopState};
use crate::font;
use crate::time_source::{LocalClock, TimeSource};

/// Owns the face, its persistent canvas and the renderers that present it.
pub struct ClockApp<T> {
    face: ClockFace<T>,
    canvas: Canvas,
    fonts: FontSystem,
    circles: CircleRenderer,
    text: TextRenderer,
}

impl<T: TimeSource> ClockApp<T> {
    /// Loads the readout font. Fails before any window exists if no font can
    /// be loaded.
    pub fn new(config: Arc<ClockConfig>, time: T) -> Result<Self> {
        let mut fonts = FontSystem::new();
        let font_size = config.layout.font_size as f32;
        let font_id = font::load_first(&mut fonts, &config.font_paths, font_size)?;
        let canvas = Canvas::new(config.palette.background.to_color());

        Ok(Self {
            face: ClockFace::new(config, time, font_id),
            canvas,
            fonts,
            circles: CircleRenderer::new(),
            text: TextRenderer::new(),
        })
    }
}

impl<T: TimeSource> App for ClockApp<T> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (width, height) = ctx.window.logical_size();
        self.face
            .fit_surface(width.round() as u32, height.round() as u32, &mut self.canvas);

        if self.face.step(&ctx.input.events, &mut self.canvas) == LoopState::Stopped {
            return AppControl::Exit;
        }

        let canvas = &self.canvas;
        let fonts = &self.fonts;
        let circles = &mut self.circles;
        let text = &mut self.text;

        ctx.render(canvas.background(), |rctx, target| {
            circles.render(rctx, target, canvas);
            text.render(rctx, target, canvas, fonts);
        })
    }
}

/// Validates `config`, opens the window and runs the clock on local time
/// until the user quits.
pub fn run(config: ClockConfig) -> anyhow::Result<()> {
    config.validate()?;
    let config = Arc::new(config);

    log::info!(
        "starting {:?}: {}x{}, {} highlight rule(s), {:?} per frame",
        config.title,
        config.layout.width,
        config.layout.height,
        config.highlights.len(),
        config.throttle,
    );

    let app = ClockApp::new(Arc::clone(&config), LocalClock)?;
    Runtime::run(config.runtime_config(), GpuInit::default(), app)?;

    log::info!("clock stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::Error;

    fn unreachable_fonts() -> ClockConfig {
        ClockConfig::default().with_font_paths(["/nonexistent/studioclock/DejaVuSans-Bold.ttf"])
    }

    #[test]
    fn missing_font_fails_before_any_window() {
        let config = Arc::new(unreachable_fonts());
        match ClockApp::new(config, LocalClock) {
            Err(Error::FontNotFound { searched }) => assert_eq!(searched.len(), 1),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("font loaded from a nonexistent path"),
        }
    }

    #[test]
    fn run_rejects_invalid_config() {
        let err = run(ClockConfig::default().with_throttle(Duration::ZERO)).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::ZeroThrottle)));
    }

    #[test]
    fn run_reports_missing_font() {
        let err = run(unreachable_fonts()).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::FontNotFound { .. })));
    }
}
