use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
    /// Rendering cannot continue; the runtime ends the run with an error.
    Fatal,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once per paced frame.
    ///
    /// `ctx.input` holds every input event received since the previous frame,
    /// including `InputEvent::CloseRequested`; the window only closes
    /// when this returns [`AppControl::Exit`] or [`AppControl::Fatal`].
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
