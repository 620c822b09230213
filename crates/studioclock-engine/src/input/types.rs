/// Keyboard key identifier.
///
/// Only keys the engine gives meaning to get a variant; everything else keeps
/// its platform key code in `Other`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    /// Platform-dependent key not represented here (0 when unidentified).
    Other(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is a key-repeat.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),

    /// The user asked the window to close (title-bar button, WM shortcut).
    ///
    /// The runtime does not close the window on its own; the app decides.
    CloseRequested,
}

