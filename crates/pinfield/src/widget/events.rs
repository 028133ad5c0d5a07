//! Events a widget can receive.
//!
//! Each event embeds an [`EventBase`]. A handler that consumes an event
//! marks it accepted; hosts stop forwarding accepted events.

use pinfield_render::{Point, Rect, Size};

/// Which modifier keys were down when a key event was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    pub shift: bool,
    /// Cmd on macOS.
    pub control: bool,
    /// Option on macOS.
    pub alt: bool,
    pub meta: bool,
}

impl KeyboardModifiers {
    pub const NONE: Self = Self::new(false, false, false);
    pub const SHIFT: Self = Self::new(true, false, false);
    pub const CTRL: Self = Self::new(false, true, false);
    pub const ALT: Self = Self::new(false, false, true);

    const fn new(shift: bool, control: bool, alt: bool) -> Self {
        Self {
            shift,
            control,
            alt,
            meta: false,
        }
    }

    /// True for modifiers that turn a key press into a command. Shift on its
    /// own still types text.
    pub fn is_shortcut(&self) -> bool {
        self.control || self.alt || self.meta
    }
}

/// The accepted flag carried by every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// A region of the widget, in local coordinates, needs painting.
#[derive(Debug, Clone, Copy)]
pub struct PaintEvent {
    pub base: EventBase,
    pub rect: Rect,
}

impl PaintEvent {
    pub fn new(rect: Rect) -> Self {
        Self {
            base: EventBase::new(),
            rect,
        }
    }
}

/// The host gave the widget a new size.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    pub base: EventBase,
    pub old_size: Size,
    pub new_size: Size,
}

impl ResizeEvent {
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// The widget moved within its parent.
#[derive(Debug, Clone, Copy)]
pub struct MoveEvent {
    pub base: EventBase,
    pub old_pos: Point,
    pub new_pos: Point,
}

impl MoveEvent {
    pub fn new(old_pos: Point, new_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            old_pos,
            new_pos,
        }
    }
}

/// What caused keyboard focus to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusReason {
    Mouse,
    Tab,
    /// Shift+Tab.
    Backtab,
    /// Set from code.
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    pub base: EventBase,
    pub reason: FocusReason,
}

impl FocusInEvent {
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    pub base: EventBase,
    pub reason: FocusReason,
}

impl FocusOutEvent {
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Key codes.
///
/// Only keys an entry field treats specially are named. Anything else is
/// [`Key::Unknown`]; its characters travel in [`KeyPressEvent::text`].
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    Backspace, Delete, Enter, Escape, Tab, Space,
    ArrowLeft, ArrowRight, Home, End,

    Unknown,
}

#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    pub base: EventBase,
    pub key: Key,
    pub modifiers: KeyboardModifiers,
    /// Characters produced by the press. Empty for keys such as Backspace.
    pub text: String,
    /// Auto-repeat from a held key.
    pub is_repeat: bool,
}

impl KeyPressEvent {
    pub fn new(
        key: Key,
        modifiers: KeyboardModifiers,
        text: impl Into<String>,
        is_repeat: bool,
    ) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }

    /// An unmodified press of `key` producing `text`.
    pub fn typed(key: Key, text: impl Into<String>) -> Self {
        Self::new(key, KeyboardModifiers::NONE, text, false)
    }

    /// An unmodified press of a key that produces no text.
    pub fn key(key: Key) -> Self {
        Self::typed(key, String::new())
    }
}

/// Everything [`Widget::event`](super::Widget::event) can be handed.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    Paint(PaintEvent),
    Resize(ResizeEvent),
    Move(MoveEvent),
    FocusIn(FocusInEvent),
    FocusOut(FocusOutEvent),
    KeyPress(KeyPressEvent),
}

impl WidgetEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::Paint(e) => &mut e.base,
            Self::Resize(e) => &mut e.base,
            Self::Move(e) => &mut e.base,
            Self::FocusIn(e) => &mut e.base,
            Self::FocusOut(e) => &mut e.base,
            Self::KeyPress(e) => &mut e.base,
        }
    }

    pub fn is_accepted(&self) -> bool {
        let base = match self {
            Self::Paint(e) => e.base,
            Self::Resize(e) => e.base,
            Self::Move(e) => e.base,
            Self::FocusIn(e) => e.base,
            Self::FocusOut(e) => e.base,
            Self::KeyPress(e) => e.base,
        };
        base.is_accepted()
    }

    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_then_ignore() {
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::key(Key::Backspace));
        assert!(!event.is_accepted());

        event.accept();
        assert!(event.is_accepted());

        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn shift_is_not_a_shortcut() {
        assert!(!KeyboardModifiers::SHIFT.is_shortcut());
        assert!(KeyboardModifiers::CTRL.is_shortcut());
        assert!(KeyboardModifiers::ALT.is_shortcut());
        assert!(!KeyboardModifiers::NONE.is_shortcut());
    }

    #[test]
    fn typed_press_has_no_modifiers() {
        let event = KeyPressEvent::typed(Key::Digit1, "1");
        assert_eq!(event.text, "1");
        assert_eq!(event.modifiers, KeyboardModifiers::NONE);
        assert!(!event.is_repeat);
        assert!(KeyPressEvent::key(Key::Enter).text.is_empty());
    }
}
