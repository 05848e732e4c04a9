//! Controller input with per-frame edge detection

use std::ops::BitOr;

/// Pad button bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Buttons(pub u16);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const UP: Buttons = Buttons(1 << 0);
    pub const DOWN: Buttons = Buttons(1 << 1);
    pub const LEFT: Buttons = Buttons(1 << 2);
    pub const RIGHT: Buttons = Buttons(1 << 3);
    pub const A: Buttons = Buttons(1 << 4);
    pub const B: Buttons = Buttons(1 << 5);
    pub const C: Buttons = Buttons(1 << 6);
    pub const START: Buttons = Buttons(1 << 7);
    pub const X: Buttons = Buttons(1 << 8);
    pub const Y: Buttons = Buttons(1 << 9);
    pub const Z: Buttons = Buttons(1 << 10);
    pub const MODE: Buttons = Buttons(1 << 11);

    /// Buttons that confirm / advance a dialogue
    pub const CONFIRM: Buttons = Buttons(Self::A.0 | Self::START.0);

    /// True if any button in `mask` is set
    pub fn intersects(self, mask: Buttons) -> bool {
        self.0 & mask.0 != 0
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// Current and previous frame's button state.
///
/// Call [`InputState::update`] once per frame with the raw pad reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    current: Buttons,
    previous: Buttons,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch a new frame's reading
    pub fn update(&mut self, raw: Buttons) {
        self.previous = self.current;
        self.current = raw;
    }

    /// Down this frame
    pub fn is_held(&self, mask: Buttons) -> bool {
        self.current.intersects(mask)
    }

    /// Down this frame, up the frame before
    pub fn just_pressed(&self, mask: Buttons) -> bool {
        self.current.intersects(mask) && !self.previous.intersects(mask)
    }

    /// Up this frame, down the frame before
    pub fn just_released(&self, mask: Buttons) -> bool {
        !self.current.intersects(mask) && self.previous.intersects(mask)
    }

    pub fn current(&self) -> Buttons {
        self.current
    }
}
