//! Button event model
//!
//! The host delivers one event per tick while a button is engaged: a
//! single `Down` on press, `Held` while it stays down, and one `Up` on
//! release. `held_secs` is the host's accumulated hold timer; it is
//! deliberately mutable because the disambiguator zeroes it to keep the
//! host's own hold-to-sprint logic from engaging.

/// Which physical device produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Keyboard,
    Mouse,
    Gamepad,
}

/// Phase of the press cycle this event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPhase {
    Down,
    Held,
    Up,
}

/// One button event as delivered by the host input source.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonEvent {
    pub device: DeviceClass,
    /// Device-native key code, before flattening into the shared space.
    pub raw_code: u32,
    pub phase: ButtonPhase,
    /// Seconds the button has been continuously pressed. Mutable: the
    /// disambiguator may rewrite it before forwarding.
    pub held_secs: f32,
}

impl ButtonEvent {
    pub fn new(device: DeviceClass, raw_code: u32, phase: ButtonPhase, held_secs: f32) -> Self {
        Self { device, raw_code, phase, held_secs }
    }

    pub fn is_down(&self) -> bool {
        self.phase == ButtonPhase::Down
    }

    pub fn is_up(&self) -> bool {
        self.phase == ButtonPhase::Up
    }

    pub fn is_held(&self) -> bool {
        self.phase == ButtonPhase::Held
    }
}
