//! Shared key-code comparison space
//!
//! The bound control is configured as a single number, so all three device
//! classes are flattened into disjoint numeric ranges: keyboard scan codes
//! start at 0, mouse buttons at 256, gamepad controls at 266. Gamepad
//! events carry platform button masks rather than small indices, so they
//! go through a fixed 16-entry table first.

use super::event::DeviceClass;

pub const KEYBOARD_OFFSET: u32 = 0;
pub const MOUSE_OFFSET: u32 = 256;
pub const GAMEPAD_OFFSET: u32 = 266;

/// Raw gamepad key codes as the host input layer reports them.
///
/// These are XInput-style button masks; the triggers are the engine's
/// pseudo key codes 0x9/0xA (the engine synthesizes button events for
/// them instead of reporting axis values).
mod raw {
    pub const DPAD_UP: u32 = 0x0001;
    pub const DPAD_DOWN: u32 = 0x0002;
    pub const DPAD_LEFT: u32 = 0x0004;
    pub const DPAD_RIGHT: u32 = 0x0008;
    pub const START: u32 = 0x0010;
    pub const BACK: u32 = 0x0020;
    pub const LEFT_THUMB: u32 = 0x0040;
    pub const RIGHT_THUMB: u32 = 0x0080;
    pub const LEFT_SHOULDER: u32 = 0x0100;
    pub const RIGHT_SHOULDER: u32 = 0x0200;
    pub const A: u32 = 0x1000;
    pub const B: u32 = 0x2000;
    pub const X: u32 = 0x4000;
    pub const Y: u32 = 0x8000;
    pub const LEFT_TRIGGER: u32 = 0x0009;
    pub const RIGHT_TRIGGER: u32 = 0x000A;
}

/// Map a raw gamepad key code to its flattened control index (0-15).
///
/// Returns `None` for codes outside the table; callers treat that as
/// "not the bound control".
pub fn gamepad_index(raw_code: u32) -> Option<u32> {
    let index = match raw_code {
        raw::DPAD_UP => 0,
        raw::DPAD_DOWN => 1,
        raw::DPAD_LEFT => 2,
        raw::DPAD_RIGHT => 3,
        raw::START => 4,
        raw::BACK => 5,
        raw::LEFT_THUMB => 6,
        raw::RIGHT_THUMB => 7,
        raw::LEFT_SHOULDER => 8,
        raw::RIGHT_SHOULDER => 9,
        raw::A => 10,
        raw::B => 11,
        raw::X => 12,
        raw::Y => 13,
        raw::LEFT_TRIGGER => 14,
        raw::RIGHT_TRIGGER => 15,
        _ => return None,
    };
    Some(index)
}

/// Flatten a device-native key code into the shared comparison space.
pub fn flatten(device: DeviceClass, raw_code: u32) -> Option<u32> {
    match device {
        DeviceClass::Keyboard => Some(raw_code + KEYBOARD_OFFSET),
        DeviceClass::Mouse => Some(raw_code + MOUSE_OFFSET),
        DeviceClass::Gamepad => gamepad_index(raw_code).map(|i| i + GAMEPAD_OFFSET),
    }
}
