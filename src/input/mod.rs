//! Button events and the shared key-code comparison space

mod event;
pub mod keycode;

pub use event::{ButtonEvent, ButtonPhase, DeviceClass};
pub use keycode::flatten;
