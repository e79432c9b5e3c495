pub mod keyboard;
pub mod orientation;
pub mod pointer;
pub mod signals;

pub use keyboard::wire_global_keydown;
pub use orientation::wire_orientation;
pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use signals::{wire_overlay_buttons, wire_window_signals};
