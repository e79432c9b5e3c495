//! Typed focus-signal channel.
//!
//! One pending slot, last write wins: a burst of signals between two frames
//! collapses to the most recent one and nothing is replayed. Publishers and
//! the stage share the bus by reference (`Rc<SignalBus>` on web).

use crate::focus::FocusKind;
use glam::Vec3;
use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusRequest {
    pub kind: FocusKind,
    pub target: Option<Vec3>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Signal {
    RequestFocus(FocusRequest),
    /// Back to idle with a hard camera reset to the base pose.
    RequestIdle,
    /// Back to idle, camera eases home.
    ReleaseFocus,
}

impl Signal {
    pub fn focus(kind: FocusKind, target: Option<Vec3>) -> Self {
        Signal::RequestFocus(FocusRequest { kind, target })
    }
}

#[derive(Debug, Default)]
pub struct SignalBus {
    pending: Cell<Option<Signal>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, signal: Signal) {
        if let Some(dropped) = self.pending.replace(Some(signal)) {
            log::debug!("[bus] {dropped:?} superseded by {signal:?}");
        }
    }

    pub fn take(&self) -> Option<Signal> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        let signal = self.pending.get();
        signal.is_some()
    }
}
