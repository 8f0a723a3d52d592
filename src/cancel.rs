use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Tracks the newest call issued for one logical input field.
///
/// Re-typing in a search box issues a fresh call per keystroke; only the
/// newest one may apply its result. [`CallSlot::begin`] supersedes every
/// token handed out before it, and a superseded completion is discarded
/// at [`CallToken::accept`] time instead of overwriting newer state.
#[derive(Clone, Debug, Default)]
pub struct CallSlot {
    current: Arc<AtomicU64>,
}

impl CallSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new call, invalidating all previously issued tokens.
    pub fn begin(&self) -> CallToken {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        CallToken {
            slot: Arc::clone(&self.current),
            id,
        }
    }
}

/// Handle identifying one in-flight call on a [`CallSlot`].
#[derive(Clone, Debug)]
pub struct CallToken {
    slot: Arc<AtomicU64>,
    id: u64,
}

impl CallToken {
    /// Whether no newer call has been started on the same slot.
    pub fn is_current(&self) -> bool {
        self.slot.load(Ordering::SeqCst) == self.id
    }

    /// Applies a completed call's result only while the token is current.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        self.is_current().then_some(value)
    }
}
