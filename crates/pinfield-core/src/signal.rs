//! Change notifications.
//!
//! A widget owns one [`Signal`] per kind of change it reports; observers
//! attach closures with [`Signal::connect`]. Widgets are driven from a
//! single UI thread, so emission is direct: every closure runs inside
//! [`Signal::emit`], oldest connection first.
//!
//! The connection table is copied out before any closure runs. A closure
//! may therefore connect, disconnect or re-emit on the signal it was called
//! from; connections made during an emission first see the next one.
//!
//! ```
//! use pinfield_core::Signal;
//!
//! let input_completed = Signal::<String>::new();
//! let id = input_completed.connect(|pin| {
//!     println!("PIN entered: {} digits", pin.len());
//! });
//!
//! input_completed.emit("123456".to_string());
//! input_completed.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::SignalError;
use crate::logging::targets;

new_key_type! {
    /// Handle for one connected closure. Stays valid until disconnected.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A list of closures called with `&Args` on every [`emit`](Self::emit).
///
/// Use `()` when there is nothing to pass and a tuple for several values.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Like [`connect`](Self::connect), but the connection lives only as long
    /// as the returned guard.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            id: self.connect(slot),
            signal: self,
        }
    }

    /// Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    pub fn try_disconnect(&self, id: ConnectionId) -> Result<(), SignalError> {
        self.disconnect(id)
            .then_some(())
            .ok_or(SignalError::InvalidConnection)
    }

    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// While blocked, [`emit`](Self::emit) drops its arguments unseen.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "emit suppressed, signal blocked");
            return;
        }

        let snapshot: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, slots = snapshot.len(), "emit");

        for slot in &snapshot {
            slot(&args);
        }
    }
}

/// Disconnects its closure when dropped. See [`Signal::connect_scoped`].
///
/// ```
/// use pinfield_core::Signal;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicI32, Ordering};
///
/// let signal = Signal::<i32>::new();
/// let total = Arc::new(AtomicI32::new(0));
/// {
///     let total = total.clone();
///     let _guard = signal.connect_scoped(move |&n| {
///         total.fetch_add(n, Ordering::SeqCst);
///     });
///     signal.emit(42);
/// }
/// signal.emit(43);
/// assert_eq!(total.load(Ordering::SeqCst), 42);
/// ```
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn recorder(signal: &Signal<i32>) -> (Arc<Mutex<Vec<i32>>>, ConnectionId) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let id = signal.connect(move |&v| sink.lock().push(v));
        (log, id)
    }

    #[test]
    fn emits_in_order() {
        let signal = Signal::<i32>::new();
        let (log, _) = recorder(&signal);

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*log.lock(), vec![42, 100]);
    }

    #[test]
    fn disconnected_slot_stops_receiving() {
        let signal = Signal::<i32>::new();
        let (log, id) = recorder(&signal);

        signal.emit(1);
        assert!(signal.disconnect(id));
        signal.emit(2);

        assert_eq!(*log.lock(), vec![1]);
        assert_eq!(signal.try_disconnect(id), Err(SignalError::InvalidConnection));
    }

    #[test]
    fn blocked_signal_drops_emits() {
        let signal = Signal::<i32>::new();
        let (log, _) = recorder(&signal);

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        assert_eq!(*log.lock(), vec![1, 3]);
    }

    #[test]
    fn disconnect_all_empties_table() {
        let signal = Signal::<()>::new();
        (0..5).for_each(|_| {
            signal.connect(|_| {});
        });

        assert_eq!(signal.connection_count(), 5);
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn guard_disconnects_on_drop() {
        let signal = Signal::<i32>::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        {
            let sink = log.clone();
            let _guard = signal.connect_scoped(move |&v| sink.lock().push(v));
            signal.emit(1);
        }

        signal.emit(2);
        assert_eq!(*log.lock(), vec![1]);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn slot_may_disconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let inner = signal.clone();
        let counter = calls.clone();
        signal.connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            inner.disconnect_all();
        });

        signal.emit(());
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
