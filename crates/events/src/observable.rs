//! Snapshot cells that re-emit their full value on every change.
//!
//! An [`Observable`] always holds a value. Subscribers receive the current
//! value immediately and then the complete new value after each
//! [`set`](Observable::set). Intermediate values may be skipped by a slow
//! subscriber, but the latest value is never lost.

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A shared, observable snapshot of some state.
pub struct Observable<T> {
    sender: watch::Sender<T>,
}

impl<T> Observable<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Replace the snapshot and notify every subscriber.
    ///
    /// Works with zero subscribers; the value is kept for later readers.
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Clone the current snapshot.
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Subscribe with a raw receiver. The current value counts as unseen,
    /// so the first `changed().await` returns immediately.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        let mut rx = self.sender.subscribe();
        rx.mark_changed();
        rx
    }

    /// Subscribe as a stream that yields the current value first and then
    /// every subsequent snapshot. The stream ends when the cell is dropped.
    pub fn stream(&self) -> WatchStream<T> {
        WatchStream::new(self.sender.subscribe())
    }
}

impl<T> Default for Observable<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
