//! Observable output streams.
//!
//! A `Signal` pairs a broadcast channel (every emission, in order) with a
//! watch cell holding the latest value. Subscribers only see emissions made
//! after they subscribed, so the initial "no value yet" state is never delivered.

use futures_util::stream::{self, Stream};
use std::pin::Pin;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};

/// Default per-subscriber buffer.
pub const DEFAULT_SIGNAL_CAPACITY: usize = 64;

/// A read-only observable value. Only the owning view model emits.
#[derive(Debug)]
pub struct Signal<T> {
    latest: watch::Sender<Option<T>>,
    events: broadcast::Sender<T>,
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        let (latest, _) = watch::channel(None);
        let (events, _) = broadcast::channel(capacity);
        Self { latest, events }
    }

    pub(crate) fn emit(&self, value: T) {
        self.latest.send_replace(Some(value.clone()));
        // No subscribers is fine; the latest value is still recorded.
        let _ = self.events.send(value);
    }

    /// Latest emitted value, `None` until the first emission.
    pub fn get(&self) -> Option<T> {
        self.latest.borrow().clone()
    }

    /// Receive every emission from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.events.subscribe()
    }

    /// Watch the latest value instead of individual emissions.
    pub fn watch(&self) -> watch::Receiver<Option<T>> {
        self.latest.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    /// Emissions as a stream. A subscriber that falls behind skips what it missed.
    pub fn stream(&self) -> Pin<Box<dyn Stream<Item = T> + Send>> {
        Box::pin(stream::unfold(self.subscribe(), |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(value) => return Some((value, rx)),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Signal subscriber lagged");
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn test_get_is_none_before_first_emit() {
        let signal: Signal<bool> = Signal::new(4);
        assert_eq!(signal.get(), None);
        signal.emit(true);
        assert_eq!(signal.get(), Some(true));
    }

    #[test]
    fn test_subscriber_sees_only_later_emissions() {
        let signal: Signal<String> = Signal::new(4);
        signal.emit("before".to_string());

        let mut rx = signal.subscribe();
        assert!(rx.try_recv().is_err());

        signal.emit("after".to_string());
        assert_eq!(rx.try_recv().unwrap(), "after");
    }

    #[test]
    fn test_emissions_keep_order() {
        let signal: Signal<bool> = Signal::new(4);
        let mut rx = signal.subscribe();
        signal.emit(true);
        signal.emit(false);
        assert_eq!(rx.try_recv().unwrap(), true);
        assert_eq!(rx.try_recv().unwrap(), false);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_stream_skips_lagged_values() {
        let signal: Signal<u32> = Signal::new(2);
        let mut events = signal.stream();
        for i in 0..5 {
            signal.emit(i);
        }
        assert_eq!(events.next().await, Some(3));
        assert_eq!(events.next().await, Some(4));
    }

    #[test]
    fn test_stream_ends_when_signal_dropped() {
        let signal: Signal<u32> = Signal::new(2);
        let mut events = signal.stream();
        signal.emit(7);
        drop(signal);
        tokio_test::block_on(async {
            assert_eq!(events.next().await, Some(7));
            assert_eq!(events.next().await, None);
        });
    }
}
