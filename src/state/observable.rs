//! Publish-on-change value container.

use tokio::sync::watch;

/// A value that notifies subscribers when it changes.
///
/// Writes that leave the value unchanged do not wake subscribers. Reads
/// never block and always see the latest published value.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + PartialEq> Observable<T> {
    /// Creates an observable holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        f(&self.tx.borrow())
    }

    /// Publishes `value`. Returns `true` if it differed from the current one.
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(move |current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Subscribes to changes. The receiver starts at the current value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let value = Observable::new(1);
        assert_eq!(value.get(), 1);
        assert!(value.set(2));
        assert_eq!(value.get(), 2);
    }

    #[test]
    fn test_set_same_value_is_not_a_change() {
        let value = Observable::new("brick".to_string());
        let mut rx = value.subscribe();

        assert!(!value.set("brick".to_string()));
        assert!(!rx.has_changed().unwrap());

        assert!(value.set("arch".to_string()));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "arch");
    }

    #[test]
    fn test_with_reads_in_place() {
        let value = Observable::new(vec![1, 2, 3]);
        assert_eq!(value.with(Vec::len), 3);
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_change() {
        let value = Observable::new(false);
        let mut rx = value.subscribe();

        let waiter = tokio::spawn(async move {
            rx.changed().await.unwrap();
            *rx.borrow()
        });

        tokio::task::yield_now().await;
        value.set(true);
        assert!(waiter.await.unwrap());
    }
}
