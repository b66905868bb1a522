//! A replace-only reactive state cell.
//!
//! The controller never edits the movie list in place. Every mutation builds
//! a new value and swaps it in, which bumps the version and notifies
//! subscribers with the value now held.

use std::fmt;

type Subscriber<T> = Box<dyn FnMut(&T)>;

pub struct StateCell<T> {
    value: T,
    version: u64,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of replacements since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Swap in `value` and return the previous one.
    pub fn replace(&mut self, value: T) -> T {
        let previous = std::mem::replace(&mut self.value, value);
        self.version += 1;
        for subscriber in &mut self.subscribers {
            subscriber(&self.value);
        }
        previous
    }

    /// Compute a new value from the current one and replace it.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.replace(next);
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &self.value)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
