//! Values that know whether a write changed them.
//!
//! Setters on widgets go through [`Property::set`] and only notify or
//! repaint when it reports a change.
//!
//! ```
//! use pinfield_core::Property;
//!
//! let length = Property::new(0usize);
//! assert!(length.set(3));
//! assert!(!length.set(3));
//! assert_eq!(length.get(), 3);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// Interior-mutable storage for one value. `Send + Sync` when `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Borrow the value for the duration of `f`.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Overwrite without comparing.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }

    pub fn read_only(&self) -> ReadOnlyProperty<'_, T> {
        ReadOnlyProperty::new(self)
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value`; `true` if it differs from what was there.
    pub fn set(&self, value: T) -> bool {
        self.replace(value).is_some()
    }

    /// Store `value` and hand back the previous one, or `None` when the two
    /// are equal and nothing was written.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut slot = self.value.write();
        (*slot != value).then(|| std::mem::replace(&mut *slot, value))
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|v| f.debug_tuple("Property").field(v).finish())
    }
}

/// Getter-only access to a [`Property`] owned elsewhere.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    pub fn get(&self) -> T {
        self.inner.get()
    }

    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_change() {
        let prop = Property::new(42);
        assert!(!prop.set(42));
        assert!(prop.set(100));
        assert_eq!(prop.get(), 100);
    }

    #[test]
    fn replace_returns_previous() {
        let prop = Property::new(String::from("a"));
        assert_eq!(prop.replace("a".into()), None);
        assert_eq!(prop.replace("b".into()), Some("a".into()));
        assert_eq!(prop.get(), "b");
    }

    #[test]
    fn with_and_silent_write() {
        let prop = Property::new(vec![1, 2, 3]);
        assert_eq!(prop.with(Vec::len), 3);

        prop.set_silent(Vec::new());
        assert!(prop.with(Vec::is_empty));
    }

    #[test]
    fn read_only_view_tracks_owner() {
        let prop = Property::new(false);
        assert!(!prop.read_only().get());
        prop.set(true);
        assert!(prop.read_only().get());
    }

    #[test]
    fn default_and_debug() {
        let prop: Property<usize> = Property::default();
        assert_eq!(prop.get(), 0);
        assert_eq!(format!("{prop:?}"), "Property(0)");
    }
}
