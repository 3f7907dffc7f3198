//! Comparable keys for elements stored in a [`Tree`][crate::tree::Tree].
//!
//! The tree never compares elements directly. Instead every element exposes a
//! single identifying key through [`Keyed`] and the tree routes on that key
//! alone. This lets an element carry arbitrary payload that plays no part in
//! ordering or equality.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::key::OrderedKey;
//!
//! let memento = OrderedKey::new("Memento", "11/10/2000");
//! let query = OrderedKey::query("Memento");
//!
//! // Only the key takes part in comparisons.
//! assert_eq!(memento, query);
//! assert_eq!(memento.to_string(), "Memento");
//! assert_eq!(memento.full().to_string(), "Memento: 11/10/2000");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An element that is ordered by a single identifying key.
///
/// Implementations must return the same key for the lifetime of the element
/// and `Key`'s ordering must be a strict total order. The tree does not detect
/// an inconsistent ordering; it is a precondition of every tree operation.
pub trait Keyed {
    /// The type the element is ordered by.
    type Key: Ord + ?Sized;

    /// Returns the key this element is identified by.
    fn key(&self) -> &Self::Key;

    /// Compares two elements by their keys.
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.key().cmp(other.key())
    }
}

macro_rules! keyed_by_self {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                type Key = $ty;

                #[inline]
                fn key(&self) -> &Self::Key {
                    self
                }
            }
        )*
    };
}

keyed_by_self!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool);

impl Keyed for String {
    type Key = str;

    #[inline]
    fn key(&self) -> &str {
        self
    }
}

impl Keyed for Box<str> {
    type Key = str;

    #[inline]
    fn key(&self) -> &str {
        self
    }
}

impl<'a> Keyed for &'a str {
    type Key = str;

    #[inline]
    fn key(&self) -> &str {
        self
    }
}

/// A key paired with an optional payload.
///
/// Equality, ordering and hashing look at `key` only, so a key-only
/// [`query`][OrderedKey::query] is equal to any fully populated value with the
/// same key. Values are immutable once built.
#[derive(Clone, Debug)]
pub struct OrderedKey<K, P = ()> {
    key: K,
    payload: Option<P>,
}

impl<K, P> OrderedKey<K, P> {
    /// Builds a fully populated value.
    pub fn new(key: K, payload: P) -> Self {
        Self {
            key,
            payload: Some(payload),
        }
    }

    /// Builds a value carrying only its key. Useful for looking up or removing
    /// a stored value when the rest of it is unknown.
    pub fn query(key: K) -> Self {
        Self { key, payload: None }
    }

    /// The identifying key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload, if this value was built with one.
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Splits the value back into its key and payload.
    pub fn into_parts(self) -> (K, Option<P>) {
        (self.key, self.payload)
    }

    /// Returns a [`Display`][fmt::Display] adaptor for the full representation
    /// of this value, `"<key>: <payload>"`.
    pub fn full(&self) -> Full<'_, K, P> {
        Full(self)
    }
}

impl<K: Ord, P> Keyed for OrderedKey<K, P> {
    type Key = K;

    #[inline]
    fn key(&self) -> &K {
        &self.key
    }
}

impl<K: PartialEq, P> PartialEq for OrderedKey<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, P> Eq for OrderedKey<K, P> {}

impl<K: PartialOrd, P> PartialOrd for OrderedKey<K, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, P> Ord for OrderedKey<K, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: Hash, P> Hash for OrderedKey<K, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// The short representation: the key alone.
impl<K: fmt::Display, P> fmt::Display for OrderedKey<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}

/// Full representation of an [`OrderedKey`], returned by
/// [`OrderedKey::full`].
pub struct Full<'a, K, P>(&'a OrderedKey<K, P>);

impl<K: fmt::Display, P: fmt::Display> fmt::Display for Full<'_, K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.payload {
            Some(payload) => write!(f, "{}: {}", self.0.key, payload),
            None => write!(f, "{}:", self.0.key),
        }
    }
}
