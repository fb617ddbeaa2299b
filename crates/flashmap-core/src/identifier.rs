//! Node identifiers backed by a global string interner.
//!
//! This module provides the [`NodeId`] type. Ids are cheap to copy, hash and
//! compare, which makes them suitable as keys for the expansion set and for
//! parent/child references inside a [`Forest`](crate::forest::Forest).

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for node identifiers.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Identifier of a diagram node, as written in the source text.
///
/// # Examples
///
/// ```
/// use flashmap_core::identifier::NodeId;
///
/// let start = NodeId::new("Start");
/// assert_eq!(start, "Start");
/// assert_eq!(start, NodeId::new("Start"));
/// assert_eq!(start.to_string(), "Start");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(DefaultSymbol);

impl NodeId {
    /// Creates a `NodeId` from the raw token text.
    ///
    /// Equal texts always produce equal ids.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Returns the source text of this id.
    pub fn as_string(&self) -> String {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                .to_owned()
        })
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.as_string()).finish()
    }
}

impl std::str::FromStr for NodeId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for NodeId {
    /// Creates a `NodeId` from a string slice
    ///
    /// This is a convenience implementation that calls `NodeId::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for NodeId {
    /// Allows direct comparison with string slices: `id == "A"`
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                == other
        })
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
