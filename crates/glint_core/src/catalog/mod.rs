//! Entry point catalog
//!
//! Two declarative tables drive everything:
//! - [`ENTRY_POINTS`]: every bindable slot, by full `gl`-prefixed name
//! - [`CORE_ENTRY_POINTS`]: the subset the system GL library exports
//!   directly, keyed by the name without its prefix
//!
//! Both are generated by [`entry_points!`](crate::entry_points) in
//! `entry_points.rs`. Lookups by name go through indices built once per
//! process.

#[macro_use]
mod macros;
mod entry_points;
mod library;

pub use entry_points::{CORE_ENTRY_POINTS, ENTRY_POINTS};
pub use library::SystemLibraryCatalog;

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

/// Prefix carried by every entry point name.
pub const API_PREFIX: &str = "gl";

/// Opaque signature tag: the native C prototype of an entry point.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature(&'static str);

impl Signature {
    pub const fn new(prototype: &'static str) -> Self {
        Self(prototype)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.0)
    }
}

/// One bindable slot: `(name, signature-tag)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDescriptor {
    name: &'static str,
    signature: Signature,
}

impl SlotDescriptor {
    pub const fn new(name: &'static str, signature: Signature) -> Self {
        Self { name, signature }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }
}

/// One statically exported function, keyed without the API prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreDescriptor {
    name: &'static str,
    signature: Signature,
}

impl CoreDescriptor {
    pub const fn new(name: &'static str, signature: Signature) -> Self {
        Self { name, signature }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }
}

/// A catalog hit: where the library loader put the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreEntry {
    pub address: NonNull<c_void>,
    pub signature: Signature,
}

/// Name → address table for entry points reachable through the ordinary
/// library loader (never through get-proc-address).
pub trait StaticCatalog {
    /// `name` is exact and already stripped of [`API_PREFIX`].
    fn lookup(&self, name: &str) -> Option<CoreEntry>;
}

impl<T: StaticCatalog + ?Sized> StaticCatalog for &T {
    fn lookup(&self, name: &str) -> Option<CoreEntry> {
        (**self).lookup(name)
    }
}

/// `glClear` -> `Clear`. Names without the prefix have no catalog key.
pub fn strip_api_prefix(name: &str) -> Option<&str> {
    name.strip_prefix(API_PREFIX).filter(|rest| !rest.is_empty())
}

static SLOT_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    let index: HashMap<_, _> = ENTRY_POINTS
        .iter()
        .enumerate()
        .map(|(i, slot)| (slot.name(), i))
        .collect();
    tracing::debug!("indexed {} entry point slots", index.len());
    index
});

static CORE_INDEX: Lazy<HashMap<&'static str, &'static CoreDescriptor>> =
    Lazy::new(|| CORE_ENTRY_POINTS.iter().map(|core| (core.name(), core)).collect());

/// Position of `name` in [`ENTRY_POINTS`].
pub fn slot_index(name: &str) -> Option<usize> {
    SLOT_INDEX.get(name).copied()
}

/// Core descriptor for a stripped name.
pub fn core_descriptor(name: &str) -> Option<&'static CoreDescriptor> {
    CORE_INDEX.get(name).copied()
}
