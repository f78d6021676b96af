//! Test doubles for the native collaborators.

use crate::capability::ContextQuery;
use crate::catalog::{CoreEntry, Signature, StaticCatalog};
use glint_env::ProcAddressSource;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ffi::c_void;
use std::ptr::NonNull;

/// get-proc-address over a fixed name → address map.
#[derive(Default)]
pub struct FakeLocator {
    addresses: RefCell<HashMap<String, usize>>,
    queried: RefCell<Vec<String>>,
}

impl FakeLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: &str, address: usize) -> Self {
        self.set(name, address);
        self
    }

    pub fn set(&self, name: &str, address: usize) {
        self.addresses.borrow_mut().insert(name.to_string(), address);
    }

    pub fn remove(&self, name: &str) {
        self.addresses.borrow_mut().remove(name);
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }

    pub fn calls(&self) -> usize {
        self.queried.borrow().len()
    }
}

impl ProcAddressSource for FakeLocator {
    fn proc_address(&self, name: &str) -> *const c_void {
        self.queried.borrow_mut().push(name.to_string());
        self.addresses.borrow().get(name).copied().unwrap_or(0) as *const c_void
    }
}

/// Static catalog over a fixed stripped-name → address map.
#[derive(Default)]
pub struct FakeCatalog {
    addresses: RefCell<HashMap<String, usize>>,
    queried: RefCell<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: &str, address: usize) -> Self {
        self.addresses.borrow_mut().insert(name.to_string(), address);
        self
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }

    pub fn lookups(&self) -> usize {
        self.queried.borrow().len()
    }
}

impl StaticCatalog for FakeCatalog {
    fn lookup(&self, name: &str) -> Option<CoreEntry> {
        self.queried.borrow_mut().push(name.to_string());
        let address = *self.addresses.borrow().get(name)?;
        Some(CoreEntry {
            address: NonNull::new(address as *mut c_void)?,
            signature: Signature::new("fake"),
        })
    }
}

/// A GL context answering version and extension queries from memory.
pub struct FakeContext {
    pub version: Option<String>,
    pub indexed: Vec<String>,
    pub legacy: Option<String>,
    pub count_override: Option<i32>,
    pub version_queries: Cell<usize>,
    pub count_queries: Cell<usize>,
    pub index_queries: Cell<usize>,
    pub legacy_queries: Cell<usize>,
}

impl FakeContext {
    pub fn modern(version: &str, extensions: &[&str]) -> Self {
        Self {
            version: Some(version.to_string()),
            indexed: extensions.iter().map(|e| e.to_string()).collect(),
            legacy: None,
            count_override: None,
            version_queries: Cell::new(0),
            count_queries: Cell::new(0),
            index_queries: Cell::new(0),
            legacy_queries: Cell::new(0),
        }
    }

    pub fn legacy(version: &str, extensions: &str) -> Self {
        Self {
            version: Some(version.to_string()),
            indexed: Vec::new(),
            legacy: Some(extensions.to_string()),
            count_override: None,
            version_queries: Cell::new(0),
            count_queries: Cell::new(0),
            index_queries: Cell::new(0),
            legacy_queries: Cell::new(0),
        }
    }

    /// Native queries of any kind so far.
    pub fn total_queries(&self) -> usize {
        self.version_queries.get()
            + self.count_queries.get()
            + self.index_queries.get()
            + self.legacy_queries.get()
    }
}

impl ContextQuery for FakeContext {
    fn version_string(&self) -> Option<String> {
        self.version_queries.set(self.version_queries.get() + 1);
        self.version.clone()
    }

    fn extension_count(&self) -> i32 {
        self.count_queries.set(self.count_queries.get() + 1);
        self.count_override.unwrap_or(self.indexed.len() as i32)
    }

    fn extension_at(&self, index: u32) -> Option<String> {
        self.index_queries.set(self.index_queries.get() + 1);
        self.indexed.get(index as usize).cloned()
    }

    fn extensions_string(&self) -> Option<String> {
        self.legacy_queries.set(self.legacy_queries.get() + 1);
        self.legacy.clone()
    }
}
