//! Static catalog backed by the system GL library
//!
//! Core functions are looked up with the ordinary dynamic loader
//! (`dlsym` / `GetProcAddress`), the same way an import table would bind
//! them.

use super::{core_descriptor, CoreEntry, StaticCatalog, API_PREFIX};
use glint_env::Platform;
use libloading::Library;
use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

pub struct SystemLibraryCatalog {
    path: Option<String>,
    library: Option<Library>,
}

impl SystemLibraryCatalog {
    /// Open `path`. Failure leaves an empty catalog behind; every lookup
    /// then misses.
    pub fn open(path: &str) -> Self {
        let library = match unsafe { Library::new(path) } {
            Ok(library) => {
                tracing::debug!("opened core GL library {}", path);
                Some(library)
            }
            Err(err) => {
                tracing::warn!("core GL library {} unavailable: {}", path, err);
                None
            }
        };

        Self {
            path: Some(path.to_string()),
            library,
        }
    }

    /// Open the platform's default GL library.
    pub fn for_platform(platform: Platform) -> Self {
        match platform.gl_library() {
            Some(path) => Self::open(path),
            None => Self::empty(),
        }
    }

    /// A catalog with nothing in it.
    pub fn empty() -> Self {
        Self {
            path: None,
            library: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.library.is_some()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl StaticCatalog for SystemLibraryCatalog {
    fn lookup(&self, name: &str) -> Option<CoreEntry> {
        let descriptor = core_descriptor(name)?;
        let library = self.library.as_ref()?;

        let symbol = format!("{API_PREFIX}{}\0", descriptor.name());
        let address = unsafe {
            library
                .get::<unsafe extern "system" fn()>(symbol.as_bytes())
                .ok()
                .map(|sym| *sym as usize as *mut c_void)
        }?;

        NonNull::new(address).map(|address| CoreEntry {
            address,
            signature: descriptor.signature(),
        })
    }
}

impl fmt::Debug for SystemLibraryCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemLibraryCatalog")
            .field("path", &self.path)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
