//! Glint Core
//!
//! Runtime binding of OpenGL entry points:
//! - Static catalog of known entry points
//! - Function resolver (get-proc-address first, library export second)
//! - Function table with bulk and single-slot reload
//! - Extension registry with version-dependent queries

pub mod bound;
pub mod capability;
pub mod catalog;
pub mod error;
pub mod gl;
pub mod query;
pub mod resolver;
pub mod settings;
pub mod table;
pub mod version;

#[cfg(test)]
mod testing;

pub use bound::BoundFn;
pub use capability::{CapabilityRegistry, CapabilityTable, ContextQuery, Extension};
pub use catalog::{Signature, SlotDescriptor, StaticCatalog, SystemLibraryCatalog};
pub use error::LoaderError;
pub use gl::Gl;
pub use resolver::{Resolution, Resolver, SentinelFilter};
pub use settings::LoaderSettings;
pub use table::{FunctionSlot, FunctionTable, ReloadReport, SlotState};
pub use version::GlVersion;

pub use glint_env::{Platform, PlatformLoader, ProcAddressSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
