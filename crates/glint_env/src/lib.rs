//! Glint Environment Layer
//!
//! Host probing and the native get-proc-address strategies that sit under
//! the function resolver.

pub mod locator;
pub mod platform;

pub use locator::{PlatformLoader, ProcAddressSource};
pub use platform::{Platform, PlatformError};
