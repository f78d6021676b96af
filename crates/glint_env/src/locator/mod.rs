//! Platform symbol locator
//!
//! One get-proc-address strategy per host:
//! - WGL: `wglGetProcAddress`
//! - GLX: `glXGetProcAddress` out of libGL
//! - Dyld: the legacy `NSIsSymbolNameDefined` / `NSLookupAndBindSymbol` /
//!   `NSAddressOfSymbol` chain
//!
//! A missing function is an ordinary outcome and is reported as a null
//! pointer, never as an error.

mod dyld;
mod glx;
mod wgl;

pub use dyld::DyldLoader;
pub use glx::GlxLoader;
pub use wgl::WglLoader;

use crate::platform::{Platform, PlatformError};
use std::ffi::c_void;
use std::sync::OnceLock;

/// Anything that can turn an entry point name into a raw native address.
///
/// Implementations return null when the name is unknown.
pub trait ProcAddressSource {
    fn proc_address(&self, name: &str) -> *const c_void;
}

impl<T: ProcAddressSource + ?Sized> ProcAddressSource for &T {
    fn proc_address(&self, name: &str) -> *const c_void {
        (**self).proc_address(name)
    }
}

/// The process-wide lookup strategy.
#[derive(Debug)]
pub enum PlatformLoader {
    Wgl(WglLoader),
    Glx(GlxLoader),
    Dyld(DyldLoader),
}

impl PlatformLoader {
    /// Select the loader for this host. The first call decides; the choice
    /// never changes for the rest of the process.
    pub fn get() -> Result<&'static PlatformLoader, PlatformError> {
        static LOADER: OnceLock<Result<PlatformLoader, PlatformError>> = OnceLock::new();
        LOADER
            .get_or_init(|| Self::select(Platform::detect()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Build the loader for `platform` without touching the process-wide slot.
    pub fn select(platform: Platform) -> Result<Self, PlatformError> {
        let loader = match platform {
            Platform::Windows => PlatformLoader::Wgl(WglLoader::new()),
            Platform::X11 => {
                let library = platform.gl_library().unwrap_or(glx::DEFAULT_LIBRARY);
                PlatformLoader::Glx(GlxLoader::open(library))
            }
            Platform::Apple => PlatformLoader::Dyld(DyldLoader::new()),
            Platform::Unsupported(os) => {
                tracing::error!("no get-proc-address strategy for host os '{}'", os);
                return Err(PlatformError::Unsupported { os });
            }
        };
        tracing::debug!("selected {} symbol locator", loader.kind());
        Ok(loader)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PlatformLoader::Wgl(_) => "wgl",
            PlatformLoader::Glx(_) => "glx",
            PlatformLoader::Dyld(_) => "dyld",
        }
    }
}

impl ProcAddressSource for PlatformLoader {
    fn proc_address(&self, name: &str) -> *const c_void {
        match self {
            PlatformLoader::Wgl(loader) => loader.proc_address(name),
            PlatformLoader::Glx(loader) => loader.proc_address(name),
            PlatformLoader::Dyld(loader) => loader.proc_address(name),
        }
    }
}
