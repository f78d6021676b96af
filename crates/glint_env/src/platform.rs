// platform.rs
//! Host platform probing.
//! Decides which native get-proc-address mechanism applies to this process.

use std::sync::OnceLock;
use thiserror::Error;

/// Windowing/GL binding family of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// WGL (Windows)
    Windows,
    /// GLX (Linux and the BSDs)
    X11,
    /// Legacy dyld symbol lookup (macOS)
    Apple,
    /// Anything else; carries `std::env::consts::OS`
    Unsupported(&'static str),
}

/// Raised when no symbol lookup strategy exists for the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("extension loading is only supported on Windows, X11 and macOS (host os: '{os}')")]
    Unsupported { os: &'static str },
}

impl Platform {
    /// Probe once per process; later calls return the cached answer.
    pub fn detect() -> Self {
        static INSTANCE: OnceLock<Platform> = OnceLock::new();
        *INSTANCE.get_or_init(detect_impl)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Unsupported(_))
    }

    /// The system GL library that exports the core entry points.
    pub fn gl_library(&self) -> Option<&'static str> {
        match self {
            Platform::Windows => Some("opengl32.dll"),
            Platform::X11 => Some("libGL.so.1"),
            Platform::Apple => Some("/System/Library/Frameworks/OpenGL.framework/OpenGL"),
            Platform::Unsupported(_) => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::X11 => "x11",
            Platform::Apple => "apple",
            Platform::Unsupported(os) => os,
        }
    }
}

/* -------------------------- Windows -------------------------- */

#[cfg(target_os = "windows")]
fn detect_impl() -> Platform {
    Platform::Windows
}

/* --------------------- macOS / iOS (Darwin) --------------------- */

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn detect_impl() -> Platform {
    Platform::Apple
}

/* --------------------- Linux / BSD --------------------- */

#[cfg(any(
    target_os = "linux",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd"
))]
fn detect_impl() -> Platform {
    Platform::X11
}

/* --------------------- Other / WASM / Fallbacks --------------------- */

#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    target_os = "linux",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd"
)))]
fn detect_impl() -> Platform {
    Platform::Unsupported(std::env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_is_stable() {
        assert_eq!(Platform::detect(), Platform::detect());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_uses_glx() {
        let platform = Platform::detect();
        assert_eq!(platform, Platform::X11);
        assert_eq!(platform.gl_library(), Some("libGL.so.1"));
    }

    #[test]
    fn unsupported_has_no_library() {
        let platform = Platform::Unsupported("haiku");
        assert!(!platform.is_supported());
        assert_eq!(platform.gl_library(), None);
        assert_eq!(platform.name(), "haiku");
    }

    #[test]
    fn unsupported_error_names_the_os() {
        let err = PlatformError::Unsupported { os: "haiku" };
        assert!(err.to_string().contains("'haiku'"));
    }
}
