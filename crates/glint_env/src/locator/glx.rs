//! GLX strategy: `glXGetProcAddress` resolved out of libGL at runtime.

pub(crate) const DEFAULT_LIBRARY: &str = "libGL.so.1";

/* --------------------- Linux / BSD --------------------- */

#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios"))))]
mod imp {
    use libloading::Library;
    use std::ffi::{c_char, c_void, CString};
    use std::fmt;

    type GetProcAddressFn = unsafe extern "C" fn(*const c_char) -> *const c_void;

    // Some older libGL builds only export the ARB alias.
    const ENTRY_POINTS: [&[u8]; 2] = [b"glXGetProcAddress\0", b"glXGetProcAddressARB\0"];

    struct Glx {
        // Keeps libGL mapped for as long as `get_proc_address` may be called.
        _library: Library,
        get_proc_address: GetProcAddressFn,
    }

    pub struct GlxLoader {
        library: String,
        glx: Option<Glx>,
    }

    impl GlxLoader {
        pub fn open(library: &str) -> Self {
            let glx = match unsafe { Library::new(library) } {
                Ok(lib) => {
                    let found = ENTRY_POINTS.iter().find_map(|symbol| unsafe {
                        lib.get::<GetProcAddressFn>(symbol).ok().map(|sym| *sym)
                    });
                    match found {
                        Some(get_proc_address) => Some(Glx {
                            _library: lib,
                            get_proc_address,
                        }),
                        None => {
                            tracing::warn!("{} does not export glXGetProcAddress", library);
                            None
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!("failed to open {}: {}", library, err);
                    None
                }
            };

            Self {
                library: library.to_string(),
                glx,
            }
        }

        pub fn is_available(&self) -> bool {
            self.glx.is_some()
        }

        pub fn proc_address(&self, name: &str) -> *const c_void {
            let Some(glx) = &self.glx else {
                return std::ptr::null();
            };
            let Ok(name) = CString::new(name) else {
                return std::ptr::null();
            };
            unsafe { (glx.get_proc_address)(name.as_ptr()) }
        }
    }

    impl fmt::Debug for GlxLoader {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("GlxLoader")
                .field("library", &self.library)
                .field("available", &self.is_available())
                .finish()
        }
    }
}

/* --------------------- Other / Fallbacks --------------------- */

#[cfg(not(all(unix, not(any(target_os = "macos", target_os = "ios")))))]
mod imp {
    use std::ffi::c_void;

    #[derive(Debug)]
    pub struct GlxLoader;

    impl GlxLoader {
        pub fn open(_library: &str) -> Self {
            Self
        }

        pub fn is_available(&self) -> bool {
            false
        }

        pub fn proc_address(&self, _name: &str) -> *const c_void {
            std::ptr::null()
        }
    }
}

pub use imp::GlxLoader;
