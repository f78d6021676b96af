//! WGL strategy: `wglGetProcAddress` against the current context.

/* -------------------------- Windows -------------------------- */

#[cfg(target_os = "windows")]
mod imp {
    use std::ffi::{c_void, CString};
    use windows_sys::Win32::Graphics::OpenGL::wglGetProcAddress;

    #[derive(Debug, Default)]
    pub struct WglLoader;

    impl WglLoader {
        pub fn new() -> Self {
            Self
        }

        pub fn proc_address(&self, name: &str) -> *const c_void {
            let Ok(name) = CString::new(name) else {
                return std::ptr::null();
            };
            match unsafe { wglGetProcAddress(name.as_ptr() as *const u8) } {
                Some(proc) => proc as *const c_void,
                None => std::ptr::null(),
            }
        }
    }
}

/* --------------------- Other / Fallbacks --------------------- */

#[cfg(not(target_os = "windows"))]
mod imp {
    use std::ffi::c_void;

    #[derive(Debug, Default)]
    pub struct WglLoader;

    impl WglLoader {
        pub fn new() -> Self {
            Self
        }

        pub fn proc_address(&self, _name: &str) -> *const c_void {
            std::ptr::null()
        }
    }
}

pub use imp::WglLoader;
