//! Dyld strategy: the pre-10.5 `NS*Symbol*` lookup chain.
//!
//! The three dyld functions are themselves looked up with `dlsym` so that a
//! host which dropped them degrades to "nothing found" instead of failing to
//! link.

/* --------------------- macOS / iOS (Darwin) --------------------- */

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod imp {
    use std::ffi::{c_char, c_void, CString};

    type IsSymbolNameDefinedFn = unsafe extern "C" fn(*const c_char) -> bool;
    type LookupAndBindSymbolFn = unsafe extern "C" fn(*const c_char) -> *mut c_void;
    type AddressOfSymbolFn = unsafe extern "C" fn(*mut c_void) -> *mut c_void;

    #[derive(Debug, Clone, Copy)]
    struct Dyld {
        is_symbol_name_defined: IsSymbolNameDefinedFn,
        lookup_and_bind_symbol: LookupAndBindSymbolFn,
        address_of_symbol: AddressOfSymbolFn,
    }

    #[derive(Debug)]
    pub struct DyldLoader {
        dyld: Option<Dyld>,
    }

    fn dlsym_default(symbol: &[u8]) -> Option<*mut c_void> {
        let ptr = unsafe { libc::dlsym(libc::RTLD_DEFAULT, symbol.as_ptr() as *const c_char) };
        if ptr.is_null() { None } else { Some(ptr) }
    }

    impl DyldLoader {
        pub fn new() -> Self {
            let dyld = (|| {
                let defined = dlsym_default(b"NSIsSymbolNameDefined\0")?;
                let lookup = dlsym_default(b"NSLookupAndBindSymbol\0")?;
                let address = dlsym_default(b"NSAddressOfSymbol\0")?;
                unsafe {
                    Some(Dyld {
                        is_symbol_name_defined: std::mem::transmute::<*mut c_void, IsSymbolNameDefinedFn>(defined),
                        lookup_and_bind_symbol: std::mem::transmute::<*mut c_void, LookupAndBindSymbolFn>(lookup),
                        address_of_symbol: std::mem::transmute::<*mut c_void, AddressOfSymbolFn>(address),
                    })
                }
            })();

            if dyld.is_none() {
                tracing::warn!("legacy dyld symbol API unavailable; every lookup will be empty");
            }
            Self { dyld }
        }

        pub fn is_available(&self) -> bool {
            self.dyld.is_some()
        }

        pub fn proc_address(&self, name: &str) -> *const c_void {
            let Some(dyld) = self.dyld else {
                return std::ptr::null();
            };
            // Mach-O symbol names carry a leading underscore.
            let Ok(symbol_name) = CString::new(format!("_{name}")) else {
                return std::ptr::null();
            };

            unsafe {
                if !(dyld.is_symbol_name_defined)(symbol_name.as_ptr()) {
                    return std::ptr::null();
                }
                let symbol = (dyld.lookup_and_bind_symbol)(symbol_name.as_ptr());
                if symbol.is_null() {
                    return std::ptr::null();
                }
                (dyld.address_of_symbol)(symbol) as *const c_void
            }
        }
    }
}

/* --------------------- Other / Fallbacks --------------------- */

#[cfg(not(any(target_os = "macos", target_os = "ios")))]
mod imp {
    use std::ffi::c_void;

    #[derive(Debug, Default)]
    pub struct DyldLoader;

    impl DyldLoader {
        pub fn new() -> Self {
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

pub use imp::DyldLoader;
