//! Context queries through the function table
//!
//! The capability registry needs `glGetString`, `glGetStringi` and
//! `glGetIntegerv`. They are called through whatever the table bound for
//! them; an unbound function reads as "nothing reported".

use crate::capability::ContextQuery;
use crate::table::FunctionTable;
use std::ffi::{c_char, CStr};

pub const GL_VERSION: u32 = 0x1F02;
pub const GL_EXTENSIONS: u32 = 0x1F03;
pub const GL_NUM_EXTENSIONS: u32 = 0x821D;

type GetStringFn = unsafe extern "system" fn(u32) -> *const u8;
type GetStringiFn = unsafe extern "system" fn(u32, u32) -> *const u8;
type GetIntegervFn = unsafe extern "system" fn(u32, *mut i32);

pub struct TableQuery<'a> {
    table: &'a FunctionTable,
}

impl<'a> TableQuery<'a> {
    /// # Safety
    /// The context `table` was resolved against must be current on this
    /// thread for as long as the query is used.
    pub unsafe fn new(table: &'a FunctionTable) -> Self {
        Self { table }
    }

    fn get_string(&self, name: u32) -> Option<String> {
        let get_string: GetStringFn = unsafe { self.table.bound("glGetString")?.cast() };
        unsafe { owned_string(get_string(name)) }
    }
}

unsafe fn owned_string(ptr: *const u8) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr as *const c_char).to_string_lossy().into_owned())
}

impl ContextQuery for TableQuery<'_> {
    fn version_string(&self) -> Option<String> {
        self.get_string(GL_VERSION)
    }

    fn extension_count(&self) -> i32 {
        let Some(bound) = self.table.bound("glGetIntegerv") else {
            return 0;
        };
        let mut count = 0i32;
        unsafe {
            let get_integerv: GetIntegervFn = bound.cast();
            get_integerv(GL_NUM_EXTENSIONS, &mut count);
        }
        count
    }

    fn extension_at(&self, index: u32) -> Option<String> {
        let get_stringi: GetStringiFn = unsafe { self.table.bound("glGetStringi")?.cast() };
        unsafe { owned_string(get_stringi(GL_EXTENSIONS, index)) }
    }

    fn extensions_string(&self) -> Option<String> {
        self.get_string(GL_EXTENSIONS)
    }
}
