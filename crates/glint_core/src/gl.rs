//! The loader object
//!
//! `Gl` owns everything a process needs to call into the driver: the symbol
//! locator, the static catalog, the function table and the capability
//! registry. Construction order is fixed: locator first, then catalog, then
//! the (still unresolved) slots. Slots are resolved on first use or by an
//! explicit [`Gl::reload_functions`].

use crate::bound::BoundFn;
use crate::capability::{CapabilityRegistry, CapabilityTable, ContextQuery, Extension};
use crate::catalog::{Signature, StaticCatalog, SystemLibraryCatalog};
use crate::error::LoaderError;
use crate::query::TableQuery;
use crate::resolver::{Resolution, Resolver, SentinelFilter};
use crate::settings::LoaderSettings;
use crate::table::{FunctionTable, ReloadReport};
use crate::version::GlVersion;
use glint_env::{Platform, PlatformLoader, ProcAddressSource};
use std::ffi::c_void;

pub struct Gl<L = &'static PlatformLoader, C = SystemLibraryCatalog> {
    locator: L,
    catalog: C,
    filter: SentinelFilter,
    functions: FunctionTable,
    capabilities: CapabilityRegistry,
}

impl Gl {
    /// Loader for this host with default settings.
    ///
    /// # Safety
    /// See [`Gl::with_sources`].
    pub unsafe fn from_platform() -> Result<Self, LoaderError> {
        Self::from_settings(&LoaderSettings::default())
    }

    /// Loader for this host.
    ///
    /// Fails only when the host has no get-proc-address strategy.
    ///
    /// # Safety
    /// See [`Gl::with_sources`].
    pub unsafe fn from_settings(settings: &LoaderSettings) -> Result<Self, LoaderError> {
        let locator = PlatformLoader::get()?;
        let catalog = match &settings.core_library {
            Some(path) => SystemLibraryCatalog::open(path),
            None => SystemLibraryCatalog::for_platform(Platform::detect()),
        };
        Ok(Self::with_sources(locator, catalog, settings))
    }
}

impl<L, C> Gl<L, C>
where
    L: ProcAddressSource,
    C: StaticCatalog,
{
    /// # Safety
    /// Capability and version queries call `glGetString`, `glGetStringi` and
    /// `glGetIntegerv` through the resolved slots. The GL context the
    /// entry points were resolved for must be current on the calling thread
    /// whenever those queries run.
    pub unsafe fn with_sources(locator: L, catalog: C, settings: &LoaderSettings) -> Self {
        let mut functions = FunctionTable::new();
        functions.set_log_unavailable(settings.log_unavailable);

        Self {
            locator,
            catalog,
            filter: SentinelFilter::new(settings.sentinel_addresses.iter().copied()),
            functions,
            capabilities: CapabilityRegistry::new(),
        }
    }

    /// Re-resolve every entry point.
    pub fn reload_functions(&mut self) -> ReloadReport {
        let resolver = Resolver::new(&self.locator, &self.catalog, &self.filter);
        self.functions.reload_all(&resolver)
    }

    /// Re-resolve one entry point; `false` if unknown or unavailable.
    pub fn load(&mut self, name: &str) -> bool {
        let resolver = Resolver::new(&self.locator, &self.catalog, &self.filter);
        self.functions.reload_one(name, &resolver)
    }

    /// Raw get-proc-address answer, sentinels included.
    pub fn get_address(&self, name: &str) -> *const c_void {
        self.locator.proc_address(name)
    }

    /// Resolve a name outside the slot table without caching it.
    pub fn resolve(&self, name: &str, signature: Signature) -> Resolution {
        Resolver::new(&self.locator, &self.catalog, &self.filter).resolve_name(name, signature)
    }

    /// All slots, resolving them first if that never happened.
    pub fn functions(&mut self) -> &FunctionTable {
        self.ensure_functions();
        &self.functions
    }

    pub fn bound(&mut self, name: &str) -> Option<BoundFn> {
        self.ensure_functions();
        self.functions.bound(name).copied()
    }

    /// Rebuild the capability table from the current context.
    pub fn reload_extensions(&mut self) -> &CapabilityTable {
        self.ensure_functions();
        let query = unsafe { TableQuery::new(&self.functions) };
        self.capabilities.reload(&query)
    }

    pub fn is_extension_supported(&mut self, extension: Extension) -> bool {
        self.ensure_functions();
        let query = unsafe { TableQuery::new(&self.functions) };
        self.capabilities.is_supported(extension, &query)
    }

    /// Version of the current context. Cached by the last capability load;
    /// the context is only asked before one has happened.
    pub fn version(&mut self) -> GlVersion {
        if self.capabilities.is_loaded() {
            return self.capabilities.version();
        }
        self.ensure_functions();
        let query = unsafe { TableQuery::new(&self.functions) };
        query
            .version_string()
            .map(|s| GlVersion::parse(&s))
            .unwrap_or(GlVersion::UNKNOWN)
    }

    fn ensure_functions(&mut self) {
        if !self.functions.is_loaded() {
            self.reload_functions();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{GL_EXTENSIONS, GL_NUM_EXTENSIONS, GL_VERSION};
    use crate::table::SlotState;
    use crate::testing::{FakeCatalog, FakeLocator};
    use std::cell::Cell;

    thread_local! {
        static GET_STRING_CALLS: Cell<usize> = const { Cell::new(0) };
        static GET_STRINGI_CALLS: Cell<usize> = const { Cell::new(0) };
    }

    extern "system" fn get_string(name: u32) -> *const u8 {
        GET_STRING_CALLS.with(|calls| calls.set(calls.get() + 1));
        match name {
            GL_VERSION => b"4.6.0 NVIDIA 535.54\0".as_ptr(),
            _ => std::ptr::null(),
        }
    }

    extern "system" fn get_integerv(pname: u32, data: *mut i32) {
        if pname == GL_NUM_EXTENSIONS {
            unsafe { *data = 3 };
        }
    }

    extern "system" fn get_stringi(name: u32, index: u32) -> *const u8 {
        GET_STRINGI_CALLS.with(|calls| calls.set(calls.get() + 1));
        match (name, index) {
            (GL_EXTENSIONS, 0) => b"GL_ARB_sync\0".as_ptr(),
            (GL_EXTENSIONS, 1) => b"GL_KHR_debug\0".as_ptr(),
            (GL_EXTENSIONS, 2) => b"GL_ARB_SYNC\0".as_ptr(),
            _ => std::ptr::null(),
        }
    }

    fn fake_driver() -> FakeLocator {
        FakeLocator::new()
            .with("glGetStringi", get_stringi as usize)
            .with("glCreateShader", 0x1000)
            .with("glBindBuffer", 2)
    }

    fn fake_library() -> FakeCatalog {
        FakeCatalog::new()
            .with("GetString", get_string as usize)
            .with("GetIntegerv", get_integerv as usize)
            .with("Clear", 0x2000)
    }

    fn loader() -> Gl<FakeLocator, FakeCatalog> {
        unsafe { Gl::with_sources(fake_driver(), fake_library(), &LoaderSettings::default()) }
    }

    #[test]
    fn slots_resolve_on_first_use() {
        let mut gl = loader();
        assert_eq!(gl.locator.calls(), 0);

        let bound = gl.bound("glCreateShader").unwrap();
        assert_eq!(bound.address().as_ptr() as usize, 0x1000);
        let after_first = gl.locator.calls();
        assert!(after_first > 0);

        assert!(gl.bound("glClear").is_some());
        assert_eq!(gl.locator.calls(), after_first);
    }

    #[test]
    fn explicit_reload_reports_every_slot() {
        let mut gl = loader();
        let report = gl.reload_functions();

        assert_eq!(report.total(), gl.functions().len());
        assert_eq!(gl.functions().state("glBindBuffer"), Some(SlotState::Unavailable));
        assert_eq!(gl.functions().state("glGetString"), Some(SlotState::ResolvedCore));
        assert_eq!(gl.functions().state("glGetStringi"), Some(SlotState::ResolvedExtension));
    }

    #[test]
    fn get_address_is_the_raw_locator_answer() {
        let gl = loader();
        assert_eq!(gl.get_address("glBindBuffer") as usize, 2);
        assert!(gl.get_address("glClear").is_null());
    }

    #[test]
    fn load_by_name() {
        let mut gl = loader();
        assert!(gl.load("glClear"));
        assert!(!gl.load("glBindBuffer"));
        assert!(!gl.load("glFoo"));
    }

    #[test]
    fn ad_hoc_resolution_is_not_cached() {
        let gl = loader();
        gl.locator.set("wglSwapIntervalEXT", 0x9000);
        let resolution = gl.resolve("wglSwapIntervalEXT", Signature::new("BOOL wglSwapIntervalEXT(int interval)"));
        assert!(matches!(resolution, Resolution::Extension(_)));
        assert!(!gl.functions.is_loaded());
    }

    #[test]
    fn extensions_load_once_through_bound_queries() {
        let mut gl = loader();
        GET_STRINGI_CALLS.with(|calls| calls.set(0));
        GET_STRING_CALLS.with(|calls| calls.set(0));

        assert!(gl.is_extension_supported(Extension::GL_ARB_sync));
        assert!(gl.is_extension_supported(Extension::GL_KHR_debug));
        assert!(!gl.is_extension_supported(Extension::GL_ARB_compute_shader));

        assert_eq!(GET_STRING_CALLS.with(Cell::get), 1);
        assert_eq!(GET_STRINGI_CALLS.with(Cell::get), 3);
    }

    #[test]
    fn version_comes_from_the_context() {
        let mut gl = loader();
        assert_eq!(gl.version(), GlVersion { major: 4, minor: Some(6) });
        assert_eq!(gl.reload_extensions().supported().count(), 2);
    }

    #[test]
    fn version_is_cached_after_extensions_load() {
        let mut gl = loader();
        GET_STRING_CALLS.with(|calls| calls.set(0));

        assert_eq!(gl.version().major, 4);
        assert_eq!(gl.version().major, 4);
        assert_eq!(GET_STRING_CALLS.with(Cell::get), 2);

        assert!(gl.is_extension_supported(Extension::GL_ARB_sync));
        assert_eq!(GET_STRING_CALLS.with(Cell::get), 3);

        assert_eq!(gl.version(), GlVersion { major: 4, minor: Some(6) });
        assert_eq!(GET_STRING_CALLS.with(Cell::get), 3);
    }

    #[test]
    fn custom_sentinels_from_settings() {
        let settings = LoaderSettings {
            sentinel_addresses: vec![0x1000],
            ..LoaderSettings::default()
        };
        let mut gl = unsafe { Gl::with_sources(fake_driver(), fake_library(), &settings) };
        gl.reload_functions();

        assert_eq!(gl.functions().state("glCreateShader"), Some(SlotState::Unavailable));
        // 2 is no longer a sentinel
        assert_eq!(gl.functions().state("glBindBuffer"), Some(SlotState::ResolvedExtension));
    }
}
