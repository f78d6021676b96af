//! Function resolver
//!
//! Order of attempts for one entry point:
//! 1. get-proc-address with the full name (`glFoo`)
//! 2. drop null and sentinel answers
//! 3. static catalog with the prefix stripped (`Foo`)
//! 4. otherwise unavailable
//!
//! The dynamic path always goes first, so a driver that reroutes a core
//! function through get-proc-address wins over the library export.

use crate::bound::BoundFn;
use crate::catalog::{strip_api_prefix, Signature, SlotDescriptor, StaticCatalog};
use crate::settings::DEFAULT_SENTINEL_ADDRESSES;
use glint_env::ProcAddressSource;
use std::ffi::c_void;
use std::ptr::NonNull;

/// Outcome of resolving one entry point.
#[derive(Debug, Clone, Copy)]
pub enum Resolution {
    /// Found through get-proc-address.
    Extension(BoundFn),
    /// Found in the static catalog.
    Core(BoundFn),
    Unavailable,
}

impl Resolution {
    pub fn bound(&self) -> Option<&BoundFn> {
        match self {
            Resolution::Extension(bound) | Resolution::Core(bound) => Some(bound),
            Resolution::Unavailable => None,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound().is_some()
    }

    /// Same path, with `bound` as the binding.
    pub fn with_bound(self, bound: BoundFn) -> Resolution {
        match self {
            Resolution::Extension(_) => Resolution::Extension(bound),
            Resolution::Core(_) => Resolution::Core(bound),
            Resolution::Unavailable => Resolution::Unavailable,
        }
    }

    /// Same target, or both unbound.
    pub fn same_target(&self, other: &Resolution) -> bool {
        match (self.bound(), other.bound()) {
            (Some(a), Some(b)) => a.same_target(b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Rejects the bogus addresses buggy drivers return for "not supported".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelFilter {
    sentinels: Vec<usize>,
}

impl SentinelFilter {
    pub fn new(sentinels: impl IntoIterator<Item = usize>) -> Self {
        Self {
            sentinels: sentinels.into_iter().filter(|&value| value != 0).collect(),
        }
    }

    /// Null and sentinel addresses become `None`.
    pub fn accept(&self, address: *const c_void) -> Option<NonNull<c_void>> {
        if self.sentinels.contains(&(address as usize)) {
            return None;
        }
        NonNull::new(address as *mut c_void)
    }

    pub fn sentinels(&self) -> &[usize] {
        &self.sentinels
    }
}

impl Default for SentinelFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL_ADDRESSES)
    }
}

pub struct Resolver<'a, L: ?Sized, C: ?Sized> {
    locator: &'a L,
    catalog: &'a C,
    filter: &'a SentinelFilter,
}

impl<'a, L, C> Resolver<'a, L, C>
where
    L: ProcAddressSource + ?Sized,
    C: StaticCatalog + ?Sized,
{
    pub fn new(locator: &'a L, catalog: &'a C, filter: &'a SentinelFilter) -> Self {
        Self {
            locator,
            catalog,
            filter,
        }
    }

    pub fn resolve(&self, slot: &SlotDescriptor) -> Resolution {
        self.resolve_name(slot.name(), slot.signature())
    }

    /// Resolve any name, slot or not.
    pub fn resolve_name(&self, name: &str, signature: Signature) -> Resolution {
        if let Some(bound) = self.extension(name, signature) {
            return Resolution::Extension(bound);
        }

        match strip_api_prefix(name).and_then(|core| self.catalog.lookup(core)) {
            Some(entry) => Resolution::Core(BoundFn::new(entry.address, entry.signature)),
            None => Resolution::Unavailable,
        }
    }

    fn extension(&self, name: &str, signature: Signature) -> Option<BoundFn> {
        let raw = self.locator.proc_address(name);
        match self.filter.accept(raw) {
            Some(address) => Some(BoundFn::new(address, signature)),
            None => {
                if !raw.is_null() {
                    tracing::trace!("{}: ignoring sentinel address {:p}", name, raw);
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeCatalog, FakeLocator};

    fn resolve(locator: &FakeLocator, catalog: &FakeCatalog, name: &str) -> Resolution {
        let filter = SentinelFilter::default();
        Resolver::new(locator, catalog, &filter).resolve_name(name, Signature::new("void f(void)"))
    }

    #[test]
    fn extension_path_wins_over_catalog() {
        let locator = FakeLocator::new().with("glClear", 0x1000);
        let catalog = FakeCatalog::new().with("Clear", 0x2000);

        match resolve(&locator, &catalog, "glClear") {
            Resolution::Extension(bound) => assert_eq!(bound.address().as_ptr() as usize, 0x1000),
            other => panic!("expected extension binding, got {other:?}"),
        }
        assert_eq!(catalog.lookups(), 0);
    }

    #[test]
    fn sentinels_fall_back_to_catalog() {
        for sentinel in [1usize, 2] {
            let locator = FakeLocator::new().with("glClear", sentinel);
            let catalog = FakeCatalog::new().with("Clear", 0x2000);

            match resolve(&locator, &catalog, "glClear") {
                Resolution::Core(bound) => assert_eq!(bound.address().as_ptr() as usize, 0x2000),
                other => panic!("sentinel {sentinel} leaked through: {other:?}"),
            }
        }
    }

    #[test]
    fn sentinel_without_catalog_entry_is_unavailable() {
        let locator = FakeLocator::new().with("glCreateShader", 2);
        let catalog = FakeCatalog::new();
        assert!(!resolve(&locator, &catalog, "glCreateShader").is_bound());
    }

    #[test]
    fn catalog_lookup_uses_stripped_name() {
        let locator = FakeLocator::new();
        let catalog = FakeCatalog::new().with("GetString", 0x3000);

        assert!(matches!(resolve(&locator, &catalog, "glGetString"), Resolution::Core(_)));
        assert_eq!(locator.queried(), vec!["glGetString".to_string()]);
        assert_eq!(catalog.queried(), vec!["GetString".to_string()]);
    }

    #[test]
    fn names_without_prefix_skip_the_catalog() {
        let locator = FakeLocator::new();
        let catalog = FakeCatalog::new().with("Clear", 0x2000);

        assert!(matches!(resolve(&locator, &catalog, "Clear"), Resolution::Unavailable));
        assert_eq!(catalog.lookups(), 0);
    }

    #[test]
    fn custom_sentinels() {
        let filter = SentinelFilter::new([3, 0, usize::MAX]);
        assert_eq!(filter.sentinels(), &[3, usize::MAX]);
        assert!(filter.accept(3 as *const c_void).is_none());
        assert!(filter.accept(usize::MAX as *const c_void).is_none());
        assert!(filter.accept(std::ptr::null()).is_none());
        assert!(filter.accept(1 as *const c_void).is_some());
    }

    #[test]
    fn resolution_target_comparison() {
        let sig = Signature::new("void f(void)");
        let a = NonNull::new(0x10 as *mut c_void).unwrap();
        let b = NonNull::new(0x20 as *mut c_void).unwrap();

        let ext = Resolution::Extension(BoundFn::new(a, sig));
        let core_same = Resolution::Core(BoundFn::new(a, sig));
        let core_other = Resolution::Core(BoundFn::new(b, sig));

        assert!(ext.same_target(&core_same));
        assert!(!ext.same_target(&core_other));
        assert!(!ext.same_target(&Resolution::Unavailable));
        assert!(Resolution::Unavailable.same_target(&Resolution::Unavailable));
    }
}
