//! Capability (extension) registry
//!
//! Asks the current context which extensions it supports and answers point
//! queries against the fixed [`Extension`] list. How the context is asked
//! depends on its version:
//! - 3.0 and later: `GL_NUM_EXTENSIONS` + `glGetStringi` per index
//! - older, or unparseable version: one `glGetString(GL_EXTENSIONS)` list
//!
//! Names are compared lower-cased on both sides.

mod extensions;

pub use extensions::Extension;

use crate::version::GlVersion;
use std::collections::HashSet;

/// The native queries the registry needs from a live context.
pub trait ContextQuery {
    /// `glGetString(GL_VERSION)`
    fn version_string(&self) -> Option<String>;
    /// `glGetIntegerv(GL_NUM_EXTENSIONS)`
    fn extension_count(&self) -> i32;
    /// `glGetStringi(GL_EXTENSIONS, index)`
    fn extension_at(&self, index: u32) -> Option<String>;
    /// `glGetString(GL_EXTENSIONS)`
    fn extensions_string(&self) -> Option<String>;
}

impl<T: ContextQuery + ?Sized> ContextQuery for &T {
    fn version_string(&self) -> Option<String> {
        (**self).version_string()
    }

    fn extension_count(&self) -> i32 {
        (**self).extension_count()
    }

    fn extension_at(&self, index: u32) -> Option<String> {
        (**self).extension_at(index)
    }

    fn extensions_string(&self) -> Option<String> {
        (**self).extensions_string()
    }
}

/// Collect names through the indexed query.
pub fn collect_indexed<Q: ContextQuery + ?Sized>(query: &Q) -> HashSet<String> {
    let count = query.extension_count().max(0) as u32;
    (0..count)
        .filter_map(|i| query.extension_at(i))
        .map(|name| name.to_lowercase())
        .collect()
}

/// Split a legacy space/NUL separated extension list.
pub fn collect_legacy(list: &str) -> HashSet<String> {
    list.split(|c: char| c == '\0' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// One presence flag per [`Extension`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityTable {
    present: Vec<bool>,
}

impl CapabilityTable {
    pub fn from_names(names: &HashSet<String>) -> Self {
        let present = Extension::ALL
            .iter()
            .map(|extension| names.contains(&extension.name().to_lowercase()))
            .collect();
        Self { present }
    }

    pub fn contains(&self, extension: Extension) -> bool {
        self.present[extension.index()]
    }

    pub fn supported(&self) -> impl Iterator<Item = Extension> + '_ {
        Extension::ALL
            .iter()
            .copied()
            .filter(|extension| self.contains(*extension))
    }

    pub fn len(&self) -> usize {
        self.present.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    table: Option<CapabilityTable>,
    version: GlVersion,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the capability table from `query`.
    pub fn reload<Q: ContextQuery + ?Sized>(&mut self, query: &Q) -> &CapabilityTable {
        let version = query
            .version_string()
            .map(|s| GlVersion::parse(&s))
            .unwrap_or(GlVersion::UNKNOWN);

        let names = if version.has_indexed_extensions() {
            collect_indexed(query)
        } else {
            if !version.is_known() {
                tracing::debug!("GL version unknown, using the legacy extension string");
            }
            query
                .extensions_string()
                .map(|list| collect_legacy(&list))
                .unwrap_or_default()
        };

        let table = CapabilityTable::from_names(&names);
        tracing::debug!(
            "GL {}: context reports {} extensions, {} known",
            version,
            names.len(),
            table.supported().count()
        );

        self.version = version;
        self.table.insert(table)
    }

    /// Whether `extension` is supported. The first call builds the table.
    pub fn is_supported<Q: ContextQuery + ?Sized>(&mut self, extension: Extension, query: &Q) -> bool {
        if let Some(table) = &self.table {
            return table.contains(extension);
        }
        self.reload(query).contains(extension)
    }

    pub fn table(&self) -> Option<&CapabilityTable> {
        self.table.as_ref()
    }

    /// Version detected by the last reload (0 before any).
    pub fn version(&self) -> GlVersion {
        self.version
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeContext;

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn legacy_list_is_split_and_folded() {
        assert_eq!(
            collect_legacy("GL_ARB_foo GL_ARB_bar\0"),
            set(&["gl_arb_foo", "gl_arb_bar"])
        );
        assert_eq!(collect_legacy("  A\0\0B  \n C "), set(&["a", "b", "c"]));
        assert!(collect_legacy("").is_empty());
    }

    #[test]
    fn indexed_duplicates_collapse() {
        let context = FakeContext::modern("4.6", &["GL_X", "GL_Y", "GL_X"]);
        let names = collect_indexed(&context);
        assert_eq!(names.len(), 2);
        assert_eq!(names, set(&["gl_x", "gl_y"]));
        assert_eq!(context.index_queries.get(), 3);
    }

    #[test]
    fn negative_count_is_empty() {
        let mut context = FakeContext::modern("3.3", &["GL_X"]);
        context.count_override = Some(-1);
        assert!(collect_indexed(&context).is_empty());
        assert_eq!(context.index_queries.get(), 0);
    }

    #[test]
    fn modern_context_uses_indexed_query() {
        let context = FakeContext::modern("4.6.0 NVIDIA 535.54", &["GL_ARB_sync", "gl_khr_debug"]);
        let mut registry = CapabilityRegistry::new();
        let table = registry.reload(&context);

        assert!(table.contains(Extension::GL_ARB_sync));
        assert!(table.contains(Extension::GL_KHR_debug));
        assert!(!table.contains(Extension::GL_ARB_compute_shader));
        assert_eq!(context.legacy_queries.get(), 0);
        assert_eq!(registry.version().major, 4);
    }

    #[test]
    fn legacy_context_uses_single_string() {
        let context = FakeContext::legacy("2.1 Mesa", "GL_ARB_multitexture GL_EXT_TEXTURE_SRGB\0");
        let mut registry = CapabilityRegistry::new();
        registry.reload(&context);

        assert!(registry.is_supported(Extension::GL_ARB_multitexture, &context));
        assert!(registry.is_supported(Extension::GL_EXT_texture_sRGB, &context));
        assert_eq!(context.count_queries.get(), 0);
        assert_eq!(context.index_queries.get(), 0);
    }

    #[test]
    fn unparseable_version_falls_back_to_legacy() {
        let mut context = FakeContext::legacy("OpenGL ES 3.2", "GL_KHR_debug");
        context.indexed = vec!["GL_ARB_sync".to_string()];
        let mut registry = CapabilityRegistry::new();
        registry.reload(&context);

        assert_eq!(registry.version(), GlVersion::UNKNOWN);
        assert!(registry.is_supported(Extension::GL_KHR_debug, &context));
        assert!(!registry.is_supported(Extension::GL_ARB_sync, &context));
    }

    #[test]
    fn first_query_reloads_exactly_once() {
        let context = FakeContext::modern("4.5", &["GL_ARB_sync"]);
        let mut registry = CapabilityRegistry::new();
        assert!(!registry.is_loaded());

        assert!(registry.is_supported(Extension::GL_ARB_sync, &context));
        let after_first = context.total_queries();
        assert_eq!(context.version_queries.get(), 1);
        assert_eq!(context.count_queries.get(), 1);

        assert!(registry.is_supported(Extension::GL_ARB_sync, &context));
        assert!(!registry.is_supported(Extension::GL_KHR_debug, &context));
        assert_eq!(context.total_queries(), after_first);
    }

    #[test]
    fn explicit_reload_rebuilds_the_table() {
        let mut context = FakeContext::modern("4.5", &["GL_ARB_sync"]);
        let mut registry = CapabilityRegistry::new();
        assert!(registry.is_supported(Extension::GL_ARB_sync, &context));

        context.indexed = vec!["GL_KHR_debug".to_string()];
        registry.reload(&context);
        assert!(!registry.is_supported(Extension::GL_ARB_sync, &context));
        assert!(registry.is_supported(Extension::GL_KHR_debug, &context));
        assert_eq!(context.version_queries.get(), 2);
    }

    #[test]
    fn missing_strings_mean_nothing_is_supported() {
        let mut context = FakeContext::legacy("1.4", "");
        context.version = None;
        context.legacy = None;
        let mut registry = CapabilityRegistry::new();
        let table = registry.reload(&context);

        assert_eq!(table.len(), Extension::COUNT);
        assert_eq!(table.supported().count(), 0);
    }

    #[test]
    fn table_has_one_flag_per_identifier() {
        let table = CapabilityTable::from_names(&set(&["gl_arb_sync", "gl_unknown_thing"]));
        assert_eq!(table.len(), Extension::COUNT);
        assert_eq!(table.supported().collect::<Vec<_>>(), vec![Extension::GL_ARB_sync]);
    }
}
