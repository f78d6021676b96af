//! Function table and reload manager
//!
//! One slot per entry in [`ENTRY_POINTS`]. Slots start unresolved, and every
//! reload pass leaves each one bound (core or extension) or unavailable.
//! Nothing is retried: a slot keeps its result until the next explicit
//! reload.

use crate::bound::BoundFn;
use crate::catalog::{slot_index, Signature, SlotDescriptor, StaticCatalog, ENTRY_POINTS};
use crate::resolver::{Resolution, Resolver};
use glint_env::ProcAddressSource;
use glint_metrics::Counter;
use std::ffi::c_void;
use std::ptr::NonNull;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotState {
    Unresolved,
    ResolvedCore,
    ResolvedExtension,
    Unavailable,
}

/// One bindable entry point and its current binding.
#[derive(Debug)]
pub struct FunctionSlot {
    descriptor: &'static SlotDescriptor,
    resolution: Option<Resolution>,
}

impl FunctionSlot {
    fn new(descriptor: &'static SlotDescriptor) -> Self {
        Self {
            descriptor,
            resolution: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    pub fn signature(&self) -> Signature {
        self.descriptor.signature()
    }

    pub fn state(&self) -> SlotState {
        match self.resolution {
            None => SlotState::Unresolved,
            Some(Resolution::Core(_)) => SlotState::ResolvedCore,
            Some(Resolution::Extension(_)) => SlotState::ResolvedExtension,
            Some(Resolution::Unavailable) => SlotState::Unavailable,
        }
    }

    pub fn bound(&self) -> Option<&BoundFn> {
        self.resolution.as_ref().and_then(Resolution::bound)
    }

    pub fn address(&self) -> Option<NonNull<c_void>> {
        self.bound().map(BoundFn::address)
    }
}

/// Slot counts after a reload pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReloadReport {
    pub core: usize,
    pub extension: usize,
    pub unavailable: usize,
}

impl ReloadReport {
    pub fn resolved(&self) -> usize {
        self.core + self.extension
    }

    pub fn total(&self) -> usize {
        self.resolved() + self.unavailable
    }

    fn tally(&mut self, state: SlotState) {
        match state {
            SlotState::ResolvedCore => self.core += 1,
            SlotState::ResolvedExtension => self.extension += 1,
            SlotState::Unavailable => self.unavailable += 1,
            SlotState::Unresolved => {}
        }
    }
}

pub struct FunctionTable {
    slots: Vec<FunctionSlot>,
    loaded: bool,
    log_unavailable: bool,
    counter: Counter,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self {
            slots: ENTRY_POINTS.iter().map(FunctionSlot::new).collect(),
            loaded: false,
            log_unavailable: false,
            counter: Counter::new(),
        }
    }

    /// Emit a debug line for every slot that ends up unavailable.
    pub fn set_log_unavailable(&mut self, enabled: bool) {
        self.log_unavailable = enabled;
    }

    /// True once a full reload pass has run.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Re-resolve every slot, discarding all previous bindings.
    pub fn reload_all<L, C>(&mut self, resolver: &Resolver<'_, L, C>) -> ReloadReport
    where
        L: ProcAddressSource + ?Sized,
        C: StaticCatalog + ?Sized,
    {
        for slot in &mut self.slots {
            slot.resolution = None;
        }

        let mut report = ReloadReport::default();
        for slot in &mut self.slots {
            let resolution = resolver.resolve(slot.descriptor);
            slot.resolution = Some(resolution);
            report.tally(slot.state());

            tracing::trace!("{} -> {:?}", slot.name(), slot.state());
            if self.log_unavailable && !resolution.is_bound() {
                tracing::debug!("{} is unavailable", slot.name());
            }
        }
        self.loaded = true;

        glint_metrics::metrics! {
            self.counter.increment("reloads", 1);
            self.counter.increment("slots.core", report.core);
            self.counter.increment("slots.extension", report.extension);
            self.counter.increment("slots.unavailable", report.unavailable);
        }

        tracing::debug!(
            "reloaded {} entry points: {} core, {} extension, {} unavailable",
            report.total(),
            report.core,
            report.extension,
            report.unavailable
        );
        report
    }

    /// Resolve a single slot by name.
    ///
    /// Returns `false` for unknown names (nothing is touched) and for
    /// functions that resolve to nothing. The slot always takes the fresh
    /// path; the cached binding is only replaced when the new result points
    /// somewhere else.
    pub fn reload_one<L, C>(&mut self, name: &str, resolver: &Resolver<'_, L, C>) -> bool
    where
        L: ProcAddressSource + ?Sized,
        C: StaticCatalog + ?Sized,
    {
        let Some(index) = slot_index(name) else {
            tracing::debug!("{} is not a known entry point", name);
            return false;
        };

        let slot = &mut self.slots[index];
        let fresh = resolver.resolve(slot.descriptor);
        let kept = slot
            .bound()
            .copied()
            .filter(|previous| fresh.bound().is_some_and(|bound| previous.same_target(bound)));
        let next = match kept {
            Some(previous) => fresh.with_bound(previous),
            None => {
                tracing::trace!("{} rebound", slot.name());
                fresh
            }
        };
        slot.resolution = Some(next);
        next.is_bound()
    }

    pub fn slot(&self, name: &str) -> Option<&FunctionSlot> {
        slot_index(name).map(|index| &self.slots[index])
    }

    pub fn state(&self, name: &str) -> Option<SlotState> {
        self.slot(name).map(FunctionSlot::state)
    }

    pub fn bound(&self, name: &str) -> Option<&BoundFn> {
        self.slot(name).and_then(FunctionSlot::bound)
    }

    pub fn address(&self, name: &str) -> Option<NonNull<c_void>> {
        self.slot(name).and_then(FunctionSlot::address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionSlot> {
        self.slots.iter()
    }

    /// Current slot counts.
    pub fn report(&self) -> ReloadReport {
        let mut report = ReloadReport::default();
        for slot in &self.slots {
            report.tally(slot.state());
        }
        report
    }

    /// Totals across all reload passes (empty without the `metrics` feature).
    pub fn counters(&self) -> &Counter {
        &self.counter
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self::new()
    }
}
