//! Widget instance identifiers.
//!
//! Floating widgets (combo boxes, callouts) name their sub-elements with
//! string ids derived from a per-instance base, e.g. `matcha-3-textfield`,
//! `matcha-3-callout`, `matcha-3-options-7`. Focus-loss handling relies on
//! these names: when focus moves to an element whose id is namespaced under
//! the same instance, the widget treats focus as still "inside" and does not
//! close. The base therefore must be unique per instance for the lifetime of
//! the process, and the prefix check must be collision-free (hence the
//! trailing `-` in the containment predicate: `matcha-3` never matches
//! elements of `matcha-30`).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A process-unique widget instance identifier.
///
/// Allocated from a global atomic counter; two instances never share a base.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a fresh, unique id.
    pub fn next() -> Self {
        WidgetId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The id's string base, used as the prefix for element ids.
    pub fn base(&self) -> String {
        format!("matcha-{}", self.0)
    }

    /// Derive a sub-element id: `<base>-<suffix>`.
    pub fn element(&self, suffix: &str) -> String {
        format!("{}-{}", self.base(), suffix)
    }

    /// Whether `target` names an element inside this instance's namespace.
    ///
    /// This is the blur-containment check: focus moving to a contained
    /// element must not close the widget.
    pub fn contains(&self, target: &str) -> bool {
        target.starts_with(&format!("{}-", self.base()))
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base())
    }
}
