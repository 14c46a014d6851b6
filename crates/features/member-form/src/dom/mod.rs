//! The page surface the member form behaviors are written against.

pub(crate) mod memory;
pub(crate) mod template;

use sigi_domain::controls::{Display, Locks};
use std::fmt::Debug;
use std::hash::Hash;

/// A document holding the member form.
///
/// Handles are cheap ids resolved once with [`FormHost::find_by_id`]; every other call
/// takes a handle the same host returned. Reads of an unknown handle yield empty values
/// and writes to one are ignored.
pub trait FormHost {
    type Handle: Copy + Eq + Hash + Debug;

    fn find_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// Current value of an input, select or textarea.
    fn value(&self, el: Self::Handle) -> String;

    fn set_value(&mut self, el: Self::Handle, value: &str);

    /// Inline `display` style.
    fn display(&self, el: Self::Handle) -> Display;

    fn set_display(&mut self, el: Self::Handle, display: Display);

    /// Inputs, selects and textareas below `region`, in document order.
    fn editable_controls(&self, region: Self::Handle) -> Vec<Self::Handle>;

    fn locks(&self, el: Self::Handle) -> Locks;

    /// Removes the given constraints, keeping any others.
    fn clear_locks(&mut self, el: Self::Handle, locks: Locks);

    fn has_class(&self, el: Self::Handle, class: &str) -> bool;

    fn remove_class(&mut self, el: Self::Handle, class: &str);
}
