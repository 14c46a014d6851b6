use crate::dom::FormHost;
use crate::error::MemberFormError;
use fxhash::FxHashMap;
use sigi_kernel::mask::MaskPattern;
use std::hash::Hash;
use tracing::{debug, trace};

/// Capability that binds an input mask to a text field.
pub trait InputMasker<H> {
    /// Attaches `pattern` to `field`, replacing any mask it already had.
    ///
    /// # Errors
    /// Implementations backed by a UI toolkit may refuse the field.
    fn attach(&mut self, field: H, pattern: &MaskPattern) -> Result<(), MemberFormError>;
}

/// Bundled [`InputMasker`]: remembers the mask of each field and formats what is typed.
#[derive(Debug, Clone)]
pub struct MaskRegistry<H> {
    masks: FxHashMap<H, MaskPattern>,
}

impl<H> Default for MaskRegistry<H> {
    fn default() -> Self {
        Self { masks: FxHashMap::default() }
    }
}

impl<H: Copy + Eq + Hash> MaskRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern_for(&self, field: H) -> Option<&MaskPattern> {
        self.masks.get(&field)
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Formats `raw` for a masked field and stores the result as the field value.
    ///
    /// Returns `None` and leaves the field untouched when it has no mask.
    pub fn format_input<F>(&self, host: &mut F, field: H, raw: &str) -> Option<String>
    where
        F: FormHost<Handle = H>,
    {
        let pattern = self.masks.get(&field)?;
        let formatted = pattern.apply(raw);
        trace!(mask = %pattern, raw, formatted = %formatted, "Formatted masked input");
        host.set_value(field, &formatted);
        Some(formatted)
    }

    /// Re-formats the current value of every masked field.
    pub fn reformat_all<F>(&self, host: &mut F)
    where
        F: FormHost<Handle = H>,
    {
        for (field, pattern) in &self.masks {
            let current = host.value(*field);
            if !current.is_empty() {
                host.set_value(*field, &pattern.apply(&current));
            }
        }
    }
}

impl<H> InputMasker<H> for MaskRegistry<H>
where
    H: Copy + Eq + Hash + std::fmt::Debug,
{
    fn attach(&mut self, field: H, pattern: &MaskPattern) -> Result<(), MemberFormError> {
        debug!(?field, mask = %pattern, "Attaching input mask");
        self.masks.insert(field, pattern.clone());
        Ok(())
    }
}
