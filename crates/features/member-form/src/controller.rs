use crate::dom::FormHost;
use crate::error::{MemberFormError, MemberFormErrorExt};
use crate::masker::InputMasker;
use sigi_domain::config::{FormBindings, FormConfig};
use sigi_domain::controls::{Display, EditMode, Locks};
use sigi_domain::mask::MaskedField;
use sigi_domain::member::MemberDraft;
use sigi_kernel::mask::MaskPattern;
use tracing::{debug, info};

/// Elements of the page markup the controller is wired to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormHandles<H> {
    pub marital_status: H,
    pub spouse_container: H,
    pub form_region: H,
    pub enable_edit: H,
    pub save: H,
    pub masked: Vec<(MaskedField, H)>,
}

/// UI behaviors of the member edit page.
///
/// Built once per page with [`FormUiController::bind`]; the handlers then mutate the
/// host they are given. Editability only moves from [`EditMode::Locked`] to
/// [`EditMode::Unlocked`].
#[derive(Debug, Clone)]
pub struct FormUiController<H> {
    handles: FormHandles<H>,
    masks: Vec<(H, MaskPattern)>,
    bindings: FormBindings,
    married_value: String,
    mode: EditMode,
}

impl<H: Copy + Eq + std::fmt::Debug> FormUiController<H> {
    /// Resolves every element of the page contract and parses the configured masks.
    ///
    /// # Errors
    /// * [`MemberFormError::MissingElement`] when an id is absent from the page.
    /// * [`MemberFormError::Mask`] when a configured pattern is invalid.
    pub fn bind<F>(host: &F, config: &FormConfig) -> Result<Self, MemberFormError>
    where
        F: FormHost<Handle = H>,
    {
        let bindings = &config.bindings;

        let mut masked = Vec::with_capacity(config.masks.len());
        let mut masks = Vec::with_capacity(config.masks.len());
        for spec in &config.masks {
            let field = require(host, bindings.mask_target(spec.field))?;
            let pattern = MaskPattern::parse(&spec.pattern)
                .context(format!("{} mask", spec.field))?;
            masked.push((spec.field, field));
            masks.push((field, pattern));
        }

        let handles = FormHandles {
            marital_status: require(host, &bindings.marital_status)?,
            spouse_container: require(host, &bindings.spouse_container)?,
            form_region: require(host, &bindings.form_region)?,
            enable_edit: require(host, &bindings.enable_edit)?,
            save: require(host, &bindings.save)?,
            masked,
        };
        debug!(?handles, "Member form bound");

        Ok(Self {
            handles,
            masks,
            bindings: bindings.clone(),
            married_value: config.married_value.clone(),
            mode: EditMode::Locked,
        })
    }

    pub const fn handles(&self) -> &FormHandles<H> {
        &self.handles
    }

    pub const fn bindings(&self) -> &FormBindings {
        &self.bindings
    }

    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    pub const fn is_unlocked(&self) -> bool {
        matches!(self.mode, EditMode::Unlocked)
    }

    /// Whether the selector currently holds the married value.
    pub fn is_married<F>(&self, host: &F) -> bool
    where
        F: FormHost<Handle = H>,
    {
        host.value(self.handles.marital_status) == self.married_value
    }

    pub fn spouse_visible<F>(&self, host: &F) -> bool
    where
        F: FormHost<Handle = H>,
    {
        !host.display(self.handles.spouse_container).is_hidden()
    }

    pub fn save_visible<F>(&self, host: &F) -> bool
    where
        F: FormHost<Handle = H>,
    {
        let save = self.handles.save;
        !host.has_class(save, &self.bindings.save_hidden_class) && !host.display(save).is_hidden()
    }

    /// Selector changed: show the spouse section for the married value, hide it otherwise.
    pub fn on_marital_status_change<F>(&self, host: &mut F)
    where
        F: FormHost<Handle = H>,
    {
        let married = self.is_married(host);
        let shown = if married { Display::Block } else { Display::Hidden };
        debug!(married, display = shown.css(), "Marital status changed");
        host.set_display(self.handles.spouse_container, shown);
    }

    /// Page loaded: reveal the spouse section for a married member.
    ///
    /// Never hides it; the markup hides the section by default.
    pub fn on_page_load<F>(&self, host: &mut F)
    where
        F: FormHost<Handle = H>,
    {
        if self.is_married(host) {
            debug!("Married member loaded, revealing spouse section");
            host.set_display(self.handles.spouse_container, Display::Block);
        }
    }

    /// Enable-edit clicked: unlock every control of the form region, show the save
    /// button and hide the enable-edit button.
    ///
    /// Calling it again changes nothing.
    pub fn on_enable_edit_click<F>(&mut self, host: &mut F)
    where
        F: FormHost<Handle = H>,
    {
        let controls = host.editable_controls(self.handles.form_region);
        for control in &controls {
            host.clear_locks(*control, Locks::ALL);
        }

        host.remove_class(self.handles.save, &self.bindings.save_hidden_class);
        host.set_display(self.handles.enable_edit, Display::Hidden);

        if self.mode == EditMode::Locked {
            info!(controls = controls.len(), "Member form unlocked for editing");
        }
        self.mode = EditMode::Unlocked;
    }

    /// Attaches the configured masks through `masker`.
    ///
    /// # Errors
    /// Propagates the first refusal of the masker.
    pub fn apply_input_masks<M>(&self, masker: &mut M) -> Result<(), MemberFormError>
    where
        M: InputMasker<H>,
    {
        for (field, pattern) in &self.masks {
            masker.attach(*field, pattern).context(format!("attaching {pattern}"))?;
        }
        debug!(count = self.masks.len(), "Input masks applied");
        Ok(())
    }

    /// Snapshot of the form values for saving.
    ///
    /// Optional fields missing from the markup are left empty. The spouse name is
    /// dropped unless the member is married.
    pub fn collect_draft<F>(&self, host: &F) -> MemberDraft
    where
        F: FormHost<Handle = H>,
    {
        let read = |handle: H| non_empty(host.value(handle));
        let read_id = |id: &str| host.find_by_id(id).and_then(read);
        let masked = |field: MaskedField| {
            self.handles.masked.iter().find(|(f, _)| *f == field).and_then(|(_, h)| read(*h))
        };

        MemberDraft {
            name: read_id(&self.bindings.name),
            marital_status: read(self.handles.marital_status),
            spouse: if self.is_married(host) { read_id(&self.bindings.spouse_name) } else { None },
            phone: masked(MaskedField::Phone),
            email: read_id(&self.bindings.email),
            tax_id: masked(MaskedField::TaxId),
            registration_id: masked(MaskedField::RegistrationId),
            postal_code: masked(MaskedField::PostalCode),
            notes: read_id(&self.bindings.notes),
        }
    }
}

fn require<F: FormHost>(host: &F, id: &str) -> Result<F::Handle, MemberFormError> {
    host.find_by_id(id)
        .ok_or_else(|| MemberFormError::MissingElement { id: id.to_owned().into(), context: None })
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
