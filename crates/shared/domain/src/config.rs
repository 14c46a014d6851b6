use crate::constants::{
    EMAIL_ID, ENABLE_EDIT_ID, FORM_REGION_ID, MARITAL_STATUS_ID, MARRIED, NAME_ID, NOTES_ID,
    SAVE_BUTTON_ID, SAVE_HIDDEN_CLASS, SPOUSE_CONTAINER_ID, SPOUSE_NAME_ID,
};
use crate::mask::{MaskSpec, MaskedField, default_masks};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub form: FormConfig,
    pub logging: LoggingConfig,
}

/// Arc-wrapped config for inexpensive cloning into UI components.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Behavior knobs of the member edit form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub bindings: FormBindings,
    /// Selector value that reveals the spouse section.
    pub married_value: String,
    pub masks: Vec<MaskSpec>,
}

/// Element ids the page markup must provide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormBindings {
    pub marital_status: String,
    pub spouse_container: String,
    pub form_region: String,
    pub enable_edit: String,
    pub save: String,
    /// Class removed from the save button to show it.
    pub save_hidden_class: String,
    pub phone: String,
    pub tax_id: String,
    pub registration_id: String,
    pub postal_code: String,
    // Read on save only; absence is tolerated.
    pub spouse_name: String,
    pub name: String,
    pub email: String,
    pub notes: String,
}

impl FormBindings {
    pub fn mask_target(&self, field: MaskedField) -> &str {
        match field {
            MaskedField::Phone => &self.phone,
            MaskedField::TaxId => &self.tax_id,
            MaskedField::RegistrationId => &self.registration_id,
            MaskedField::PostalCode => &self.postal_code,
        }
    }
}

/// Logger settings read by the binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
    pub directives: Option<String>,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            bindings: FormBindings::default(),
            married_value: MARRIED.to_owned(),
            masks: default_masks(),
        }
    }
}

impl Default for FormBindings {
    fn default() -> Self {
        Self {
            marital_status: MARITAL_STATUS_ID.to_owned(),
            spouse_container: SPOUSE_CONTAINER_ID.to_owned(),
            form_region: FORM_REGION_ID.to_owned(),
            enable_edit: ENABLE_EDIT_ID.to_owned(),
            save: SAVE_BUTTON_ID.to_owned(),
            save_hidden_class: SAVE_HIDDEN_CLASS.to_owned(),
            phone: MaskedField::Phone.default_element_id().to_owned(),
            tax_id: MaskedField::TaxId.default_element_id().to_owned(),
            registration_id: MaskedField::RegistrationId.default_element_id().to_owned(),
            postal_code: MaskedField::PostalCode.default_element_id().to_owned(),
            spouse_name: SPOUSE_NAME_ID.to_owned(),
            name: NAME_ID.to_owned(),
            email: EMAIL_ID.to_owned(),
            notes: NOTES_ID.to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directives: None, directory: None, json: false }
    }
}
