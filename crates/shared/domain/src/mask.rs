use crate::constants::{
    PHONE_ID, PHONE_MASK, POSTAL_CODE_ID, POSTAL_CODE_MASK, REGISTRATION_ID_ID,
    REGISTRATION_ID_MASK, TAX_ID_ID, TAX_ID_MASK,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Text fields of the member form that carry an input mask.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MaskedField {
    Phone,
    TaxId,
    RegistrationId,
    PostalCode,
}

impl MaskedField {
    pub const fn default_pattern(self) -> &'static str {
        match self {
            Self::Phone => PHONE_MASK,
            Self::TaxId => TAX_ID_MASK,
            Self::RegistrationId => REGISTRATION_ID_MASK,
            Self::PostalCode => POSTAL_CODE_MASK,
        }
    }

    pub const fn default_element_id(self) -> &'static str {
        match self {
            Self::Phone => PHONE_ID,
            Self::TaxId => TAX_ID_ID,
            Self::RegistrationId => REGISTRATION_ID_ID,
            Self::PostalCode => POSTAL_CODE_ID,
        }
    }
}

/// A mask to attach at page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskSpec {
    pub field: MaskedField,
    pub pattern: String,
}

impl MaskSpec {
    pub fn new(field: MaskedField, pattern: impl Into<String>) -> Self {
        Self { field, pattern: pattern.into() }
    }
}

/// Phone, tax ID, registration ID and postal code, in that order.
pub fn default_masks() -> Vec<MaskSpec> {
    use strum::IntoEnumIterator;

    MaskedField::iter().map(|field| MaskSpec::new(field, field.default_pattern())).collect()
}
