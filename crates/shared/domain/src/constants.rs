//! Element ids and literals of the member edit page markup.

pub const MARITAL_STATUS_ID: &str = "estadoCivil";
pub const SPOUSE_CONTAINER_ID: &str = "conjugeField";
pub const SPOUSE_NAME_ID: &str = "conjuge";
pub const FORM_REGION_ID: &str = "formEditar";
pub const ENABLE_EDIT_ID: &str = "habilitarEdicao";
pub const SAVE_BUTTON_ID: &str = "salvarBtn";

pub const PHONE_ID: &str = "telefone";
pub const TAX_ID_ID: &str = "cpf";
pub const REGISTRATION_ID_ID: &str = "rg";
pub const POSTAL_CODE_ID: &str = "cep";

pub const NAME_ID: &str = "nome";
pub const EMAIL_ID: &str = "email";
pub const NOTES_ID: &str = "observacoes";
pub const PHOTO_ID: &str = "foto";

/// Utility class that keeps the save button out of the layout until editing starts.
pub const SAVE_HIDDEN_CLASS: &str = "d-none";

/// Selector value that reveals the spouse section.
pub const MARRIED: &str = "Married";

pub const PHONE_MASK: &str = "(00) 00000-0000";
pub const TAX_ID_MASK: &str = "000.000.000-00";
pub const REGISTRATION_ID_MASK: &str = "00.000.000-0";
pub const POSTAL_CODE_MASK: &str = "00000-000";
