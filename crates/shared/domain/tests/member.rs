use sigi_domain::controls::{ControlKind, Display, EditMode};
use sigi_domain::mask::{MaskedField, default_masks};
use sigi_domain::member::{MaritalStatus, MemberDraft};
use strum::IntoEnumIterator;

#[test]
fn marital_status_strings() {
    let all: Vec<String> = MaritalStatus::iter().map(|s| s.to_string()).collect();
    assert_eq!(all, ["Single", "Married", "Divorced", "Widowed"]);
    assert_eq!("Widowed".parse::<MaritalStatus>(), Ok(MaritalStatus::Widowed));
    assert!("Casado".parse::<MaritalStatus>().is_err());
}

#[test]
fn default_masks_cover_all_fields_in_order() {
    let masks = default_masks();
    let fields: Vec<MaskedField> = masks.iter().map(|m| m.field).collect();
    assert_eq!(
        fields,
        [MaskedField::Phone, MaskedField::TaxId, MaskedField::RegistrationId, MaskedField::PostalCode]
    );
    assert_eq!(masks[0].pattern, "(00) 00000-0000");
    assert_eq!(masks[1].pattern, "000.000.000-00");
    assert_eq!(masks[2].pattern, "00.000.000-0");
    assert_eq!(masks[3].pattern, "00000-000");
}

#[test]
fn control_helpers() {
    assert_eq!(Display::Block.css(), "block");
    assert_eq!(Display::Hidden.css(), "none");
    assert!(Display::Hidden.is_hidden());
    assert!(!Display::Unset.is_hidden());

    assert!(ControlKind::TextArea.is_editable());
    assert!(!ControlKind::Button.is_editable());
    assert_eq!(EditMode::default(), EditMode::Locked);
}

#[test]
fn draft_serializes_only_present_fields() {
    let draft = MemberDraft {
        name: Some("Maria".to_owned()),
        marital_status: Some("Married".to_owned()),
        spouse: Some("João".to_owned()),
        phone: Some("(11) 99999-8888".to_owned()),
        ..MemberDraft::default()
    };

    let value = serde_json::to_value(&draft).expect("serialize");
    assert_eq!(value["maritalStatus"], "Married");
    assert_eq!(value["phone"], "(11) 99999-8888");
    assert!(value.get("taxId").is_none());
    assert_eq!(draft.status(), Some(MaritalStatus::Married));
}
