use sigi_member_form::domain::config::FormConfig;
use sigi_member_form::domain::member::{MaritalStatus, MemberDraft};
use sigi_member_form::{
    MemberEditPage, MemberFormError, MemoryDocument, PageEvent, PageOutcome, member_edit_form,
};

fn mount(member: &MemberDraft) -> MemberEditPage<MemoryDocument> {
    let config = FormConfig::default();
    let doc = member_edit_form(&config, member).expect("markup");
    let mut page = MemberEditPage::mount(doc, &config).expect("mount");
    assert_eq!(page.dispatch(PageEvent::DomContentLoaded), PageOutcome::Handled);
    page
}

fn click(page: &mut MemberEditPage<MemoryDocument>, id: &str) -> PageOutcome {
    let target = page.find(id).expect("button");
    page.dispatch(PageEvent::Click { target })
}

fn type_into(page: &mut MemberEditPage<MemoryDocument>, id: &str, text: &str) -> PageOutcome {
    let target = page.find(id).expect("field");
    page.dispatch(PageEvent::Input { target, text: text.to_owned() })
}

#[test]
fn read_only_page_ignores_typing_and_saving() {
    let mut page = mount(&MemberDraft::default());
    let select = page.find("estadoCivil").expect("selector");

    assert_eq!(type_into(&mut page, "telefone", "11999998888"), PageOutcome::Ignored);
    assert_eq!(page.choose(select, "Married"), PageOutcome::Ignored);
    assert_eq!(click(&mut page, "salvarBtn"), PageOutcome::Ignored);

    let phone = page.find("telefone").expect("phone");
    assert_eq!(page.value(phone), "");
    assert!(!page.controller().spouse_visible(page.host()));
}

#[test]
fn editing_session_produces_a_formatted_draft() {
    let mut page = mount(&MemberDraft { name: Some("Ana".into()), ..MemberDraft::default() });

    assert_eq!(click(&mut page, "habilitarEdicao"), PageOutcome::Handled);
    assert!(page.controller().is_unlocked());

    type_into(&mut page, "telefone", "11999998888");
    type_into(&mut page, "cpf", "12345678901");
    type_into(&mut page, "rg", "123456789");
    type_into(&mut page, "cep", "12345678");
    type_into(&mut page, "email", "ana@example.org");

    let select = page.find("estadoCivil").expect("selector");
    assert_eq!(page.choose(select, "Married"), PageOutcome::Handled);
    assert!(page.controller().spouse_visible(page.host()));
    type_into(&mut page, "conjuge", "Bruno");

    let PageOutcome::Saved(draft) = click(&mut page, "salvarBtn") else {
        panic!("save button should be live after unlocking");
    };
    assert_eq!(
        draft,
        MemberDraft {
            name: Some("Ana".into()),
            marital_status: Some("Married".into()),
            spouse: Some("Bruno".into()),
            phone: Some("(11) 99999-8888".into()),
            email: Some("ana@example.org".into()),
            tax_id: Some("123.456.789-01".into()),
            registration_id: Some("12.345.678-9".into()),
            postal_code: Some("12345-678".into()),
            notes: None,
        }
    );
    assert_eq!(draft.status(), Some(MaritalStatus::Married));
}

#[test]
fn spouse_is_dropped_once_no_longer_married() {
    let mut page = mount(&MemberDraft {
        marital_status: Some("Married".into()),
        spouse: Some("Bruno".into()),
        ..MemberDraft::default()
    });
    assert!(page.controller().spouse_visible(page.host()));

    click(&mut page, "habilitarEdicao");
    let select = page.find("estadoCivil").expect("selector");
    page.choose(select, "Divorced");
    assert!(!page.controller().spouse_visible(page.host()));

    let PageOutcome::Saved(draft) = click(&mut page, "salvarBtn") else {
        panic!("expected a saved draft");
    };
    assert_eq!(draft.marital_status.as_deref(), Some("Divorced"));
    assert_eq!(draft.spouse, None);
}

#[test]
fn second_unlock_click_changes_nothing() {
    let mut page = mount(&MemberDraft::default());
    click(&mut page, "habilitarEdicao");
    let snapshot = format!("{:?}", page.host());

    assert_eq!(click(&mut page, "habilitarEdicao"), PageOutcome::Handled);
    assert_eq!(format!("{:?}", page.host()), snapshot);
}

#[test]
fn stored_values_are_formatted_on_mount() {
    let page = mount(&MemberDraft {
        phone: Some("11999998888".into()),
        postal_code: Some("12345-678".into()),
        ..MemberDraft::default()
    });

    let phone = page.find("telefone").expect("phone");
    let cep = page.find("cep").expect("postal code");
    assert_eq!(page.value(phone), "(11) 99999-8888");
    assert_eq!(page.value(cep), "12345-678");
    assert_eq!(page.masks().len(), 4);
}

#[test]
fn overflowing_input_is_truncated() {
    let mut page = mount(&MemberDraft::default());
    click(&mut page, "habilitarEdicao");

    type_into(&mut page, "cep", "123456789999");
    let cep = page.find("cep").expect("postal code");
    assert_eq!(page.value(cep), "12345-678");
}

#[test]
fn unknown_targets_are_ignored() {
    let mut page = mount(&MemberDraft::default());
    let name = page.find("nome").expect("name");

    assert_eq!(page.dispatch(PageEvent::Click { target: name }), PageOutcome::Ignored);
    assert_eq!(page.dispatch(PageEvent::Change { target: name }), PageOutcome::Ignored);
}

#[test]
fn mounting_incomplete_markup_fails() {
    let mut config = FormConfig::default();
    config.bindings.save = "gravarBtn".into();

    let doc = member_edit_form(&FormConfig::default(), &MemberDraft::default()).expect("markup");
    let err = MemberEditPage::mount(doc, &config).expect_err("save button is missing");

    assert!(matches!(err, MemberFormError::MissingElement { ref id, .. } if id == "gravarBtn"));
}

#[test]
fn localized_married_value_round_trips_through_the_selector() {
    let config = FormConfig { married_value: "Casado".into(), ..FormConfig::default() };
    let member = MemberDraft { marital_status: Some("Casado".into()), ..MemberDraft::default() };
    let doc = member_edit_form(&config, &member).expect("markup");
    let mut page = MemberEditPage::mount(doc, &config).expect("mount");
    page.dispatch(PageEvent::DomContentLoaded);

    let select = page.find("estadoCivil").expect("selector");
    assert_eq!(page.value(select), "Casado");
    assert!(page.controller().spouse_visible(page.host()));

    click(&mut page, "habilitarEdicao");
    assert_eq!(page.choose(select, "Divorced"), PageOutcome::Handled);
    assert!(!page.controller().spouse_visible(page.host()));

    assert_eq!(page.choose(select, "Casado"), PageOutcome::Handled);
    assert_eq!(page.value(select), "Casado");
    assert!(page.controller().spouse_visible(page.host()));
}
