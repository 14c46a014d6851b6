use crate::dom::FormHost;
use crate::dom::memory::{Element, MemoryDocument, NodeId};
use crate::error::{MemberFormError, MemberFormErrorExt};
use sigi_domain::config::FormConfig;
use sigi_domain::constants::PHOTO_ID;
use sigi_domain::controls::{ControlKind, Display, Locks};
use sigi_domain::member::{MaritalStatus, MemberDraft};
use strum::IntoEnumIterator;

/// Builds the member edit page for an existing record.
///
/// The page starts read-only: text fields are `readonly`, the selector and the photo
/// picker are `disabled`, the spouse section is hidden and the save button carries the
/// hide class. The married choice carries the configured married value.
///
/// # Errors
/// Returns [`MemberFormError::DuplicateElement`] when the bindings reuse an id.
pub fn member_edit_form(
    config: &FormConfig,
    member: &MemberDraft,
) -> Result<MemoryDocument, MemberFormError> {
    let bindings = &config.bindings;
    let mut doc = MemoryDocument::new();
    let root = doc.root();
    let form = doc.append(root, Element::new(ControlKind::Container).id(&bindings.form_region))?;

    text_field(&mut doc, form, "Nome", &bindings.name, member.name.as_deref(), "text")?;

    let group = field_group(&mut doc, form, "Estado civil")?;
    let select = doc.append(
        group,
        Element::new(ControlKind::Select).id(&bindings.marital_status).locked(Locks::DISABLED),
    )?;
    for status in MaritalStatus::iter() {
        let value = match &status {
            MaritalStatus::Married => config.married_value.as_str(),
            other => other.as_ref(),
        };
        doc.append(
            select,
            Element::new(ControlKind::SelectOption).value(value).text(status.to_string()),
        )?;
    }
    if let Some(current) = member.marital_status.as_deref() {
        doc.set_value(select, current);
    }

    let spouse = doc.append(
        form,
        Element::new(ControlKind::Container)
            .id(&bindings.spouse_container)
            .display(Display::Hidden),
    )?;
    text_field(&mut doc, spouse, "Nome do cônjuge", &bindings.spouse_name, member.spouse.as_deref(), "text")?;

    text_field(&mut doc, form, "Telefone", &bindings.phone, member.phone.as_deref(), "tel")?;
    text_field(&mut doc, form, "Email", &bindings.email, member.email.as_deref(), "email")?;
    text_field(&mut doc, form, "CPF", &bindings.tax_id, member.tax_id.as_deref(), "text")?;
    text_field(&mut doc, form, "RG", &bindings.registration_id, member.registration_id.as_deref(), "text")?;
    text_field(&mut doc, form, "CEP", &bindings.postal_code, member.postal_code.as_deref(), "text")?;

    let group = field_group(&mut doc, form, "Foto")?;
    doc.append(
        group,
        Element::new(ControlKind::Input).id(PHOTO_ID).input_type("file").locked(Locks::DISABLED),
    )
    .context("photo picker")?;

    let group = field_group(&mut doc, form, "Observações")?;
    doc.append(
        group,
        Element::new(ControlKind::TextArea)
            .id(&bindings.notes)
            .value(member.notes.clone().unwrap_or_default())
            .locked(Locks::READONLY),
    )?;

    let actions = doc.append(root, Element::new(ControlKind::Container))?;
    doc.append(
        actions,
        Element::new(ControlKind::Button).id(&bindings.enable_edit).text("Habilitar edição"),
    )?;
    doc.append(
        actions,
        Element::new(ControlKind::Button)
            .id(&bindings.save)
            .class(&bindings.save_hidden_class)
            .text("Salvar"),
    )?;

    Ok(doc)
}

fn field_group(
    doc: &mut MemoryDocument,
    parent: NodeId,
    label: &str,
) -> Result<NodeId, MemberFormError> {
    let group = doc.append(parent, Element::new(ControlKind::Container).class("mb-3"))?;
    doc.append(group, Element::new(ControlKind::Label).text(label))?;
    Ok(group)
}

fn text_field(
    doc: &mut MemoryDocument,
    parent: NodeId,
    label: &str,
    id: &str,
    value: Option<&str>,
    input_type: &str,
) -> Result<NodeId, MemberFormError> {
    let group = field_group(doc, parent, label)?;
    doc.append(
        group,
        Element::new(ControlKind::Input)
            .id(id)
            .input_type(input_type)
            .value(value.unwrap_or_default())
            .locked(Locks::READONLY),
    )
}
