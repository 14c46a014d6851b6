//! Renders the member document and feeds browser events back into the page.

use dioxus::prelude::*;
use sigi::domain::controls::{ControlKind, Locks};
use sigi::domain::member::MemberDraft;
use sigi::features::member_form::{
    FormHost, MemberEditPage, MemoryDocument, Node, NodeId, PageEvent, PageOutcome,
};
use tracing::{info, warn};

type PageSignal = Signal<MemberEditPage<MemoryDocument>>;

#[component]
pub(crate) fn App() -> Element {
    let seed = use_context::<MemberEditPage<MemoryDocument>>();
    let page = use_signal(move || seed);
    let saved = use_signal(|| None::<MemberDraft>);
    let root = page.read().host().root();

    rsx! {
        main { class: "container py-4",
            h1 { class: "h4 mb-4", "Editar membro" }
            NodeView { page, saved, id: root }
            SavedDraft { saved }
        }
    }
}

#[component]
fn SavedDraft(saved: Signal<Option<MemberDraft>>) -> Element {
    let Some(draft) = saved.read().clone() else {
        return rsx! {};
    };
    let body = serde_json::to_string_pretty(&draft).unwrap_or_else(|e| e.to_string());

    rsx! {
        div { class: "alert alert-success mt-4",
            strong { "Dados prontos para salvar" }
            pre { "{body}" }
        }
    }
}

fn dispatch(mut page: PageSignal, mut saved: Signal<Option<MemberDraft>>, event: PageEvent<NodeId>) {
    let outcome = page.write().dispatch(event);
    if let PageOutcome::Saved(draft) = outcome {
        info!(name = ?draft.name, "Member draft ready to save");
        saved.set(Some(draft));
    }
}

/// Selectors fire input then change, like a browser does.
fn choose(mut page: PageSignal, id: NodeId, value: &str) {
    if page.write().choose(id, value) == PageOutcome::Ignored {
        warn!(?id, value, "Selection ignored by a locked selector");
    }
}

/// Inline style for a node. The configured hide class renders as `display: none`.
fn inline_style(page: &MemberEditPage<MemoryDocument>, node: &Node) -> String {
    let hide_class = &page.controller().bindings().save_hidden_class;
    if node.classes().iter().any(|class| class == hide_class) {
        return "display: none".to_owned();
    }
    match node.display().css() {
        "" => String::new(),
        css => format!("display: {css}"),
    }
}

#[component]
fn NodeView(page: PageSignal, saved: Signal<Option<MemberDraft>>, id: NodeId) -> Element {
    let Some(node) = page.read().host().node(id).cloned() else {
        warn!(?id, "Rendering a node the document does not hold");
        return rsx! {};
    };

    let dom_id = node.element_id().map(str::to_owned);
    let class = node.classes().join(" ");
    let style = inline_style(&page.read(), &node);
    let readonly = node.locks().contains(Locks::READONLY);
    let disabled = node.locks().contains(Locks::DISABLED);
    let value = node.value().to_owned();
    let text = node.text().to_owned();
    let input_type = node.input_type().to_owned();
    let children = node.children().to_vec();
    let selected = node.kind() == ControlKind::SelectOption
        && node.parent().is_some_and(|select| page.read().host().value(select) == value);

    match node.kind() {
        ControlKind::Container => rsx! {
            div { id: dom_id, class: "{class}", style: "{style}",
                for child in children {
                    NodeView { key: "{child:?}", page, saved, id: child }
                }
            }
        },
        ControlKind::Label => rsx! {
            label { class: "form-label", "{text}" }
        },
        ControlKind::Input if input_type == "file" => rsx! {
            input { id: dom_id, class: "form-control", r#type: "file", disabled, readonly }
        },
        ControlKind::Input => rsx! {
            input {
                id: dom_id,
                class: "form-control {class}",
                r#type: "{input_type}",
                value: "{value}",
                readonly,
                disabled,
                oninput: move |evt| dispatch(page, saved, PageEvent::Input { target: id, text: evt.value() }),
                onchange: move |_| dispatch(page, saved, PageEvent::Change { target: id }),
            }
        },
        ControlKind::TextArea => rsx! {
            textarea {
                id: dom_id,
                class: "form-control {class}",
                value: "{value}",
                readonly,
                disabled,
                oninput: move |evt| dispatch(page, saved, PageEvent::Input { target: id, text: evt.value() }),
                onchange: move |_| dispatch(page, saved, PageEvent::Change { target: id }),
            }
        },
        ControlKind::Select => rsx! {
            select {
                id: dom_id,
                class: "form-select {class}",
                value: "{value}",
                disabled,
                onchange: move |evt| choose(page, id, &evt.value()),
                for child in children {
                    NodeView { key: "{child:?}", page, saved, id: child }
                }
            }
        },
        ControlKind::SelectOption => rsx! {
            option { value: "{value}", selected, "{text}" }
        },
        ControlKind::Button => rsx! {
            button {
                id: dom_id,
                class: "btn btn-primary me-2 {class}",
                style: "{style}",
                r#type: "button",
                onclick: move |_| dispatch(page, saved, PageEvent::Click { target: id }),
                "{text}"
            }
        },
    }
}
