//! Member edit form feature slice.
//!
//! Wires three behaviors onto the member page:
//! * the spouse section follows the marital-status selector,
//! * a one-shot "enable edit" button unlocks the form and reveals the save button,
//! * phone, tax ID, registration ID and postal code inputs get input masks.
//!
//! The behaviors talk to the page through [`FormHost`], so they run the same against the
//! in-memory [`MemoryDocument`] and any UI shell that implements the trait.
//!
//! ```rust
//! use sigi_member_form::{MemberEditPage, PageEvent, member_edit_form};
//! use sigi_member_form::domain::config::FormConfig;
//! use sigi_member_form::domain::member::MemberDraft;
//!
//! let config = FormConfig::default();
//! let doc = member_edit_form(&config, &MemberDraft::default()).unwrap();
//! let mut page = MemberEditPage::mount(doc, &config).unwrap();
//! page.dispatch(PageEvent::DomContentLoaded);
//! assert!(!page.controller().is_unlocked());
//! ```

mod controller;
mod dom;
mod error;
mod masker;
mod page;

pub use crate::controller::{FormHandles, FormUiController};
pub use crate::dom::memory::{Element, MemoryDocument, Node, NodeId};
pub use crate::dom::template::member_edit_form;
pub use crate::dom::FormHost;
pub use crate::error::{MemberFormError, MemberFormErrorExt};
pub use crate::masker::{InputMasker, MaskRegistry};
pub use crate::page::{MemberEditPage, PageEvent, PageOutcome};
pub use sigi_kernel::domain;
