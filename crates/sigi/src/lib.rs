//! Facade crate for `SiGI` features and shared modules.
//! Re-exports domain/kernel primitives and the feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use sigi_domain as domain;
pub use sigi_kernel as kernel;

/// Feature slices, one module per page.
pub mod features {
    pub use sigi_member_form as member_form;
}

pub mod prelude {
    pub use sigi_domain::config::{AppConfig, FormConfig};
    pub use sigi_domain::member::{MaritalStatus, MemberDraft};
    pub use sigi_member_form::{
        FormHost, MemberEditPage, MemberFormError, MemoryDocument, NodeId, PageEvent, PageOutcome,
        member_edit_form,
    };
}
