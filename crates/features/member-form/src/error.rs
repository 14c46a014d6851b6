use sigi_kernel::mask::MaskError;
use std::borrow::Cow;

/// A specialized [`MemberFormError`] enum of this crate.
#[sigi_derive::sigi_error]
pub enum MemberFormError {
    /// The page markup lacks an element the form is wired to.
    #[error("Missing element{}: #{id}", format_context(.context))]
    MissingElement { id: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two elements were given the same id.
    #[error("Duplicate element id{}: #{id}", format_context(.context))]
    DuplicateElement { id: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A configured mask pattern cannot be used.
    #[error("Mask error{}: {source}", format_context(.context))]
    Mask { source: MaskError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal member form error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
