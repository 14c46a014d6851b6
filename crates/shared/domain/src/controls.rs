use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Editability constraints carried by a form control.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Locks: u8 {
        /// Text can be selected but not changed.
        const READONLY = 1 << 0;
        /// The control neither takes input nor submits.
        const DISABLED = 1 << 1;

        const ALL = Self::READONLY.bits() | Self::DISABLED.bits();
    }
}

/// Inline `display` style of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Display {
    /// No inline style; the stylesheet decides.
    #[default]
    Unset,
    Block,
    Hidden,
}

impl Display {
    pub const fn css(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Block => "block",
            Self::Hidden => "none",
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Kinds of element the member page is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    Container,
    Label,
    Input,
    Select,
    SelectOption,
    TextArea,
    Button,
}

impl ControlKind {
    /// Controls swept when the form is unlocked.
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Input | Self::Select | Self::TextArea)
    }
}

/// Editability mode of the whole form. Only ever moves from `Locked` to `Unlocked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    Locked,
    Unlocked,
}
