//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight: layered config loading and the input-mask engine.
//!
//! ## Input masks
//! ```rust
//! use sigi_kernel::mask::MaskPattern;
//!
//! let phone = MaskPattern::parse("(00) 00000-0000").unwrap();
//! assert_eq!(phone.apply("11999998888"), "(11) 99999-8888");
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use sigi_kernel::config::load_config;
//! use sigi_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("sigi.toml"))?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod mask;

pub use sigi_domain as domain;
