//! # Domain Models
//!
//! Pure types shared by the member form crates (`serde`, `bitflags`, `strum` only).
//! Keep it lean: no I/O and no behavior beyond small helpers.

pub mod config;
pub mod constants;
pub mod controls;
pub mod mask;
pub mod member;
