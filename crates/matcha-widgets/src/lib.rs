//! Widgets for the **matcha** TUI kit.
//!
//! Every widget in this crate implements [`matcha_core::Component`], so it
//! can be embedded inside any [`matcha_core::Model`] and composed freely
//! within [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`autocomplete`] | Combo box: text field with a filtered, floating dropdown |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`callout`] | Anchored floating-panel positioning and rendering |
//! | [`runeutil`] | Unicode-aware string width and truncation utilities |
//! | [`text_edit`] | Single-line edit buffer backing the combo box field |

pub mod autocomplete;
pub mod callout;
pub mod runeutil;
pub mod text_edit;

pub use autocomplete::{AutoComplete, ComboStyle, Hit, Keyed, Labeled};
pub use text_edit::EditState;
