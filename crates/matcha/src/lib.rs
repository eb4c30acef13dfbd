//! **matcha** -- an Elm-style combo-box / autocomplete widget kit for
//! [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! matcha = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`matcha_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`WidgetId`], [`Program`],
//!   [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`matcha_widgets`]
//!   (the [`AutoComplete`](widgets::AutoComplete) combo box and its
//!   supporting utilities).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use matcha::{Command, Model};
//! use ratatui::widgets::Paragraph;
//! use ratatui::Frame;
//!
//! struct Hello;
//! enum Msg {}
//!
//! impl Model for Hello {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         (Hello, Command::none())
//!     }
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {}
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         frame.render_widget(Paragraph::new("Hello, matcha!"), frame.area());
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     matcha::run::<Hello>(()).await.unwrap();
//! }
//! ```

pub use matcha_core::*;
pub mod widgets {
    pub use matcha_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
