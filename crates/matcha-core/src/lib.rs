//! Core runtime for the **matcha** widget kit.
//!
//! `matcha-core` provides the traits, types, and runtime that power matcha
//! applications. The design follows the [Elm Architecture]: your program is
//! expressed as a pure **init -> update -> view** cycle, with terminal input
//! translated to messages through [`Model::on_event`] and side effects pushed
//! to the edges through [`Command`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / on_event / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect to be executed by the runtime |
//! | [`WidgetId`] | Per-instance id namespace for focus-containment checks |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] without a terminal |
//!
//! # Architecture
//!
//! 1. **init** — [`Model::init`] creates the initial state and may return a
//!    [`Command`] to kick off early work.
//! 2. **view** — the runtime calls [`Model::view`] to render the current
//!    state to a [`ratatui::Frame`].
//! 3. **event** — terminal events (keys, mouse clicks, resizes) are passed
//!    to [`Model::on_event`], which maps each one to a message or discards
//!    it. Events are handled strictly in delivery order, on a single task.
//! 4. **update** — [`Model::update`] receives a message, mutates state, and
//!    optionally returns a [`Command`] for further side effects.
//! 5. **repeat** — steps 2-4 repeat until the program exits.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod id;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use id::WidgetId;
pub use model::Model;
pub use runtime::{log_to_file, OutputTarget, Program, ProgramError, ProgramOptions};

/// Run a matcha application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
