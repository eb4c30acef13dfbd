use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` is nearly identical to [`Model`](crate::Model) but with one key
/// difference: its [`view`](Component::view) method receives an `area: Rect`
/// parameter, making components composable within layouts. A parent model
/// decides *where* each child renders by passing it a sub-region of the frame.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// use [`Command::map`] to translate commands:
///
/// ```rust,ignore
/// enum AppMsg { Combo(autocomplete::Message<Item>) }
///
/// fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///     match msg {
///         AppMsg::Combo(m) => self.combo.update(m).map(AppMsg::Combo),
///     }
/// }
/// ```
///
/// Components that emit events (selection changed, search text typed) do so
/// by returning [`Command::message`] with event variants of their own message
/// type; the parent observes them on the next update cycle.
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle,
    /// except for floating overlays (callouts) that are explicitly allowed to
    /// escape their anchor's bounds.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// This is a hint for input routing. A parent can query `focused()` to
    /// decide which child should receive keyboard events. The default
    /// implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
