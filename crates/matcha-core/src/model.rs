use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// Every matcha application implements `Model`. The runtime drives a
/// continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] for early side effects (e.g. querying the window size).
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Terminal events (keys, mouse, resize) are translated to messages by
///    [`on_event`](Model::on_event).
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`] for further work.
/// 5. Steps 2--4 repeat until the program exits.
///
/// Event dispatch is single-threaded and cooperative: `on_event` and
/// `update` run on the event loop, in delivery order, and nothing in this
/// cycle blocks or suspends.
///
/// # Example
///
/// ```rust,ignore
/// use matcha_core::{Model, Command, TerminalEvent};
/// use ratatui::Frame;
/// use ratatui::widgets::Paragraph;
///
/// struct Counter {
///     count: i32,
/// }
///
/// #[derive(Debug)]
/// enum Msg {
///     Increment,
/// }
///
/// impl Model for Counter {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_flags: ()) -> (Self, Command<Msg>) {
///         (Counter { count: 0 }, Command::none())
///     }
///
///     fn on_event(&self, event: &TerminalEvent) -> Option<Msg> {
///         matches!(event, TerminalEvent::Key(_)).then_some(Msg::Increment)
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Increment => self.count += 1,
///         }
///         Command::none()
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         frame.render_widget(
///             Paragraph::new(format!("Count: {}", self.count)),
///             frame.area(),
///         );
///     }
/// }
/// ```
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    ///
    /// Every event that can affect the application state is represented as a
    /// variant of this type. Messages arrive from [`Model::on_event`], from
    /// [`Command::message`], or from async work completed via
    /// [`Command::perform`].
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Translate a terminal event into a message, or discard it.
    ///
    /// This is the input-routing seam: the model decides, based on its
    /// current state (focus, layout), which component a key or click
    /// belongs to. Return `None` to ignore the event. The default
    /// implementation ignores everything.
    fn on_event(&self, event: &TerminalEvent) -> Option<Self::Message> {
        let _ = event;
        None
    }

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// This method should be a pure function of `&self` — it reads the model
    /// state and draws widgets into the frame. The runtime calls `view` after
    /// every update and on the initial render.
    fn view(&self, frame: &mut Frame);
}
