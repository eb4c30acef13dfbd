//! Combo-box input: a text field with a filtered, floating dropdown of
//! selectable items.
//!
//! The parent supplies a list of generic items. Clicking the field opens the
//! callout with the (possibly filtered) list; typing filters it further and
//! emits a search notification on every edit; clicking a row commits the
//! selection. Focus leaving the widget's id namespace closes the callout and
//! reconciles any half-typed text against the committed selection.
//!
//! Interaction is click-driven: the widget consumes semantic input messages
//! ([`Message::FieldClicked`], [`Message::ItemClicked`], ...) which the host
//! produces from raw mouse events via [`AutoComplete::hit_test`]. Outbound
//! events ([`Message::Changed`], [`Message::Searched`], the callout
//! lifecycle notifications) are emitted as [`Command::message`] for the
//! parent to observe.
//!
//! # Example
//!
//! ```ignore
//! use matcha_widgets::autocomplete::AutoComplete;
//!
//! let combo = AutoComplete::new(items)
//!     .with_item_keys()
//!     .with_no_options_text("Nothing matches");
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use matcha_core::{Command, Component, WidgetId};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::callout;
use crate::runeutil::truncate_to_width;
use crate::text_edit::EditState;

/// Items that carry their own display text.
///
/// Required only by the plain [`AutoComplete::new`] constructor; callers
/// supplying a projection via [`AutoComplete::with_text_fn`] or
/// [`AutoComplete::on_get_text`] need not implement it.
pub trait Labeled {
    /// The item's display text.
    fn text(&self) -> &str;
}

/// Items that carry a stable key.
///
/// Required only by [`AutoComplete::with_item_keys`]. Without a key source
/// the widget falls back to the item's index within the filtered view, which
/// is stable only because the view preserves source order and is recomputed
/// deterministically — hosts that reorder their collection between renders
/// should provide real keys.
pub trait Keyed {
    /// The item's stable key.
    fn key(&self) -> &str;
}

/// Messages for the combo box.
///
/// The first group are inputs the host feeds in (translated from mouse and
/// key events); the second group are events the widget emits back through
/// [`Command::message`]. Emitted variants are ignored when fed back to
/// [`AutoComplete::update`], so parents can route the whole enum untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<T> {
    /// The text field was clicked.
    FieldClicked,
    /// A key press routed to the text field.
    KeyPress(KeyEvent),
    /// A dropdown row was clicked (index into the current filtered view).
    ItemClicked(usize),
    /// The empty-state affordance was clicked.
    NoOptionsClicked,
    /// Focus moved to the element with the given id; `None` means focus left
    /// every identifiable element. Ids inside this widget's namespace are
    /// ignored (focus is still "inside"), anything else blurs the widget.
    FocusMoved(Option<String>),

    /// Emitted on every buffer-changing keystroke, with the raw new value.
    Searched(String),
    /// Emitted when the committed selection changes: a different row was
    /// clicked, the empty-state was clicked (`None`), or a blur discarded
    /// unreconciled typed text (`None`).
    Changed(Option<T>),
    /// Emitted when the callout is attached (opened).
    CalloutMounted,
    /// Emitted when the callout has been (re)positioned.
    CalloutPositioned,
    /// Emitted when the callout is dismissed (closed on any path).
    CalloutDismissed,
}

/// What a screen position inside the widget resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// The text field row.
    Field,
    /// A dropdown row (index into the current filtered view).
    Option(usize),
    /// The empty-state affordance.
    NoOptions,
    /// The footer area inside the callout.
    Footer,
    /// Callout chrome (border cells, space below the rows).
    Callout,
}

/// Style configuration for the combo box.
///
/// Injected at construction so the widget renders the same under tests and
/// under any host theme; there is no ambient theme lookup.
#[derive(Debug, Clone)]
pub struct ComboStyle {
    /// Style for the field text.
    pub field: Style,
    /// Style for the dropdown-indicator chevron.
    pub chevron: Style,
    /// Style for the cursor cell while typing.
    pub cursor: Style,
    /// Style for dropdown rows.
    pub item: Style,
    /// Style for the empty-state text.
    pub no_options: Style,
    /// Style for the footer content.
    pub footer: Style,
    /// Border/container for the callout. `None` renders a borderless panel.
    pub callout_block: Option<Block<'static>>,
}

impl Default for ComboStyle {
    fn default() -> Self {
        Self {
            field: Style::default(),
            chevron: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            item: Style::default().fg(Color::White),
            no_options: Style::default().fg(Color::DarkGray),
            footer: Style::default().fg(Color::DarkGray),
            callout_block: None,
        }
    }
}

type TextFn<T> = Box<dyn Fn(&T) -> String + Send>;
type KeyFn<T> = Box<dyn Fn(&T) -> String + Send>;
type RenderItemFn<T> = Box<dyn Fn(&T) -> Line<'static> + Send>;
type RenderFooterFn = Box<dyn Fn() -> Text<'static> + Send>;

/// Generic combo-box component.
///
/// `T` is the item type; the widget never mutates the host's items, it only
/// computes a filtered index view over them. Interaction state (callout
/// visibility, live search text, committed selection) is owned exclusively
/// by the instance.
pub struct AutoComplete<T> {
    id: WidgetId,
    items: Vec<T>,
    editor: EditState,
    typing: bool,
    callout_visible: bool,
    selected_item: Option<T>,
    selected_item_text: Option<String>,
    no_options_text: String,
    use_filter: bool,
    max_visible: usize,
    focused: bool,
    style: ComboStyle,
    get_text: TextFn<T>,
    get_key: Option<KeyFn<T>>,
    render_item: Option<RenderItemFn<T>>,
    render_footer: Option<RenderFooterFn>,
}

impl<T: Labeled> AutoComplete<T> {
    /// Create a combo box over `items`, projecting display text through
    /// [`Labeled::text`].
    pub fn new(items: Vec<T>) -> Self {
        Self::with_text_fn(items, |item: &T| item.text().to_string())
    }
}

impl<T> AutoComplete<T> {
    /// Create a combo box over `items` with an explicit text projection.
    ///
    /// Use this constructor when `T` does not implement [`Labeled`].
    pub fn with_text_fn(items: Vec<T>, get_text: impl Fn(&T) -> String + Send + 'static) -> Self {
        Self {
            id: WidgetId::next(),
            items,
            editor: EditState::new(),
            typing: false,
            callout_visible: false,
            selected_item: None,
            selected_item_text: None,
            no_options_text: "No options".to_string(),
            use_filter: true,
            max_visible: 8,
            focused: false,
            style: ComboStyle::default(),
            get_text: Box::new(get_text),
            get_key: None,
            render_item: None,
            render_footer: None,
        }
    }

    /// Set the initial committed selection.
    pub fn with_default_value(mut self, item: T) -> Self {
        self.selected_item_text = Some((self.get_text)(&item));
        self.selected_item = Some(item);
        self
    }

    /// Override the text projection.
    pub fn on_get_text(mut self, get_text: impl Fn(&T) -> String + Send + 'static) -> Self {
        // Re-project an existing default selection so displayed text follows
        // the new projection regardless of builder call order.
        if let Some(ref item) = self.selected_item {
            self.selected_item_text = Some(get_text(item));
        }
        self.get_text = Box::new(get_text);
        self
    }

    /// Provide stable per-item keys for row element ids.
    pub fn with_keys(mut self, get_key: impl Fn(&T) -> String + Send + 'static) -> Self {
        self.get_key = Some(Box::new(get_key));
        self
    }

    /// Use [`Keyed::key`] as the key source.
    pub fn with_item_keys(self) -> Self
    where
        T: Keyed,
    {
        self.with_keys(|item: &T| item.key().to_string())
    }

    /// Custom row rendering. The default renders the projected text.
    pub fn on_render_item(mut self, f: impl Fn(&T) -> Line<'static> + Send + 'static) -> Self {
        self.render_item = Some(Box::new(f));
        self
    }

    /// Optional trailing callout content (e.g. a status line), rendered
    /// after the rows or the empty-state while the callout is open.
    pub fn on_render_list_footer(mut self, f: impl Fn() -> Text<'static> + Send + 'static) -> Self {
        self.render_footer = Some(Box::new(f));
        self
    }

    /// Text shown when the filtered view is empty (default "No options").
    pub fn with_no_options_text(mut self, text: impl Into<String>) -> Self {
        self.no_options_text = text.into();
        self
    }

    /// Enable or disable filtering (default enabled). When disabled the full
    /// item list is always shown regardless of typed text.
    pub fn with_filter(mut self, use_filter: bool) -> Self {
        self.use_filter = use_filter;
        self
    }

    /// Maximum number of visible dropdown rows (default 8).
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: ComboStyle) -> Self {
        self.style = style;
        self
    }

    // --- accessors ---

    /// The instance's id namespace.
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Element id of the text field.
    pub fn field_id(&self) -> String {
        self.id.element("textfield")
    }

    /// Element id of the callout panel.
    pub fn callout_id(&self) -> String {
        self.id.element("callout")
    }

    /// The value currently displayed in the field: the live search text if
    /// typing, else the committed selection's text, else empty.
    pub fn value(&self) -> String {
        if self.typing {
            self.editor.value()
        } else {
            self.selected_item_text.clone().unwrap_or_default()
        }
    }

    /// The live search text, if the user is actively typing.
    pub fn search_text(&self) -> Option<String> {
        self.typing.then(|| self.editor.value())
    }

    /// The committed selection.
    pub fn selected(&self) -> Option<&T> {
        self.selected_item.as_ref()
    }

    /// Whether the callout is currently open.
    pub fn is_callout_visible(&self) -> bool {
        self.callout_visible
    }

    /// The full candidate set.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the candidate set (e.g. after the host resolved a search).
    /// The committed selection and any live typing are left untouched.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Indices into `items` making up the current filtered view.
    ///
    /// The view is the order-preserving subsequence whose projected text
    /// contains the filter text as a case-sensitive substring. The filter
    /// text is the live search text while typing, else the committed
    /// selection's text, so reopening a previously-selected widget
    /// re-filters by the selection. With filtering disabled, or no
    /// non-empty filter text, the view is the full list.
    pub fn filtered_indices(&self) -> Vec<usize> {
        let filter_text = if self.typing {
            Some(self.editor.value())
        } else {
            self.selected_item_text.clone()
        };
        match filter_text {
            Some(ref text) if self.use_filter && !text.is_empty() => self
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| (self.get_text)(item).contains(text.as_str()))
                .map(|(i, _)| i)
                .collect(),
            _ => (0..self.items.len()).collect(),
        }
    }

    /// Key for the row at `view_idx` in the filtered view: the item's own
    /// key if a key source was configured, else the view index.
    pub fn option_key(&self, view_idx: usize) -> String {
        let view = self.filtered_indices();
        match (view.get(view_idx), &self.get_key) {
            (Some(&item_idx), Some(get_key)) => get_key(&self.items[item_idx]),
            _ => view_idx.to_string(),
        }
    }

    /// Element id for a [`Hit`], used for focus-containment bookkeeping.
    pub fn element_id(&self, hit: &Hit) -> String {
        match hit {
            Hit::Field => self.field_id(),
            Hit::Option(view_idx) => self
                .id
                .element(&format!("options-{}", self.option_key(*view_idx))),
            Hit::NoOptions | Hit::Footer | Hit::Callout => self.callout_id(),
        }
    }

    /// The callout's rect when open: anchored directly below the field,
    /// matching its width, clamped to `bounds` (normally the frame area).
    pub fn callout_rect(&self, field_area: Rect, bounds: Rect) -> Option<Rect> {
        if !self.callout_visible {
            return None;
        }
        let area = callout::anchored_below(field_area, bounds, self.content_height());
        (area.height > 0 && area.width > 0).then_some(area)
    }

    fn content_height(&self) -> u16 {
        let view_len = self.filtered_indices().len();
        // An empty view still shows the one-row empty-state affordance.
        let rows = if view_len == 0 {
            1
        } else {
            view_len.min(self.max_visible)
        } as u16;
        let footer = match self.render_footer {
            Some(ref f) => f().height() as u16,
            None => 0,
        };
        let border = if self.style.callout_block.is_some() { 2 } else { 0 };
        rows + footer + border
    }

    /// Resolve a screen position to the widget element under it.
    ///
    /// `field_area` is the rect the host renders the widget into; `bounds`
    /// is the frame area the callout may float over. Returns `None` when the
    /// position is outside both the field and the open callout; the host
    /// should treat such a click as focus leaving the widget.
    pub fn hit_test(&self, field_area: Rect, bounds: Rect, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        let field = Rect {
            height: field_area.height.min(1),
            ..field_area
        };
        if field.contains(pos) {
            return Some(Hit::Field);
        }
        let area = self.callout_rect(field_area, bounds)?;
        if !area.contains(pos) {
            return None;
        }
        let inner = match self.style.callout_block {
            Some(ref block) => block.inner(area),
            None => area,
        };
        if !inner.contains(pos) {
            return Some(Hit::Callout);
        }
        let rel = (row - inner.y) as usize;
        let view_len = self.filtered_indices().len();
        if view_len == 0 {
            if rel == 0 {
                return Some(Hit::NoOptions);
            }
        } else if rel < view_len.min(self.max_visible) {
            return Some(Hit::Option(rel));
        }
        if self.render_footer.is_some() {
            return Some(Hit::Footer);
        }
        Some(Hit::Callout)
    }
}

// Interaction handlers. These return Command<Message<T>>, which carries the
// Send bound of the message type.
impl<T: Send + 'static> AutoComplete<T> {

    fn open_callout(&mut self, events: &mut Vec<Command<Message<T>>>) {
        if self.callout_visible {
            // Content changed while open: the panel re-positions only.
            events.push(Command::message(Message::CalloutPositioned));
        } else {
            self.callout_visible = true;
            events.push(Command::message(Message::CalloutMounted));
            events.push(Command::message(Message::CalloutPositioned));
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message<T>> {
        let was_typing = self.typing;
        if !was_typing {
            // Cursor movement without an edit never enters the typing state.
            if matches!(
                key.code,
                KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End
            ) {
                return Command::none();
            }
            // The first edit operates on the value the user sees.
            let displayed = self.selected_item_text.clone().unwrap_or_default();
            self.editor.set_value(&displayed);
        }
        let edited = match (key.code, key.modifiers) {
            (KeyCode::Backspace, _) => self.editor.delete_back(),
            (KeyCode::Delete, _) => self.editor.delete_forward(),
            (KeyCode::Left, _) => {
                self.editor.move_left();
                false
            }
            (KeyCode::Right, _) => {
                self.editor.move_right();
                false
            }
            (KeyCode::Home, _) => {
                self.editor.move_home();
                false
            }
            (KeyCode::End, _) => {
                self.editor.move_end();
                false
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.editor.insert_char(c)
            }
            _ => {
                if !was_typing {
                    self.editor.reset();
                }
                return Command::none();
            }
        };
        if !edited {
            if !was_typing {
                self.editor.reset();
            }
            return Command::none();
        }
        self.typing = true;
        self.focused = true;
        let value = self.editor.value();
        let mut events = vec![Command::message(Message::Searched(value))];
        self.open_callout(&mut events);
        Command::batch(events)
    }

    fn commit(&mut self, view_idx: usize) -> Command<Message<T>>
    where
        T: Clone + PartialEq,
    {
        let view = self.filtered_indices();
        let Some(&item_idx) = view.get(view_idx) else {
            return Command::none();
        };
        let item = self.items[item_idx].clone();
        let changed = self.selected_item.as_ref() != Some(&item);
        self.selected_item_text = Some((self.get_text)(&item));
        self.selected_item = Some(item.clone());
        self.typing = false;
        self.editor.reset();
        self.callout_visible = false;
        let mut events = vec![Command::message(Message::CalloutDismissed)];
        if changed {
            events.push(Command::message(Message::Changed(Some(item))));
        }
        Command::batch(events)
    }

    fn clear(&mut self) -> Command<Message<T>> {
        self.selected_item = None;
        self.selected_item_text = None;
        self.typing = false;
        self.editor.reset();
        self.callout_visible = false;
        // Fires even when nothing was selected: an explicit dismissal of the
        // empty view is always reported.
        Command::batch([
            Command::message(Message::CalloutDismissed),
            Command::message(Message::Changed(None)),
        ])
    }

    fn blur(&mut self) -> Command<Message<T>> {
        self.focused = false;
        let was_visible = self.callout_visible;
        self.callout_visible = false;
        let typed = self.typing.then(|| self.editor.value());
        self.typing = false;
        self.editor.reset();
        let mut events = Vec::new();
        if was_visible {
            events.push(Command::message(Message::CalloutDismissed));
        }
        if let Some(text) = typed {
            if Some(text.as_str()) != self.selected_item_text.as_deref() {
                // Unreconciled text: the user walked away mid-edit, so the
                // committed selection is discarded.
                self.selected_item = None;
                self.selected_item_text = None;
                events.push(Command::message(Message::Changed(None)));
            }
        }
        Command::batch(events)
    }
}

impl<T: Clone + PartialEq + Send + 'static> Component for AutoComplete<T> {
    type Message = Message<T>;

    fn update(&mut self, msg: Message<T>) -> Command<Message<T>> {
        match msg {
            Message::FieldClicked => {
                self.focused = true;
                if self.callout_visible {
                    return Command::none();
                }
                let mut events = Vec::new();
                self.open_callout(&mut events);
                Command::batch(events)
            }
            Message::KeyPress(key) => self.handle_key(key),
            Message::ItemClicked(view_idx) => self.commit(view_idx),
            Message::NoOptionsClicked => self.clear(),
            Message::FocusMoved(target) => {
                if let Some(ref id) = target {
                    if self.id.contains(id) {
                        // Focus is still inside the widget's namespace.
                        return Command::none();
                    }
                }
                self.blur()
            }
            Message::Searched(_)
            | Message::Changed(_)
            | Message::CalloutMounted
            | Message::CalloutPositioned
            | Message::CalloutDismissed => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width < 2 {
            return;
        }
        let field_area = Rect { height: 1, ..area };
        let text_area = Rect {
            width: field_area.width - 1,
            ..field_area
        };

        // Field: displayed value, cursor cell while typing, chevron at the
        // right edge.
        let mut spans = Vec::new();
        if self.typing {
            let chars = self.editor.chars();
            let cursor = self.editor.cursor();
            let before: String = chars[..cursor].iter().collect();
            if !before.is_empty() {
                spans.push(Span::styled(before, self.style.field));
            }
            if cursor < chars.len() {
                spans.push(Span::styled(chars[cursor].to_string(), self.style.cursor));
                let after: String = chars[cursor + 1..].iter().collect();
                if !after.is_empty() {
                    spans.push(Span::styled(after, self.style.field));
                }
            } else {
                spans.push(Span::styled(" ", self.style.cursor));
            }
        } else {
            spans.push(Span::styled(self.value(), self.style.field));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), text_area);
        let chevron_area = Rect {
            x: field_area.right() - 1,
            width: 1,
            ..field_area
        };
        frame.render_widget(
            Paragraph::new(Span::styled("▾", self.style.chevron)),
            chevron_area,
        );

        // Callout below the field.
        let Some(callout_area) = self.callout_rect(field_area, frame.area()) else {
            return;
        };
        let inner = callout::render_callout(frame, callout_area, self.style.callout_block.as_ref());
        if inner.height == 0 {
            return;
        }

        let view = self.filtered_indices();
        let mut y = inner.y;
        if view.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    self.no_options_text.clone(),
                    self.style.no_options,
                )),
                Rect {
                    y,
                    height: 1,
                    ..inner
                },
            );
            y += 1;
        } else {
            for &item_idx in view.iter().take(self.max_visible) {
                if y >= inner.bottom() {
                    return;
                }
                let item = &self.items[item_idx];
                let line = match self.render_item {
                    Some(ref f) => f(item),
                    None => Line::from(Span::styled(
                        truncate_to_width(&(self.get_text)(item), inner.width),
                        self.style.item,
                    )),
                };
                frame.render_widget(
                    Paragraph::new(line),
                    Rect {
                        y,
                        height: 1,
                        ..inner
                    },
                );
                y += 1;
            }
        }

        if let Some(ref f) = self.render_footer {
            let footer = f();
            let height = (footer.height() as u16).min(inner.bottom().saturating_sub(y));
            if height > 0 {
                frame.render_widget(
                    Paragraph::new(footer).style(self.style.footer),
                    Rect {
                        y,
                        height,
                        ..inner
                    },
                );
            }
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[derive(Debug, Clone, PartialEq)]
    struct Fruit {
        key: &'static str,
        text: &'static str,
    }

    impl Labeled for Fruit {
        fn text(&self) -> &str {
            self.text
        }
    }

    impl Keyed for Fruit {
        fn key(&self) -> &str {
            self.key
        }
    }

    fn fruit(key: &'static str, text: &'static str) -> Fruit {
        Fruit { key, text }
    }

    fn items() -> Vec<Fruit> {
        vec![fruit("0", "Foo"), fruit("1", "Bar")]
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_str(ac: &mut AutoComplete<Fruit>, s: &str) -> Vec<Message<Fruit>> {
        let mut events = Vec::new();
        for c in s.chars() {
            events.extend(
                ac.update(Message::KeyPress(key(KeyCode::Char(c))))
                    .into_messages(),
            );
        }
        events
    }

    fn searches(events: &[Message<Fruit>]) -> Vec<String> {
        events
            .iter()
            .filter_map(|m| match m {
                Message::Searched(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    fn changes(events: &[Message<Fruit>]) -> Vec<Option<Fruit>> {
        events
            .iter()
            .filter_map(|m| match m {
                Message::Changed(item) => Some(item.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn field_click_opens_browsing_without_search_text() {
        let mut ac = AutoComplete::new(items());
        let events = ac.update(Message::FieldClicked).into_messages();
        assert!(ac.is_callout_visible());
        assert_eq!(ac.search_text(), None);
        assert_eq!(
            events,
            vec![Message::CalloutMounted, Message::CalloutPositioned]
        );
        // Both rows visible: no filter text yet.
        assert_eq!(ac.filtered_indices(), vec![0, 1]);
    }

    #[test]
    fn field_click_while_open_is_noop() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        let cmd = ac.update(Message::FieldClicked);
        assert!(cmd.is_none());
        assert!(ac.is_callout_visible());
    }

    #[test]
    fn typing_filters_and_emits_search() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        let events = type_str(&mut ac, "Fo");
        assert_eq!(searches(&events), vec!["F", "Fo"]);
        assert_eq!(ac.search_text(), Some("Fo".to_string()));
        assert_eq!(ac.filtered_indices(), vec![0]);
    }

    #[test]
    fn typing_from_closed_opens_callout() {
        let mut ac = AutoComplete::new(items());
        let events = type_str(&mut ac, "F");
        assert!(ac.is_callout_visible());
        assert_eq!(
            events,
            vec![
                Message::Searched("F".into()),
                Message::CalloutMounted,
                Message::CalloutPositioned,
            ]
        );
    }

    #[test]
    fn filter_is_case_sensitive_substring() {
        let mut ac = AutoComplete::new(vec![
            fruit("0", "Foo"),
            fruit("1", "foo"),
            fruit("2", "ofoo"),
            fruit("3", "Bar"),
        ]);
        type_str(&mut ac, "foo");
        assert_eq!(ac.filtered_indices(), vec![1, 2]);
    }

    #[test]
    fn use_filter_false_always_shows_full_list() {
        let mut ac = AutoComplete::new(items()).with_filter(false);
        type_str(&mut ac, "zzz");
        assert_eq!(ac.filtered_indices(), vec![0, 1]);
    }

    #[test]
    fn reopening_after_selection_filters_by_selection_text() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        ac.update(Message::ItemClicked(0)); // select "Foo"
        ac.update(Message::FieldClicked);
        assert_eq!(ac.filtered_indices(), vec![0]);
    }

    #[test]
    fn item_click_commits_and_fires_changed_once() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        type_str(&mut ac, "Fo");
        let events = ac.update(Message::ItemClicked(0)).into_messages();
        assert_eq!(changes(&events), vec![Some(fruit("0", "Foo"))]);
        assert!(events.contains(&Message::CalloutDismissed));
        assert_eq!(ac.value(), "Foo");
        assert_eq!(ac.search_text(), None);
        assert!(!ac.is_callout_visible());
    }

    #[test]
    fn reselecting_same_item_does_not_fire_changed() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        ac.update(Message::ItemClicked(0));
        ac.update(Message::FieldClicked);
        // View is filtered to ["Foo"]; clicking it again reselects the same item.
        let events = ac.update(Message::ItemClicked(0)).into_messages();
        assert_eq!(changes(&events), Vec::<Option<Fruit>>::new());
        assert!(events.contains(&Message::CalloutDismissed));
        assert!(!ac.is_callout_visible());
    }

    #[test]
    fn item_click_out_of_range_is_noop() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        let cmd = ac.update(Message::ItemClicked(99));
        assert!(cmd.is_none());
    }

    #[test]
    fn no_options_click_always_clears_and_fires() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        ac.update(Message::ItemClicked(1)); // select "Bar"
        ac.update(Message::FieldClicked);
        type_str(&mut ac, "xyz");
        assert!(ac.filtered_indices().is_empty());
        let events = ac.update(Message::NoOptionsClicked).into_messages();
        assert_eq!(changes(&events), vec![None]);
        assert_eq!(ac.selected(), None);
        assert_eq!(ac.value(), "");
        assert!(!ac.is_callout_visible());
    }

    #[test]
    fn no_options_click_fires_even_without_prior_selection() {
        let mut ac = AutoComplete::new(items());
        type_str(&mut ac, "xyz");
        let events = ac.update(Message::NoOptionsClicked).into_messages();
        assert_eq!(changes(&events), vec![None]);
    }

    #[test]
    fn blur_with_unreconciled_text_clears_selection() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        ac.update(Message::ItemClicked(0)); // select "Foo"
        ac.update(Message::FieldClicked);
        type_str(&mut ac, "x"); // displayed "Foox" != "Foo"
        let events = ac.update(Message::FocusMoved(None)).into_messages();
        assert_eq!(changes(&events), vec![None]);
        assert_eq!(ac.selected(), None);
        assert_eq!(ac.search_text(), None);
        assert!(!ac.is_callout_visible());
    }

    #[test]
    fn blur_with_retyped_identical_text_preserves_selection() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        ac.update(Message::ItemClicked(0)); // select "Foo"
        ac.update(Message::FieldClicked);
        // Edit away and back: "Foo" -> "Fo" -> "Foo"
        ac.update(Message::KeyPress(key(KeyCode::Backspace)));
        type_str(&mut ac, "o");
        assert_eq!(ac.search_text(), Some("Foo".to_string()));
        let events = ac.update(Message::FocusMoved(None)).into_messages();
        assert_eq!(changes(&events), Vec::<Option<Fruit>>::new());
        assert_eq!(ac.selected(), Some(&fruit("0", "Foo")));
        assert_eq!(ac.value(), "Foo");
        assert!(!ac.is_callout_visible());
    }

    #[test]
    fn blur_without_typing_keeps_selection() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        ac.update(Message::ItemClicked(1));
        ac.update(Message::FieldClicked);
        let events = ac.update(Message::FocusMoved(None)).into_messages();
        assert_eq!(changes(&events), Vec::<Option<Fruit>>::new());
        assert_eq!(ac.selected(), Some(&fruit("1", "Bar")));
        assert!(!ac.is_callout_visible());
    }

    #[test]
    fn blur_inside_own_namespace_is_noop() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        type_str(&mut ac, "F");
        let target = ac.id().element("options-0");
        let cmd = ac.update(Message::FocusMoved(Some(target)));
        assert!(cmd.is_none());
        assert!(ac.is_callout_visible());
        assert_eq!(ac.search_text(), Some("F".to_string()));
    }

    #[test]
    fn blur_to_other_instance_namespace_closes() {
        let mut ac = AutoComplete::new(items());
        let other = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        let events = ac
            .update(Message::FocusMoved(Some(other.field_id())))
            .into_messages();
        assert!(!ac.is_callout_visible());
        assert!(events.contains(&Message::CalloutDismissed));
    }

    #[test]
    fn default_value_seeds_display_text() {
        let ac = AutoComplete::new(items()).with_default_value(fruit("1", "Bar"));
        assert_eq!(ac.value(), "Bar");
        assert_eq!(ac.selected(), Some(&fruit("1", "Bar")));
    }

    #[test]
    fn custom_projection_without_labeled() {
        #[derive(Debug, Clone, PartialEq)]
        struct Plain(u32);
        let mut ac = AutoComplete::with_text_fn(vec![Plain(10), Plain(25)], |p| p.0.to_string());
        let mut events = Vec::new();
        events.extend(
            ac.update(Message::KeyPress(key(KeyCode::Char('2'))))
                .into_messages(),
        );
        assert_eq!(ac.filtered_indices(), vec![1]);
        assert!(events.contains(&Message::Searched("2".into())));
    }

    #[test]
    fn option_keys_use_item_keys_when_configured() {
        let ac = AutoComplete::new(items()).with_item_keys();
        assert_eq!(ac.option_key(0), "0");
        assert_eq!(ac.option_key(1), "1");
        let id = ac.element_id(&Hit::Option(1));
        assert_eq!(id, ac.id().element("options-1"));
        assert!(ac.id().contains(&id));
    }

    #[test]
    fn option_keys_fall_back_to_view_index() {
        let mut ac = AutoComplete::new(items());
        type_str(&mut ac, "Bar");
        // "Bar" is the only row, at view index 0.
        assert_eq!(ac.option_key(0), "0");
    }

    #[test]
    fn cursor_movement_keys_do_not_start_typing() {
        let mut ac = AutoComplete::new(items()).with_default_value(fruit("0", "Foo"));
        ac.update(Message::FieldClicked);
        let cmd = ac.update(Message::KeyPress(key(KeyCode::Left)));
        assert!(cmd.is_none());
        assert_eq!(ac.search_text(), None);
    }

    #[test]
    fn backspace_on_empty_field_is_noop() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        let cmd = ac.update(Message::KeyPress(key(KeyCode::Backspace)));
        assert!(cmd.is_none());
        assert_eq!(ac.search_text(), None);
    }

    #[test]
    fn typing_while_open_repositions_without_remounting() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        let events = type_str(&mut ac, "B");
        assert_eq!(
            events,
            vec![Message::Searched("B".into()), Message::CalloutPositioned]
        );
    }

    #[test]
    fn full_scenario_click_type_select() {
        let mut ac = AutoComplete::new(items()).with_item_keys();
        let events = ac.update(Message::FieldClicked).into_messages();
        assert_eq!(
            events,
            vec![Message::CalloutMounted, Message::CalloutPositioned]
        );
        assert_eq!(ac.filtered_indices().len(), 2);

        let events = type_str(&mut ac, "Fo");
        assert_eq!(searches(&events), vec!["F", "Fo"]);
        assert_eq!(ac.filtered_indices(), vec![0]);

        let events = ac.update(Message::ItemClicked(0)).into_messages();
        assert_eq!(changes(&events), vec![Some(fruit("0", "Foo"))]);
        assert_eq!(ac.value(), "Foo");
        assert!(!ac.is_callout_visible());
    }

    #[test]
    fn callout_rect_sizes_to_view_and_footer() {
        let mut ac = AutoComplete::new(items()).on_render_list_footer(|| Text::from("status"));
        let field = Rect::new(2, 1, 40, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        assert_eq!(ac.callout_rect(field, bounds), None);
        ac.update(Message::FieldClicked);
        // 2 rows + 1 footer line.
        assert_eq!(ac.callout_rect(field, bounds), Some(Rect::new(2, 2, 40, 3)));
    }

    #[test]
    fn hit_test_resolves_field_rows_and_footer() {
        let mut ac = AutoComplete::new(items()).on_render_list_footer(|| Text::from("status"));
        let field = Rect::new(0, 0, 40, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        ac.update(Message::FieldClicked);

        assert_eq!(ac.hit_test(field, bounds, 5, 0), Some(Hit::Field));
        assert_eq!(ac.hit_test(field, bounds, 5, 1), Some(Hit::Option(0)));
        assert_eq!(ac.hit_test(field, bounds, 5, 2), Some(Hit::Option(1)));
        assert_eq!(ac.hit_test(field, bounds, 5, 3), Some(Hit::Footer));
        assert_eq!(ac.hit_test(field, bounds, 5, 4), None);
        assert_eq!(ac.hit_test(field, bounds, 60, 1), None);
    }

    #[test]
    fn hit_test_empty_view_resolves_no_options() {
        let mut ac = AutoComplete::new(items());
        let field = Rect::new(0, 0, 40, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        type_str(&mut ac, "xyz");
        assert_eq!(ac.hit_test(field, bounds, 3, 1), Some(Hit::NoOptions));
    }

    #[test]
    fn hit_test_closed_callout_misses() {
        let ac = AutoComplete::new(items());
        let field = Rect::new(0, 0, 40, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        assert_eq!(ac.hit_test(field, bounds, 3, 1), None);
    }

    #[test]
    fn set_items_keeps_selection() {
        let mut ac = AutoComplete::new(items());
        ac.update(Message::FieldClicked);
        ac.update(Message::ItemClicked(0));
        ac.set_items(vec![fruit("5", "Baz")]);
        assert_eq!(ac.selected(), Some(&fruit("0", "Foo")));
        assert_eq!(ac.value(), "Foo");
    }

    #[test]
    fn view_renders_field_and_open_callout() {
        use matcha_core::testing::TestProgram;
        use matcha_core::{Command as CoreCommand, Model};

        struct Harness {
            combo: AutoComplete<Fruit>,
        }
        enum HarnessMsg {
            Combo(Message<Fruit>),
        }
        impl Model for Harness {
            type Message = HarnessMsg;
            type Flags = ();
            fn init(_: ()) -> (Self, CoreCommand<HarnessMsg>) {
                (
                    Harness {
                        combo: AutoComplete::new(vec![fruit("0", "Foo"), fruit("1", "Bar")]),
                    },
                    CoreCommand::none(),
                )
            }
            fn update(&mut self, msg: HarnessMsg) -> CoreCommand<HarnessMsg> {
                match msg {
                    HarnessMsg::Combo(m) => self.combo.update(m).map(HarnessMsg::Combo),
                }
            }
            fn view(&self, frame: &mut Frame) {
                let area = Rect {
                    height: 1,
                    ..frame.area()
                };
                self.combo.view(frame, area);
            }
        }

        let mut prog = TestProgram::<Harness>::new(());
        prog.send(HarnessMsg::Combo(Message::FieldClicked));
        let out = prog.render_string(20, 4);
        assert!(out.contains("▾"));
        assert!(out.contains("Foo"));
        assert!(out.contains("Bar"));

        prog.send(HarnessMsg::Combo(Message::ItemClicked(0)));
        let out = prog.render_string(20, 4);
        assert!(out.contains("Foo"));
        assert!(!out.contains("Bar"));
    }

    #[test]
    fn view_renders_no_options_text() {
        use matcha_core::testing::TestProgram;
        use matcha_core::{Command as CoreCommand, Model};

        struct Harness {
            combo: AutoComplete<Fruit>,
        }
        enum HarnessMsg {
            Combo(Message<Fruit>),
        }
        impl Model for Harness {
            type Message = HarnessMsg;
            type Flags = ();
            fn init(_: ()) -> (Self, CoreCommand<HarnessMsg>) {
                (
                    Harness {
                        combo: AutoComplete::new(vec![fruit("0", "Foo")]),
                    },
                    CoreCommand::none(),
                )
            }
            fn update(&mut self, msg: HarnessMsg) -> CoreCommand<HarnessMsg> {
                match msg {
                    HarnessMsg::Combo(m) => self.combo.update(m).map(HarnessMsg::Combo),
                }
            }
            fn view(&self, frame: &mut Frame) {
                let area = Rect {
                    height: 1,
                    ..frame.area()
                };
                self.combo.view(frame, area);
            }
        }

        let mut prog = TestProgram::<Harness>::new(());
        for c in "zzz".chars() {
            prog.send(HarnessMsg::Combo(Message::KeyPress(key(KeyCode::Char(c)))));
        }
        let out = prog.render_string(30, 4);
        assert!(out.contains("No options"));
    }
}
