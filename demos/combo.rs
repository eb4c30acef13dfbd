//! # Combo Box Demo
//!
//! A combo box over a small product list, with a custom two-column row
//! renderer and a footer line inside the dropdown that tracks the callout's
//! own width. The status area below the field shows the search and change
//! events as the widget emits them.
//!
//! Run with: `cargo run --example combo`

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

use matcha::crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use matcha::ratatui::layout::Rect;
use matcha::ratatui::style::{Color, Modifier, Style};
use matcha::ratatui::text::{Line, Span, Text};
use matcha::ratatui::widgets::{Block, BorderType, Paragraph};
use matcha::ratatui::Frame;
use matcha::widgets::autocomplete::{self, AutoComplete, ComboStyle, Hit, Keyed, Labeled};
use matcha::{Command, Component, Model, TerminalEvent};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    key: &'static str,
    text: &'static str,
    count: u32,
}

impl Labeled for Item {
    fn text(&self) -> &str {
        self.text
    }
}

impl Keyed for Item {
    fn key(&self) -> &str {
        self.key
    }
}

fn catalog() -> Vec<Item> {
    [
        ("item0", "Foo", 11123),
        ("item1", "Bar", 2344),
        ("item2", "Hoge", 341),
        ("item3", "Fuga", 123),
        ("item4", "This is a pretty long option label", 64),
        ("item5", "AAAAA", 1),
        ("item6", "BBBBB", 0),
        ("item7", "CCCCC", 0),
        ("item8", "DDDDD", 0),
        ("item9", "EEEEE", 0),
    ]
    .into_iter()
    .map(|(key, text, count)| Item { key, text, count })
    .collect()
}

struct ComboDemo {
    combo: AutoComplete<Item>,
    term: (u16, u16),
    last_search: Option<String>,
    last_change: Option<Option<String>>,
    // Shared with the footer closure so the footer can display the live
    // callout width, updated on every mount/position notification.
    callout_width: Arc<AtomicU16>,
}

#[derive(Debug, Clone)]
enum Msg {
    Combo(autocomplete::Message<Item>),
    TermSize(u16, u16),
    Quit,
}

fn field_area(term: (u16, u16)) -> Rect {
    Rect::new(2, 2, term.0.saturating_sub(4).min(44), 1)
}

fn bounds(term: (u16, u16)) -> Rect {
    Rect::new(0, 0, term.0, term.1)
}

impl Model for ComboDemo {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let callout_width = Arc::new(AtomicU16::new(0));
        let footer_width = callout_width.clone();
        let combo = AutoComplete::new(catalog())
            .with_item_keys()
            .on_render_item(|item: &Item| {
                Line::from(vec![
                    Span::raw(format!("{:<36}", item.text)),
                    Span::styled(
                        format!("{:>5}", item.count),
                        Style::default().fg(Color::Yellow),
                    ),
                ])
            })
            .on_render_list_footer(move || {
                Text::from(Line::from(Span::styled(
                    format!("callout width: {}", footer_width.load(Ordering::Relaxed)),
                    Style::default().fg(Color::DarkGray),
                )))
            })
            .with_style(ComboStyle {
                callout_block: Some(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray)),
                ),
                ..ComboStyle::default()
            });
        (
            ComboDemo {
                combo,
                term: (80, 24),
                last_search: None,
                last_change: None,
                callout_width,
            },
            Command::window_size(Msg::TermSize),
        )
    }

    fn on_event(&self, event: &TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                _ => Some(Msg::Combo(autocomplete::Message::KeyPress(*key))),
            },
            TerminalEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let hit = self.combo.hit_test(
                    field_area(self.term),
                    bounds(self.term),
                    mouse.column,
                    mouse.row,
                );
                Some(match hit {
                    Some(Hit::Field) => Msg::Combo(autocomplete::Message::FieldClicked),
                    Some(Hit::Option(idx)) => Msg::Combo(autocomplete::Message::ItemClicked(idx)),
                    Some(Hit::NoOptions) => Msg::Combo(autocomplete::Message::NoOptionsClicked),
                    // Clicks on callout chrome stay inside the widget's id
                    // namespace, so they do not blur it.
                    Some(ref h @ (Hit::Footer | Hit::Callout)) => Msg::Combo(
                        autocomplete::Message::FocusMoved(Some(self.combo.element_id(h))),
                    ),
                    None => Msg::Combo(autocomplete::Message::FocusMoved(None)),
                })
            }
            TerminalEvent::Resize(w, h) => Some(Msg::TermSize(*w, *h)),
            _ => None,
        }
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Combo(m) => {
                match m {
                    autocomplete::Message::Searched(ref text) => {
                        self.last_search = Some(text.clone());
                    }
                    autocomplete::Message::Changed(ref item) => {
                        self.last_change = Some(item.as_ref().map(|i| i.text.to_string()));
                    }
                    autocomplete::Message::CalloutMounted
                    | autocomplete::Message::CalloutPositioned => {
                        let width = self
                            .combo
                            .callout_rect(field_area(self.term), bounds(self.term))
                            .map_or(0, |r| r.width);
                        self.callout_width.store(width, Ordering::Relaxed);
                    }
                    _ => {}
                }
                self.combo.update(m).map(Msg::Combo)
            }
            Msg::TermSize(w, h) => {
                self.term = (w, h);
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let title = Paragraph::new(Line::from(Span::styled(
            "Product Picker",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, Rect { height: 1, ..area });

        // Status lines, painted before the combo so the open callout can
        // float over them.
        let status_y = area.y + 4;
        if status_y < area.bottom() {
            let mut lines = Vec::new();
            if let Some(ref s) = self.last_search {
                lines.push(Line::from(format!("searched: {s:?}")));
            }
            match self.last_change {
                Some(Some(ref text)) => lines.push(Line::from(format!("changed: {text}"))),
                Some(None) => lines.push(Line::from("changed: (cleared)".to_string())),
                None => {}
            }
            if let Some(item) = self.combo.selected() {
                lines.push(Line::from(vec![
                    Span::raw("selected: "),
                    Span::styled(
                        format!("{} ({})", item.text, item.count),
                        Style::default().fg(Color::Green),
                    ),
                ]));
            }
            frame.render_widget(
                Paragraph::new(lines),
                Rect {
                    y: status_y,
                    height: area.bottom() - status_y,
                    ..area
                },
            );
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Click", Style::default().fg(Color::DarkGray)),
            Span::raw(" to open  "),
            Span::styled("Type", Style::default().fg(Color::DarkGray)),
            Span::raw(" to filter  "),
            Span::styled("Click a row", Style::default().fg(Color::DarkGray)),
            Span::raw(" to select  "),
            Span::styled("Esc", Style::default().fg(Color::DarkGray)),
            Span::raw(" quit"),
        ]));
        frame.render_widget(
            help,
            Rect {
                y: area.bottom().saturating_sub(1),
                height: 1,
                ..area
            },
        );

        // The combo renders last: its callout overlays whatever is below.
        self.combo.view(frame, field_area(self.term));
    }
}

#[matcha::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    matcha::run::<ComboDemo>(()).await?;
    Ok(())
}
