//! # Showcase
//!
//! Four pickers on one screen:
//!
//! 1. countries with string values and default styling;
//! 2. numbers with restyled rows, dividers and a short scroll window;
//! 3. users (record values) with a key function and a custom input renderer;
//! 4. a disabled picker with a preset value.
//!
//! Tab / Shift+Tab move focus, F2 mounts or unmounts the user picker, Esc on
//! an unfocused screen or Ctrl+C quits. The mouse works too.
//!
//! Logs go to `search-select.log` (override with `SEARCH_SELECT_LOG`);
//! filter with `RUST_LOG`, e.g. `RUST_LOG=search_select=debug`.
//!
//! Run with: `cargo run --example showcase`

use std::fs::File;

use search_select::autocomplete::Message;
use search_select::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use search_select::input::InputProps;
use search_select::ratatui::layout::{Constraint, Layout, Rect};
use search_select::ratatui::style::{Color, Modifier, Style};
use search_select::ratatui::text::{Line, Span};
use search_select::ratatui::widgets::{Borders, Paragraph};
use search_select::ratatui::Frame;
use search_select::{
    terminal_events, Autocomplete, Command, Component, Declaration, Model, OptionKey, Part,
    ProgramOptions, SelectOption, StyleOverrides, Subscription, TerminalEvent,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const COUNTRIES: &[(&str, &str)] = &[
    ("us", "United States"),
    ("ca", "Canada"),
    ("mx", "Mexico"),
    ("gb", "United Kingdom"),
    ("fr", "France"),
    ("de", "Germany"),
    ("it", "Italy"),
    ("es", "Spain"),
];

const NUMBERS: &[(u32, &str)] = &[
    (1, "Option One"),
    (2, "Option Two"),
    (3, "Option Three"),
    (4, "Option Four"),
    (5, "Option Five"),
];

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    email: &'static str,
    role: &'static str,
}

fn user_options() -> Vec<SelectOption<User>> {
    [
        (1, "john@example.com", "admin", "John Doe (Admin)"),
        (2, "jane@example.com", "user", "Jane Smith (User)"),
        (3, "bob@example.com", "moderator", "Bob Johnson (Moderator)"),
        (4, "alice@example.com", "user", "Alice Williams (User)"),
    ]
    .into_iter()
    .map(|(id, email, role, label)| SelectOption::new(User { id, email, role }, label))
    .collect()
}

/// Search field for the user picker: an `@` prompt inside a titled box.
fn user_input(props: &InputProps<'_, User>, frame: &mut Frame, area: Rect) {
    let block = props.style.block().title(" user ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prompt = Span::styled("@ ", Style::default().fg(Color::Magenta));
    let text = if props.value.is_empty() {
        Span::styled(props.placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(props.value.to_string(), props.style.style)
    };
    let mut spans = vec![prompt, text];
    if props.focused {
        spans.push(Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)));
    }
    let width = inner.width.saturating_sub(props.trailing);
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect {
            width,
            height: 1,
            ..inner
        },
    );
}

const SLOTS: usize = 3;

struct Showcase {
    country: Autocomplete<String>,
    number: Autocomplete<u32>,
    user: Autocomplete<User>,
    locked: Autocomplete<String>,
    user_mounted: bool,
    focus: usize,
    status: String,
}

#[derive(Debug)]
enum Msg {
    Key(KeyEvent),
    Paste(String),
    Country(Message<String>),
    Number(Message<u32>),
    User(Message<User>),
    Locked(Message<String>),
}

impl Showcase {
    /// Slot of the picker that currently holds focus.
    fn focused_slot(&self) -> Option<usize> {
        if self.country.focused() {
            Some(0)
        } else if self.number.focused() {
            Some(1)
        } else if self.user_mounted && self.user.focused() {
            Some(2)
        } else {
            None
        }
    }

    fn set_slot_focus(&mut self, slot: usize, focused: bool) {
        match slot {
            0 => self.country.set_focused(focused),
            1 => self.number.set_focused(focused),
            _ => self.user.set_focused(focused),
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let current = self.focused_slot().unwrap_or(self.focus);
        self.set_slot_focus(current, false);
        let mut next = current;
        loop {
            next = if forward {
                (next + 1) % SLOTS
            } else {
                (next + SLOTS - 1) % SLOTS
            };
            if next != 2 || self.user_mounted {
                break;
            }
        }
        self.focus = next;
        self.set_slot_focus(next, true);
    }

    fn route(&mut self, routed: RoutedKey) -> Command<Msg> {
        match self.focused_slot() {
            Some(0) => self.country.update(routed.into_message()).map(Msg::Country),
            Some(1) => self.number.update(routed.into_message()).map(Msg::Number),
            Some(_) => self.user.update(routed.into_message()).map(Msg::User),
            None => Command::none(),
        }
    }
}

/// A key or paste on its way to whichever picker has focus.
enum RoutedKey {
    Key(KeyEvent),
    Paste(String),
}

impl RoutedKey {
    fn into_message<T>(self) -> Message<T> {
        match self {
            RoutedKey::Key(key) => Message::KeyPress(key),
            RoutedKey::Paste(text) => Message::Paste(text),
        }
    }
}

impl Model for Showcase {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut country = Autocomplete::new(
            COUNTRIES
                .iter()
                .map(|(code, name)| SelectOption::new(code.to_string(), *name))
                .collect(),
        )
        .with_placeholder("Search country...")
        .with_on_select(|option| tracing::info!(?option, "country selected"));
        country.focus();

        let number_styles = StyleOverrides::new()
            .with(Part::Option, Declaration::new().borders(Borders::BOTTOM))
            .with(
                Part::OptionHighlighted,
                Declaration::new().bg(Color::Blue).fg(Color::White),
            )
            .with(
                Part::OptionSelected,
                Declaration::new().fg(Color::Green).add_modifier(Modifier::BOLD),
            );
        let number = Autocomplete::new(
            NUMBERS
                .iter()
                .map(|(n, label)| SelectOption::new(*n, *label))
                .collect(),
        )
        .with_placeholder("Search option...")
        .with_styles(number_styles)
        .with_max_visible(6)
        .with_on_select(|option| tracing::info!(value = ?option.map(|o| o.value), "number selected"));

        let user = Autocomplete::new(user_options())
            .with_placeholder("Search user...")
            .with_key_fn(|option| OptionKey::from(option.value.id))
            .with_render_input(user_input)
            .with_no_results_text("No such user")
            .with_on_select(|option| {
                tracing::info!(email = option.map(|o| o.value.email), "user selected")
            });

        let locked = Autocomplete::new(vec![SelectOption::simple("Read only")])
            .with_value(Some(SelectOption::simple("Read only")))
            .with_disabled(true);

        let app = Showcase {
            country,
            number,
            user,
            locked,
            user_mounted: true,
            focus: 0,
            status: "Nothing selected yet".to_string(),
        };
        (app, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Command::quit(),
                (KeyCode::Tab, _) => {
                    self.cycle_focus(true);
                    Command::none()
                }
                (KeyCode::BackTab, _) => {
                    self.cycle_focus(false);
                    Command::none()
                }
                (KeyCode::F(2), _) => {
                    self.user_mounted = !self.user_mounted;
                    if !self.user_mounted {
                        self.user.blur();
                    }
                    tracing::info!(mounted = self.user_mounted, "user picker toggled");
                    Command::none()
                }
                (KeyCode::Esc, _) if self.focused_slot().is_none() => Command::quit(),
                _ => self.route(RoutedKey::Key(key)),
            },
            Msg::Paste(text) => self.route(RoutedKey::Paste(text)),
            Msg::Country(Message::SelectionChanged(option)) => {
                self.status = match option {
                    Some(o) => format!("Country: {} (code: {})", o.label, o.value),
                    None => "Country cleared".to_string(),
                };
                Command::none()
            }
            Msg::Number(Message::SelectionChanged(option)) => {
                self.status = match option {
                    Some(o) => format!("Number: {} (ID: {})", o.label, o.value),
                    None => "Number cleared".to_string(),
                };
                Command::none()
            }
            Msg::User(Message::SelectionChanged(option)) => {
                self.status = match option {
                    Some(o) => format!("User: {} <{}> role {}", o.label, o.value.email, o.value.role),
                    None => "User cleared".to_string(),
                };
                Command::none()
            }
            Msg::Country(m) => self.country.update(m).map(Msg::Country),
            Msg::Number(m) => self.number.update(m).map(Msg::Number),
            Msg::User(m) => self.user.update(m).map(Msg::User),
            Msg::Locked(m) => self.locked.update(m).map(Msg::Locked),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [title_area, body, status_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(Span::styled(
                "search-select showcase",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            title_area,
        );

        let rows: [Rect; 4] = Layout::vertical([Constraint::Length(4); 4]).areas(body);
        let labels = [
            "Countries (string values)",
            "Numbers (styled rows)",
            if self.user_mounted {
                "Users (records, key fn, custom input)"
            } else {
                "Users (unmounted, F2 to show)"
            },
            "Disabled",
        ];
        let mut pickers = [Rect::default(); 4];
        for (i, row) in rows.iter().enumerate() {
            let [label, picker] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(*row);
            frame.render_widget(
                Paragraph::new(Span::styled(labels[i], Style::default().fg(Color::Gray))),
                label,
            );
            pickers[i] = picker;
        }

        // closed pickers first so an open dropdown lands on top
        for open_pass in [false, true] {
            if self.country.is_open() == open_pass {
                self.country.view(frame, pickers[0]);
            }
            if self.number.is_open() == open_pass {
                self.number.view(frame, pickers[1]);
            }
            if self.user_mounted && self.user.is_open() == open_pass {
                self.user.view(frame, pickers[2]);
            }
            if !open_pass {
                self.locked.view(frame, pickers[3]);
            }
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                self.status.as_str(),
                Style::default().fg(Color::Green),
            )),
            status_area,
        );

        let key = Style::default().fg(Color::DarkGray);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Tab", key),
                Span::raw(" next  "),
                Span::styled("Up/Down", key),
                Span::raw(" navigate  "),
                Span::styled("Enter", key),
                Span::raw(" select  "),
                Span::styled("F2", key),
                Span::raw(" mount/unmount users  "),
                Span::styled("Ctrl+C", key),
                Span::raw(" quit"),
            ])),
            help_area,
        );
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events(|event| match event {
            TerminalEvent::Paste(text) => Some(Msg::Paste(text)),
            other => other.key_press().map(Msg::Key),
        })];
        subs.extend(self.country.subscriptions().into_iter().map(|s| s.map(Msg::Country)));
        subs.extend(self.number.subscriptions().into_iter().map(|s| s.map(Msg::Number)));
        if self.user_mounted {
            subs.extend(self.user.subscriptions().into_iter().map(|s| s.map(Msg::User)));
        }
        subs.extend(self.locked.subscriptions().into_iter().map(|s| s.map(Msg::Locked)));
        subs
    }
}

/// Send logs to a file; stdout belongs to the terminal UI.
fn init_logging() -> std::io::Result<WorkerGuard> {
    let path = std::env::var("SEARCH_SELECT_LOG").unwrap_or_else(|_| "search-select.log".to_string());
    let file = File::create(&path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = init_logging()?;

    let options = ProgramOptions {
        mouse_capture: true,
        title: Some("search-select showcase".to_string()),
        ..ProgramOptions::default()
    };
    let app = search_select::run_with::<Showcase>((), options).await?;
    tracing::info!(status = %app.status, "showcase finished");
    Ok(())
}
