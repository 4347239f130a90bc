//! The search field and the hook for replacing it.
//!
//! The widget never draws its field directly. It builds an [`InputProps`]
//! bundle and hands it to an [`InputRenderer`]: [`DefaultInput`] unless the
//! host configured its own. A custom renderer owns the look of the field; the
//! widget still draws the clear glyph and the arrow over the trailing columns
//! the props reserve for them.
//!
//! # Example
//!
//! ```rust,ignore
//! use search_select::input::InputProps;
//! use ratatui::{layout::Rect, text::Line, Frame};
//!
//! fn prompt_line(props: &InputProps<'_, String>, frame: &mut Frame, area: Rect) {
//!     let text = if props.value.is_empty() { props.placeholder } else { props.value };
//!     frame.render_widget(Line::from(format!("> {text}")), area);
//! }
//!
//! let picker = Autocomplete::new(options).with_render_input(prompt_line);
//! ```

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::marker::PhantomData;
use unicode_width::UnicodeWidthChar;

use crate::autocomplete::Message;
use crate::style::Declaration;

/// Field events a host-side input can feed back into the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Replace the whole search text.
    Changed(String),
    /// The field gained focus.
    Focus,
    /// The field lost focus.
    Blur,
    /// A key pressed inside the field.
    Key(KeyEvent),
}

/// Constructors for the messages a custom input sends back.
///
/// Renderers only draw; hosts that drive their own editing use these to
/// route events to the widget's `update`.
pub struct InputHandlers<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for InputHandlers<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for InputHandlers<T> {}

impl<T> Default for InputHandlers<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for InputHandlers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("InputHandlers")
    }
}

impl<T> InputHandlers<T> {
    pub fn change(&self, value: impl Into<String>) -> Message<T> {
        Message::Input(InputEvent::Changed(value.into()))
    }

    pub fn focus(&self) -> Message<T> {
        Message::Input(InputEvent::Focus)
    }

    pub fn blur(&self) -> Message<T> {
        Message::Input(InputEvent::Blur)
    }

    pub fn key(&self, key: KeyEvent) -> Message<T> {
        Message::Input(InputEvent::Key(key))
    }
}

/// Everything a renderer needs to draw the search field.
#[derive(Debug)]
pub struct InputProps<'a, T> {
    /// Current search text.
    pub value: &'a str,
    /// Cursor position as a character index into `value`.
    pub cursor: usize,
    pub placeholder: &'a str,
    pub disabled: bool,
    pub focused: bool,
    /// Input style with focus/disabled states already composed.
    pub style: &'a Declaration,
    /// Browser-style autocomplete hint; always `"off"`.
    pub autocomplete: &'static str,
    /// Columns at the right edge of the content row that the widget draws
    /// over (clear glyph and arrow).
    pub trailing: u16,
    pub handlers: InputHandlers<T>,
}

/// Draws the search field.
pub trait InputRenderer<T>: Send {
    fn render(&self, props: &InputProps<'_, T>, frame: &mut Frame, area: Rect);
}

impl<T, F> InputRenderer<T> for F
where
    F: Fn(&InputProps<'_, T>, &mut Frame, Rect) + Send,
{
    fn render(&self, props: &InputProps<'_, T>, frame: &mut Frame, area: Rect) {
        self(props, frame, area)
    }
}

/// The built-in field: a bordered line with a reversed-cell cursor that
/// scrolls horizontally to keep the cursor in view.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInput;

impl DefaultInput {
    fn placeholder_style(props_style: Style) -> Style {
        props_style.patch(Style::default().fg(Color::DarkGray))
    }

    fn cursor_style(props_style: Style) -> Style {
        props_style.add_modifier(Modifier::REVERSED)
    }
}

impl<T> InputRenderer<T> for DefaultInput {
    fn render(&self, props: &InputProps<'_, T>, frame: &mut Frame, area: Rect) {
        let block = props.style.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let available = inner.width.saturating_sub(props.trailing) as usize;
        if available == 0 || inner.height == 0 {
            return;
        }
        let text_area = Rect {
            width: available as u16,
            height: 1,
            ..inner
        };

        let text_style = props.style.style;
        let show_cursor = props.focused && !props.disabled;
        let mut spans = Vec::new();

        if props.value.is_empty() {
            if show_cursor {
                spans.push(Span::styled(" ", Self::cursor_style(text_style)));
            } else {
                spans.push(Span::styled(
                    props.placeholder.to_string(),
                    Self::placeholder_style(text_style),
                ));
            }
        } else {
            let chars: Vec<char> = props.value.chars().collect();
            let cursor = props.cursor.min(chars.len());
            let start = scroll_start(&chars, cursor, available);

            let mut used = 0;
            let mut end = start;
            while end < chars.len() {
                let w = chars[end].width().unwrap_or(0);
                if used + w > available {
                    break;
                }
                used += w;
                end += 1;
            }

            if show_cursor {
                let before: String = chars[start..cursor].iter().collect();
                if !before.is_empty() {
                    spans.push(Span::styled(before, text_style));
                }
                match chars.get(cursor) {
                    Some(c) if cursor < end => {
                        spans.push(Span::styled(c.to_string(), Self::cursor_style(text_style)));
                        let after: String = chars[cursor + 1..end].iter().collect();
                        if !after.is_empty() {
                            spans.push(Span::styled(after, text_style));
                        }
                    }
                    _ => spans.push(Span::styled(" ", Self::cursor_style(text_style))),
                }
            } else {
                let visible: String = chars[start..end].iter().collect();
                spans.push(Span::styled(visible, text_style));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), text_area);
    }
}

/// First character to draw so the cursor cell fits in `available` columns.
fn scroll_start(chars: &[char], cursor: usize, available: usize) -> usize {
    let width = |range: &[char]| -> usize { range.iter().map(|c| c.width().unwrap_or(0)).sum() };
    let mut start = 0;
    while start < cursor && width(&chars[start..cursor]) + 1 > available {
        start += 1;
    }
    start
}
