//! Searchable dropdown: a search field over a filtered, selectable list.
//!
//! The host supplies [`SelectOption`]s carrying any value type. Typing
//! filters the list by label; arrow keys move a highlight; Enter or a click
//! commits; the `✕` glyph clears. Every change of the effective selection is
//! reported twice: through the optional `on_select` callback, and as a
//! [`Message::SelectionChanged`] returned from `update` for Elm-style hosts.
//!
//! # Example
//!
//! ```rust,ignore
//! use search_select::{Autocomplete, SelectOption};
//!
//! let picker = Autocomplete::new(vec![
//!     SelectOption::new("us".to_string(), "United States"),
//!     SelectOption::new("ca".to_string(), "Canada"),
//! ])
//! .with_placeholder("Select a country...")
//! .with_on_select(|option| tracing::info!(?option, "picked"));
//! ```
//!
//! Pointer input arrives through the widget's own subscription, so a host
//! only needs to forward key presses and merge [`Component::subscriptions`]
//! into its own while the widget is shown.

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;
use search_select_core::{pointer_events, Command, Component, Subscription};
use unicode_width::UnicodeWidthStr;

use crate::config::{AutocompleteConfig, OnSelect};
use crate::filter::filter_indices;
use crate::input::{DefaultInput, InputEvent, InputHandlers, InputProps, InputRenderer};
use crate::option::{default_key, KeyFn, OptionKey, SelectOption};
use crate::state::InteractionState;
use crate::style::{Declaration, Part, RowState, StyleOverrides, StyleSheet};

pub use crate::style::DEFAULT_MAX_VISIBLE;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Messages for the autocomplete component.
#[derive(Debug, Clone)]
pub enum Message<T> {
    /// A key press routed by the host.
    KeyPress(KeyEvent),
    /// Bracketed paste routed by the host.
    Paste(String),
    /// A pointer event from the widget's own listener.
    Pointer(MouseEvent),
    /// An event from a host-driven input (see [`InputHandlers`]).
    Input(InputEvent),
    /// Give the search field focus.
    Focus,
    /// Take focus away from the search field.
    Blur,
    /// Same as activating the clear glyph.
    Clear,
    /// Emitted after the effective selection changed.
    SelectionChanged(Option<SelectOption<T>>),
}

/// Screen rectangles from the last render, for pointer hit-testing.
#[derive(Debug, Clone, Default)]
struct HitRegions {
    input: Option<Rect>,
    clear: Option<Rect>,
    dropdown: Option<Rect>,
    /// Option rows with their filtered position.
    rows: Vec<(Rect, usize)>,
}

impl HitRegions {
    fn hit(rect: Option<Rect>, pos: Position) -> bool {
        rect.is_some_and(|r| r.contains(pos))
    }

    fn row_at(&self, pos: Position) -> Option<usize> {
        self.rows
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|&(_, row)| row)
    }

    fn forget_dropdown(&mut self) {
        self.dropdown = None;
        self.rows.clear();
    }
}

/// Where a pointer event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    Clear,
    Row(usize),
    Input,
    Dropdown,
    Outside,
}

/// Searchable dropdown component.
pub struct Autocomplete<T> {
    id: u64,
    options: Vec<SelectOption<T>>,
    filtered: Vec<usize>,
    state: InteractionState<T>,
    placeholder: String,
    no_results_text: String,
    disabled: bool,
    on_select: Option<OnSelect<T>>,
    key_fn: Option<KeyFn<T>>,
    styles: StyleOverrides,
    max_visible: Option<u16>,
    sheet: StyleSheet,
    render_input: Box<dyn InputRenderer<T>>,
    regions: RefCell<HitRegions>,
}

impl<T: Clone + Send + 'static> Autocomplete<T> {
    /// Create an autocomplete over `options` with default settings.
    pub fn new(options: Vec<SelectOption<T>>) -> Self {
        Self::from_config(AutocompleteConfig::new(options))
    }

    /// Create an autocomplete from a full configuration.
    pub fn from_config(config: AutocompleteConfig<T>) -> Self {
        let AutocompleteConfig {
            options,
            placeholder,
            on_select,
            disabled,
            key_fn,
            styles,
            no_results_text,
            value,
            render_input,
            max_visible,
        } = config;

        let mut ac = Self {
            id: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            options,
            filtered: Vec::new(),
            state: InteractionState::new(),
            placeholder,
            no_results_text,
            disabled,
            on_select,
            key_fn,
            styles,
            max_visible,
            sheet: StyleSheet::default(),
            render_input: render_input.unwrap_or_else(|| Box::new(DefaultInput)),
            regions: RefCell::new(HitRegions::default()),
        };
        ac.rebuild_sheet();
        ac.refilter();
        ac.warn_duplicate_keys();
        if value.is_some() {
            ac.set_value(value);
        }
        ac
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the selection callback.
    pub fn with_on_select(
        mut self,
        on_select: impl Fn(Option<&SelectOption<T>>) + Send + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Derive option identity with `key_fn` instead of value/label.
    pub fn with_key_fn(
        mut self,
        key_fn: impl Fn(&SelectOption<T>) -> OptionKey + Send + 'static,
    ) -> Self {
        self.key_fn = Some(Box::new(key_fn));
        let key = self.state.selection.as_ref().map(|o| self.key_of(o));
        self.state.selected_key = key;
        self.warn_duplicate_keys();
        self
    }

    pub fn with_styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self.rebuild_sheet();
        self
    }

    pub fn with_no_results_text(mut self, text: impl Into<String>) -> Self {
        self.no_results_text = text.into();
        self
    }

    /// Start with `value` selected.
    pub fn with_value(mut self, value: Option<SelectOption<T>>) -> Self {
        self.set_value(value);
        self
    }

    /// Replace the built-in search field.
    pub fn with_render_input(mut self, renderer: impl InputRenderer<T> + 'static) -> Self {
        self.render_input = Box::new(renderer);
        self
    }

    /// Dropdown rows shown before the list scrolls.
    pub fn with_max_visible(mut self, rows: u16) -> Self {
        self.max_visible = Some(rows.max(1));
        self.rebuild_sheet();
        self
    }

    /// Identifier of this instance; also the id of its pointer listener.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current search text.
    pub fn value(&self) -> String {
        self.state.text()
    }

    /// The committed selection, if any.
    pub fn selection(&self) -> Option<&SelectOption<T>> {
        self.state.selection()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Highlighted position in the filtered list.
    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted()
    }

    pub fn highlighted_option(&self) -> Option<&SelectOption<T>> {
        self.state
            .highlighted()
            .and_then(|pos| self.filtered.get(pos))
            .map(|&idx| &self.options[idx])
    }

    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    /// Options matching the current search text, in original order.
    pub fn filtered_options(&self) -> Vec<&SelectOption<T>> {
        self.filtered.iter().map(|&idx| &self.options[idx]).collect()
    }

    /// Whether the clear glyph is shown.
    pub fn is_clear_visible(&self) -> bool {
        !self.state.editor.is_empty()
    }

    pub fn is_clear_hovered(&self) -> bool {
        self.state.is_clear_hovered()
    }

    /// Identity of `option` under the configured key function.
    pub fn key_of(&self, option: &SelectOption<T>) -> OptionKey {
        match &self.key_fn {
            Some(key_fn) => key_fn(option),
            None => default_key(option),
        }
    }

    /// Whether `option` is the committed selection.
    pub fn is_selected(&self, option: &SelectOption<T>) -> bool {
        self.state
            .selected_key
            .as_ref()
            .is_some_and(|key| *key == self.key_of(option))
    }

    /// Replace the option list. The search text is kept and the highlight is
    /// pulled into the new filtered list.
    pub fn set_options(&mut self, options: Vec<SelectOption<T>>) {
        self.options = options;
        self.refilter();
        self.state.clamp(self.filtered.len());
        self.warn_duplicate_keys();
        tracing::debug!(id = self.id, count = self.options.len(), "options replaced");
    }

    /// Override the selection from the host. Does not notify.
    pub fn set_value(&mut self, value: Option<SelectOption<T>>) {
        let key = value.as_ref().map(|o| self.key_of(o));
        let text = value.as_ref().map(|o| o.label.clone()).unwrap_or_default();
        self.state.editor.set_value(&text);
        self.state.set_selection(value, key);
        self.state.reset_highlight();
        self.refilter();
        self.close();
    }

    /// Enable or disable the widget. Disabling closes and blurs it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.state.focused = false;
            self.state.clear_hovered = false;
            self.close();
        }
    }

    /// Focus the search field and open the dropdown. Ignored while disabled.
    pub fn focus(&mut self) {
        if self.disabled {
            return;
        }
        self.state.focused = true;
        self.open();
    }

    /// Remove focus and close the dropdown.
    pub fn blur(&mut self) {
        self.state.focused = false;
        self.state.clear_hovered = false;
        self.close();
    }

    pub fn set_focused(&mut self, focused: bool) {
        if focused {
            self.focus();
        } else {
            self.blur();
        }
    }

    fn rebuild_sheet(&mut self) {
        let mut overrides = self.styles.clone();
        if let Some(rows) = self.max_visible {
            overrides.set(Part::Dropdown, Declaration::new().max_height(rows));
        }
        self.sheet = StyleSheet::new(&overrides);
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.options, &self.state.text());
    }

    fn warn_duplicate_keys(&self) {
        let mut seen = HashSet::new();
        let duplicates: Vec<OptionKey> = self
            .options
            .iter()
            .map(|o| self.key_of(o))
            .filter(|key| !seen.insert(key.clone()))
            .collect();
        if let Some(first) = duplicates.first() {
            tracing::warn!(
                id = self.id,
                count = duplicates.len(),
                key = %first,
                "duplicate option keys"
            );
        }
    }

    fn open(&mut self) {
        if self.disabled || self.state.open {
            return;
        }
        self.state.open = true;
        tracing::debug!(id = self.id, matches = self.filtered.len(), "dropdown opened");
    }

    fn close(&mut self) {
        self.regions.borrow_mut().forget_dropdown();
        if !self.state.open {
            return;
        }
        self.state.open = false;
        tracing::debug!(id = self.id, "dropdown closed");
    }

    fn notify(&self, selection: Option<&SelectOption<T>>) -> Command<Message<T>> {
        if let Some(on_select) = &self.on_select {
            on_select(selection);
        }
        Command::message(Message::SelectionChanged(selection.cloned()))
    }

    /// The search text changed through editing.
    fn text_changed(&mut self) -> Command<Message<T>> {
        self.state.reset_highlight();
        self.refilter();
        self.open();
        if self.state.editor.is_empty() {
            self.state.set_selection(None, None);
            tracing::debug!(id = self.id, "search emptied, selection dropped");
            return self.notify(None);
        }
        Command::none()
    }

    /// Commit the option at filtered position `pos`. Focus leaves the field.
    fn commit(&mut self, pos: usize) -> Command<Message<T>> {
        let Some(&idx) = self.filtered.get(pos) else {
            return Command::none();
        };
        let option = self.options[idx].clone();
        let key = self.key_of(&option);
        tracing::debug!(id = self.id, label = %option.label, %key, "option committed");

        self.state.editor.set_value(&option.label);
        self.state.set_selection(Some(option), Some(key));
        self.state.reset_highlight();
        self.refilter();
        self.blur();
        self.notify(self.state.selection())
    }

    fn clear(&mut self) -> Command<Message<T>> {
        tracing::debug!(id = self.id, "selection cleared");
        self.state.editor.set_value("");
        self.state.set_selection(None, None);
        self.state.reset_highlight();
        self.state.clear_hovered = false;
        self.refilter();
        self.close();
        self.state.focused = true;
        self.notify(None)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message<T>> {
        if self.disabled || !self.state.focused || key.kind == KeyEventKind::Release {
            return Command::none();
        }

        if !self.state.open && matches!(key.code, KeyCode::Up | KeyCode::Down) {
            self.open();
            return Command::none();
        }

        match (key.code, key.modifiers) {
            (KeyCode::Down, _) => {
                self.state.highlight_next(self.filtered.len());
                self.ensure_highlight_visible();
                tracing::trace!(id = self.id, highlighted = ?self.state.highlighted, "highlight down");
                Command::none()
            }
            (KeyCode::Up, _) => {
                self.state.highlight_prev();
                self.ensure_highlight_visible();
                tracing::trace!(id = self.id, highlighted = ?self.state.highlighted, "highlight up");
                Command::none()
            }
            (KeyCode::Enter, _) => match self.state.highlighted {
                Some(pos) if self.state.open => self.commit(pos),
                _ => Command::none(),
            },
            (KeyCode::Esc, _) => {
                self.blur();
                Command::none()
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if self.state.editor.kill_to_start() {
                    self.text_changed()
                } else {
                    Command::none()
                }
            }
            (KeyCode::Backspace, _) => {
                if self.state.editor.delete_back() {
                    self.text_changed()
                } else {
                    Command::none()
                }
            }
            (KeyCode::Delete, _) => {
                if self.state.editor.delete_forward() {
                    self.text_changed()
                } else {
                    Command::none()
                }
            }
            (KeyCode::Left, _) => {
                self.state.editor.move_left();
                Command::none()
            }
            (KeyCode::Right, _) => {
                self.state.editor.move_right();
                Command::none()
            }
            (KeyCode::Home, _) => {
                self.state.editor.move_home();
                Command::none()
            }
            (KeyCode::End, _) => {
                self.state.editor.move_end();
                Command::none()
            }
            (KeyCode::Char(c), mods) if inserts_text(mods) => {
                self.state.editor.insert_char(c);
                self.text_changed()
            }
            _ => Command::none(),
        }
    }

    fn hit_test(&self, pos: Position) -> Hit {
        let regions = self.regions.borrow();
        if self.is_clear_visible() && HitRegions::hit(regions.clear, pos) {
            Hit::Clear
        } else if let Some(row) = regions.row_at(pos) {
            Hit::Row(row)
        } else if HitRegions::hit(regions.input, pos) {
            Hit::Input
        } else if HitRegions::hit(regions.dropdown, pos) {
            Hit::Dropdown
        } else {
            Hit::Outside
        }
    }

    fn handle_pointer(&mut self, event: MouseEvent) -> Command<Message<T>> {
        if self.disabled {
            return Command::none();
        }
        let hit = self.hit_test(Position::new(event.column, event.row));

        match event.kind {
            MouseEventKind::Down(button) => match hit {
                Hit::Outside => {
                    if self.state.open || self.state.focused {
                        tracing::debug!(id = self.id, "pointer pressed outside");
                    }
                    self.blur();
                    Command::none()
                }
                _ if button != MouseButton::Left => Command::none(),
                Hit::Clear => self.clear(),
                Hit::Row(pos) if self.state.open => self.commit(pos),
                Hit::Input => {
                    self.focus();
                    Command::none()
                }
                Hit::Row(_) | Hit::Dropdown => Command::none(),
            },
            MouseEventKind::Moved => {
                self.state.clear_hovered = hit == Hit::Clear;
                if let Hit::Row(pos) = hit {
                    if self.state.open && self.state.highlighted != Some(pos) {
                        self.state.highlight_at(pos, self.filtered.len());
                        tracing::trace!(id = self.id, highlighted = pos, "highlight follows pointer");
                    }
                }
                Command::none()
            }
            MouseEventKind::ScrollDown if matches!(hit, Hit::Row(_) | Hit::Dropdown) => {
                if self.window_end(self.state.scroll) < self.filtered.len() {
                    self.state.scroll += 1;
                }
                Command::none()
            }
            MouseEventKind::ScrollUp if matches!(hit, Hit::Row(_) | Hit::Dropdown) => {
                self.state.scroll = self.state.scroll.saturating_sub(1);
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn list_budget(&self) -> u16 {
        self.sheet
            .part(Part::Dropdown)
            .max_height
            .unwrap_or(DEFAULT_MAX_VISIBLE)
            .max(1)
    }

    /// Style of the row at filtered position `pos`.
    fn row_declaration(&self, pos: usize, last: bool) -> Declaration {
        let selected = self
            .filtered
            .get(pos)
            .is_some_and(|&idx| self.is_selected(&self.options[idx]));
        self.sheet.option(RowState {
            highlighted: self.state.highlighted == Some(pos),
            selected,
            last,
        })
    }

    /// One past the last filtered position that fits when the list starts at
    /// `start`. At least one row is always shown.
    ///
    /// A candidate row is measured as the last on screen (no divider); rows
    /// before it count at full height.
    fn window_end(&self, start: usize) -> usize {
        let budget = self.list_budget();
        let len = self.filtered.len();
        let mut used: u16 = 0;
        let mut end = start;
        while end < len {
            let as_last = self.row_declaration(end, true).outer_height();
            if end > start && used.saturating_add(as_last) > budget {
                break;
            }
            used = used.saturating_add(self.row_declaration(end, false).outer_height());
            end += 1;
        }
        end
    }

    fn ensure_highlight_visible(&mut self) {
        let Some(pos) = self.state.highlighted else {
            return;
        };
        if pos < self.state.scroll {
            self.state.scroll = pos;
            return;
        }
        while self.state.scroll < pos && self.window_end(self.state.scroll) <= pos {
            self.state.scroll += 1;
        }
    }

    fn render_controls(
        &self,
        frame: &mut Frame,
        input_area: Rect,
        input: &Declaration,
        regions: &mut HitRegions,
    ) {
        let content = input.block().inner(input_area);
        if content.height == 0 {
            return;
        }
        let arrow = self.sheet.arrow(self.state.open && !self.disabled);
        let arrow_w = arrow.symbol_str().width() as u16;
        if content.width < arrow_w {
            return;
        }
        let arrow_x = content.right() - arrow_w;
        frame.render_widget(
            Span::styled(arrow.symbol_str().to_string(), input.style.patch(arrow.style)),
            Rect::new(arrow_x, content.y, arrow_w, 1),
        );

        if self.is_clear_visible() {
            let clear = self.sheet.clear_button(self.state.clear_hovered);
            let clear_w = clear.symbol_str().width() as u16;
            if arrow_x >= content.x + clear_w + 1 {
                let rect = Rect::new(arrow_x - clear_w - 1, content.y, clear_w, 1);
                frame.render_widget(
                    Span::styled(clear.symbol_str().to_string(), input.style.patch(clear.style)),
                    rect,
                );
                regions.clear = Some(rect);
            }
        }
    }

    /// Columns the controls take at the right of the input, including gaps.
    fn trailing_width(&self) -> u16 {
        let arrow = self.sheet.arrow(self.state.open && !self.disabled);
        let mut width = arrow.symbol_str().width() as u16 + 1;
        if self.is_clear_visible() {
            let clear = self.sheet.clear_button(self.state.clear_hovered);
            width += clear.symbol_str().width() as u16 + 1;
        }
        width
    }

    fn render_dropdown(&self, frame: &mut Frame, anchor: Rect, regions: &mut HitRegions) {
        let screen = frame.area();
        let top = anchor.bottom();
        if top >= screen.bottom() {
            return;
        }

        let dropdown = self.sheet.part(Part::Dropdown);
        let chrome = dropdown.outer_height() - 1;
        let rows: Vec<(usize, Declaration)> = if self.filtered.is_empty() {
            Vec::new()
        } else {
            let start = self.state.scroll.min(self.filtered.len() - 1);
            let end = self.window_end(start);
            (start..end)
                .map(|pos| (pos, self.row_declaration(pos, pos + 1 == end)))
                .collect()
        };
        let content_height = if rows.is_empty() {
            1
        } else {
            rows.iter().map(|(_, d)| d.outer_height()).sum()
        };

        let rect = Rect {
            x: anchor.x,
            y: top,
            width: anchor.width,
            height: (content_height + chrome).min(screen.bottom() - top),
        };
        frame.render_widget(Clear, rect);
        let block = dropdown.block();
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        regions.dropdown = Some(rect);

        if rows.is_empty() {
            if inner.height > 0 {
                let no_results = self.sheet.part(Part::NoResults);
                frame.render_widget(
                    Paragraph::new(Line::from(self.no_results_text.as_str()))
                        .style(no_results.style)
                        .block(no_results.block()),
                    Rect { height: 1, ..inner },
                );
            }
            return;
        }

        let mut y = inner.y;
        for (pos, row) in rows {
            if y >= inner.bottom() {
                break;
            }
            let height = row.outer_height().min(inner.bottom() - y);
            let row_rect = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height,
            };
            let option = &self.options[self.filtered[pos]];
            let line = Line::from(vec![
                Span::raw(row.symbol_str().to_string()),
                Span::raw(option.label.clone()),
            ]);
            frame.render_widget(
                Paragraph::new(line).style(row.style).block(row.block()),
                row_rect,
            );
            regions.rows.push((row_rect, pos));
            y += height;
        }
    }
}

/// Whether a character key with these modifiers types text. AltGr arrives
/// as `CONTROL | ALT` on some terminals.
fn inserts_text(mods: KeyModifiers) -> bool {
    let alt_gr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    !mods.contains(KeyModifiers::CONTROL) || mods.contains(alt_gr)
}

impl<T: Clone + Send + 'static> Component for Autocomplete<T> {
    type Message = Message<T>;

    fn update(&mut self, msg: Message<T>) -> Command<Message<T>> {
        match msg {
            Message::KeyPress(key) | Message::Input(InputEvent::Key(key)) => self.handle_key(key),
            Message::Paste(text) => {
                if self.disabled || !self.state.focused {
                    return Command::none();
                }
                if self.state.editor.insert_str(&text) > 0 {
                    self.text_changed()
                } else {
                    Command::none()
                }
            }
            Message::Pointer(event) => self.handle_pointer(event),
            Message::Input(InputEvent::Changed(text)) => {
                if self.disabled || text == self.state.text() {
                    return Command::none();
                }
                self.state.editor.set_value(&text);
                self.text_changed()
            }
            Message::Focus | Message::Input(InputEvent::Focus) => {
                self.focus();
                Command::none()
            }
            Message::Blur | Message::Input(InputEvent::Blur) => {
                self.blur();
                Command::none()
            }
            Message::Clear => {
                if self.disabled {
                    Command::none()
                } else {
                    self.clear()
                }
            }
            Message::SelectionChanged(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut regions = HitRegions::default();
        let wrapper = self.sheet.part(Part::Wrapper).block();
        let inner = wrapper.inner(area);
        frame.render_widget(wrapper, area);

        let input = self.sheet.input(self.state.focused, self.disabled);
        let input_area = Rect {
            height: input.outer_height().min(inner.height),
            ..inner
        };
        if input_area.is_empty() {
            *self.regions.borrow_mut() = regions;
            return;
        }
        regions.input = Some(input_area);

        let value = self.state.text();
        let props = InputProps {
            value: &value,
            cursor: self.state.editor.cursor(),
            placeholder: &self.placeholder,
            disabled: self.disabled,
            focused: self.state.focused,
            style: &input,
            autocomplete: "off",
            trailing: self.trailing_width(),
            handlers: InputHandlers::default(),
        };
        self.render_input.render(&props, frame, input_area);
        self.render_controls(frame, input_area, &input, &mut regions);

        if self.state.open && !self.disabled {
            self.render_dropdown(frame, input_area, &mut regions);
        }
        *self.regions.borrow_mut() = regions;
    }

    fn subscriptions(&self) -> Vec<Subscription<Message<T>>> {
        vec![pointer_events(self.id, |event: MouseEvent| match event.kind {
            MouseEventKind::Down(_)
            | MouseEventKind::Moved
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollUp => Some(Message::Pointer(event)),
            _ => None,
        })]
    }

    fn focused(&self) -> bool {
        self.state.is_focused()
    }
}
