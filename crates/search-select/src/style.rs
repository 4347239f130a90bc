//! Default look of the widget and caller overrides, per visual region.
//!
//! Every region ([`Part`]) has a built-in [`Declaration`]. Callers supply a
//! partial [`StyleOverrides`] map; each override is laid over its default
//! key by key, so overriding a region's background keeps its default
//! foreground. Interaction states (focused, hovered, highlighted, ...) are
//! regions of their own and are composed in a fixed order on top of the base
//! region.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Padding};
use std::collections::HashMap;

/// Per-key overlay: keys set on `over` win, everything else is kept.
pub trait Overlay {
    fn overlay(&self, over: &Self) -> Self;
}

impl Overlay for Style {
    fn overlay(&self, over: &Self) -> Self {
        self.patch(*over)
    }
}

impl<T: Clone> Overlay for Option<T> {
    fn overlay(&self, over: &Self) -> Self {
        over.clone().or_else(|| self.clone())
    }
}

/// A named visual region of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The area surrounding input and dropdown.
    Wrapper,
    /// The search field.
    Input,
    /// The search field while focused.
    InputFocused,
    /// The search field while disabled.
    InputDisabled,
    /// The clear glyph.
    ClearButton,
    /// The clear glyph under the pointer.
    ClearButtonHover,
    /// The open/closed indicator.
    Arrow,
    /// The indicator while the dropdown is open.
    ArrowOpen,
    /// The dropdown list container.
    Dropdown,
    /// An option row.
    Option,
    /// The keyboard/pointer highlighted row.
    OptionHighlighted,
    /// The row of the current selection.
    OptionSelected,
    /// A row that is both highlighted and selected.
    OptionHighlightedSelected,
    /// The placeholder row shown when nothing matches.
    NoResults,
}

impl Part {
    /// Every region, in declaration order.
    pub const ALL: [Part; 14] = [
        Part::Wrapper,
        Part::Input,
        Part::InputFocused,
        Part::InputDisabled,
        Part::ClearButton,
        Part::ClearButtonHover,
        Part::Arrow,
        Part::ArrowOpen,
        Part::Dropdown,
        Part::Option,
        Part::OptionHighlighted,
        Part::OptionSelected,
        Part::OptionHighlightedSelected,
        Part::NoResults,
    ];
}

/// A set of optional style keys for one region. Unset keys fall through to
/// whatever is underneath.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declaration {
    /// Text style (fg, bg, modifiers).
    pub style: Style,
    /// Style of the region's border, if it has one.
    pub border_style: Style,
    /// Which sides get a border. On an option row, `BOTTOM` draws a divider.
    pub borders: Option<Borders>,
    /// Horizontal padding in columns, applied on both sides.
    pub padding: Option<u16>,
    /// Maximum rows of content (the dropdown's list height).
    pub max_height: Option<u16>,
    /// Glyph drawn for the region (clear mark, arrow, row prefix).
    pub symbol: Option<String>,
}

impl Declaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.style = self.style.fg(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.style = self.style.bg(color);
        self
    }

    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.style = self.style.add_modifier(modifier);
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = Some(borders);
        self
    }

    pub fn padding(mut self, columns: u16) -> Self {
        self.padding = Some(columns);
        self
    }

    pub fn max_height(mut self, rows: u16) -> Self {
        self.max_height = Some(rows);
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// This declaration with `over` laid on top.
    pub fn merge(&self, over: &Declaration) -> Declaration {
        Declaration {
            style: self.style.overlay(&over.style),
            border_style: self.border_style.overlay(&over.border_style),
            borders: self.borders.overlay(&over.borders),
            padding: self.padding.overlay(&over.padding),
            max_height: self.max_height.overlay(&over.max_height),
            symbol: self.symbol.overlay(&over.symbol),
        }
    }

    /// Drop the bottom border, whatever state produced it.
    pub fn without_bottom_border(mut self) -> Self {
        if let Some(borders) = self.borders.as_mut() {
            borders.remove(Borders::BOTTOM);
        }
        self
    }

    /// Whether a divider line is drawn under this region.
    pub fn has_bottom_border(&self) -> bool {
        self.borders.is_some_and(|b| b.contains(Borders::BOTTOM))
    }

    /// Resolved horizontal padding.
    pub fn padding_or_zero(&self) -> u16 {
        self.padding.unwrap_or(0)
    }

    /// Resolved glyph, or the empty string.
    pub fn symbol_str(&self) -> &str {
        self.symbol.as_deref().unwrap_or("")
    }

    /// Rows a single line of content takes once borders are added.
    pub fn outer_height(&self) -> u16 {
        let borders = self.borders.unwrap_or(Borders::NONE);
        1 + u16::from(borders.contains(Borders::TOP)) + u16::from(borders.contains(Borders::BOTTOM))
    }

    /// Block carrying this declaration's borders, padding and fill.
    pub fn block(&self) -> Block<'static> {
        Block::new()
            .borders(self.borders.unwrap_or(Borders::NONE))
            .border_style(self.border_style)
            .style(self.style)
            .padding(Padding::horizontal(self.padding_or_zero()))
    }
}

/// Caller overrides: a partial map from region to declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    parts: HashMap<Part, Declaration>,
}

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override `part` (builder form). Overriding the same part twice merges
    /// the second declaration over the first.
    pub fn with(mut self, part: Part, declaration: Declaration) -> Self {
        self.set(part, declaration);
        self
    }

    /// Override `part`.
    pub fn set(&mut self, part: Part, declaration: Declaration) {
        let merged = match self.parts.get(&part) {
            Some(existing) => existing.merge(&declaration),
            None => declaration,
        };
        self.parts.insert(part, merged);
    }

    /// The override for `part`, if any.
    pub fn get(&self, part: Part) -> Option<&Declaration> {
        self.parts.get(&part)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Dropdown rows shown when neither the config nor the styles say otherwise.
pub const DEFAULT_MAX_VISIBLE: u16 = 8;

/// Built-in declaration for each region.
pub fn default_declaration(part: Part) -> Declaration {
    let muted = Style::default().fg(Color::DarkGray);
    match part {
        Part::Wrapper => Declaration::new(),
        Part::Input => Declaration::new()
            .borders(Borders::ALL)
            .border_style(muted)
            .padding(1),
        Part::InputFocused => Declaration::new().border_style(Style::default().fg(Color::Cyan)),
        Part::InputDisabled => Declaration::new()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
            .border_style(muted),
        Part::ClearButton => Declaration::new().fg(Color::Gray).symbol("✕"),
        Part::ClearButtonHover => Declaration::new()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Part::Arrow => Declaration::new().fg(Color::DarkGray).symbol("▼"),
        Part::ArrowOpen => Declaration::new().fg(Color::Cyan).symbol("▲"),
        Part::Dropdown => Declaration::new()
            .borders(Borders::ALL)
            .border_style(muted)
            .max_height(DEFAULT_MAX_VISIBLE),
        Part::Option => Declaration::new().padding(1).symbol("  "),
        Part::OptionHighlighted => Declaration::new()
            .bg(Color::DarkGray)
            .fg(Color::White)
            .symbol("▸ "),
        Part::OptionSelected => Declaration::new()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Part::OptionHighlightedSelected => Declaration::new()
            .bg(Color::DarkGray)
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Part::NoResults => Declaration::new()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
            .padding(1),
    }
}

/// Interaction state of one option row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState {
    pub highlighted: bool,
    pub selected: bool,
    /// Last rendered row: never draws a divider under itself.
    pub last: bool,
}

/// Defaults with caller overrides already applied, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    resolved: HashMap<Part, Declaration>,
}

impl StyleSheet {
    /// Lay `overrides` over the built-in defaults.
    pub fn new(overrides: &StyleOverrides) -> Self {
        let resolved = Part::ALL
            .iter()
            .map(|&part| {
                let base = default_declaration(part);
                let decl = match overrides.get(part) {
                    Some(over) => base.merge(over),
                    None => base,
                };
                (part, decl)
            })
            .collect();
        Self { resolved }
    }

    /// The resolved declaration of a single region.
    pub fn part(&self, part: Part) -> Declaration {
        self.resolved.get(&part).cloned().unwrap_or_default()
    }

    /// `layers` laid over each other in order; later layers win.
    pub fn compose(&self, layers: &[Part]) -> Declaration {
        layers
            .iter()
            .fold(Declaration::default(), |acc, &part| match self.resolved.get(&part) {
                Some(decl) => acc.merge(decl),
                None => acc,
            })
    }

    /// The search field: base, then focused, then disabled.
    pub fn input(&self, focused: bool, disabled: bool) -> Declaration {
        let mut layers = vec![Part::Input];
        if focused {
            layers.push(Part::InputFocused);
        }
        if disabled {
            layers.push(Part::InputDisabled);
        }
        self.compose(&layers)
    }

    pub fn clear_button(&self, hovered: bool) -> Declaration {
        if hovered {
            self.compose(&[Part::ClearButton, Part::ClearButtonHover])
        } else {
            self.part(Part::ClearButton)
        }
    }

    pub fn arrow(&self, open: bool) -> Declaration {
        if open {
            self.compose(&[Part::Arrow, Part::ArrowOpen])
        } else {
            self.part(Part::Arrow)
        }
    }

    /// An option row. Highlighted-and-selected wins over either alone, and
    /// the last row loses its bottom border.
    pub fn option(&self, row: RowState) -> Declaration {
        let mut layers = vec![Part::Option];
        if row.highlighted {
            layers.push(Part::OptionHighlighted);
        }
        if row.selected {
            layers.push(Part::OptionSelected);
        }
        if row.highlighted && row.selected {
            layers.push(Part::OptionHighlightedSelected);
        }
        let decl = self.compose(&layers);
        if row.last {
            decl.without_bottom_border()
        } else {
            decl
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new(&StyleOverrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_per_key_not_wholesale() {
        let base = Declaration::new().fg(Color::White).bg(Color::Black).padding(2);
        let over = Declaration::new().bg(Color::Blue);
        let merged = base.merge(&over);
        assert_eq!(merged.style.fg, Some(Color::White));
        assert_eq!(merged.style.bg, Some(Color::Blue));
        assert_eq!(merged.padding, Some(2));
    }

    #[test]
    fn option_overlay_keeps_base_when_unset() {
        assert_eq!(Some(1).overlay(&None), Some(1));
        assert_eq!(Some(1).overlay(&Some(2)), Some(2));
        assert_eq!(None::<u8>.overlay(&None), None);
    }

    #[test]
    fn sheet_applies_overrides_over_defaults() {
        let overrides = StyleOverrides::new()
            .with(Part::Dropdown, Declaration::new().max_height(3))
            .with(Part::Option, Declaration::new().padding(4));
        let sheet = StyleSheet::new(&overrides);

        let dropdown = sheet.part(Part::Dropdown);
        assert_eq!(dropdown.max_height, Some(3));
        assert_eq!(dropdown.borders, Some(Borders::ALL));
        assert_eq!(sheet.part(Part::Option).padding, Some(4));
        assert_eq!(sheet.part(Part::Option).symbol.as_deref(), Some("  "));
    }

    #[test]
    fn repeated_set_merges() {
        let overrides = StyleOverrides::new()
            .with(Part::Input, Declaration::new().fg(Color::Green))
            .with(Part::Input, Declaration::new().bg(Color::Black));
        let input = overrides.get(Part::Input).cloned().unwrap_or_default();
        assert_eq!(input.style.fg, Some(Color::Green));
        assert_eq!(input.style.bg, Some(Color::Black));
    }

    #[test]
    fn input_states_compose_in_order() {
        let sheet = StyleSheet::default();
        assert_eq!(
            sheet.input(false, false).border_style.fg,
            Some(Color::DarkGray)
        );
        assert_eq!(sheet.input(true, false).border_style.fg, Some(Color::Cyan));
        // disabled is applied last
        assert_eq!(
            sheet.input(true, true).border_style.fg,
            Some(Color::DarkGray)
        );
    }

    #[test]
    fn highlighted_and_selected_beats_either_alone() {
        let overrides = StyleOverrides::new()
            .with(Part::OptionHighlighted, Declaration::new().bg(Color::Yellow))
            .with(Part::OptionSelected, Declaration::new().bg(Color::Green))
            .with(
                Part::OptionHighlightedSelected,
                Declaration::new().bg(Color::Magenta),
            );
        let sheet = StyleSheet::new(&overrides);

        let both = sheet.option(RowState {
            highlighted: true,
            selected: true,
            last: false,
        });
        assert_eq!(both.style.bg, Some(Color::Magenta));

        let hl = sheet.option(RowState {
            highlighted: true,
            ..RowState::default()
        });
        assert_eq!(hl.style.bg, Some(Color::Yellow));

        let sel = sheet.option(RowState {
            selected: true,
            ..RowState::default()
        });
        assert_eq!(sel.style.bg, Some(Color::Green));
    }

    #[test]
    fn last_row_never_has_divider() {
        let overrides = StyleOverrides::new()
            .with(Part::Option, Declaration::new().borders(Borders::BOTTOM))
            .with(
                Part::OptionHighlightedSelected,
                Declaration::new().borders(Borders::BOTTOM | Borders::LEFT),
            );
        let sheet = StyleSheet::new(&overrides);

        let middle = sheet.option(RowState::default());
        assert!(middle.has_bottom_border());

        for (highlighted, selected) in [(false, false), (true, false), (false, true), (true, true)] {
            let last = sheet.option(RowState {
                highlighted,
                selected,
                last: true,
            });
            assert!(!last.has_bottom_border());
        }
        let last_both = sheet.option(RowState {
            highlighted: true,
            selected: true,
            last: true,
        });
        assert_eq!(last_both.borders, Some(Borders::LEFT));
    }

    #[test]
    fn outer_height_counts_horizontal_borders() {
        assert_eq!(Declaration::new().outer_height(), 1);
        assert_eq!(Declaration::new().borders(Borders::BOTTOM).outer_height(), 2);
        assert_eq!(Declaration::new().borders(Borders::ALL).outer_height(), 3);
        assert_eq!(Declaration::new().borders(Borders::LEFT).outer_height(), 1);
    }

    #[test]
    fn clear_and_arrow_states() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.clear_button(false).symbol_str(), "✕");
        assert_eq!(sheet.clear_button(true).style.fg, Some(Color::Red));
        assert_eq!(sheet.clear_button(true).symbol_str(), "✕");
        assert_eq!(sheet.arrow(false).symbol_str(), "▼");
        assert_eq!(sheet.arrow(true).symbol_str(), "▲");
    }
}
