//! Construction surface for [`Autocomplete`](crate::Autocomplete).

use crate::input::InputRenderer;
use crate::option::{KeyFn, SelectOption};
use crate::style::StyleOverrides;

/// Selection callback. Receives the committed option, or `None` when the
/// selection is cleared.
pub type OnSelect<T> = Box<dyn Fn(Option<&SelectOption<T>>) + Send>;

pub const DEFAULT_PLACEHOLDER: &str = "Search...";
pub const DEFAULT_NO_RESULTS_TEXT: &str = "No results found";

/// Everything an [`Autocomplete`](crate::Autocomplete) can be built from.
///
/// Only `options` is required; the rest default to an enabled widget with
/// built-in styling.
///
/// ```rust,ignore
/// let config = AutocompleteConfig {
///     options: vec![SelectOption::new(1, "Apple"), SelectOption::new(2, "Banana")],
///     placeholder: "Pick a fruit".into(),
///     ..AutocompleteConfig::default()
/// };
/// let picker = Autocomplete::from_config(config);
/// ```
pub struct AutocompleteConfig<T> {
    pub options: Vec<SelectOption<T>>,
    pub placeholder: String,
    pub on_select: Option<OnSelect<T>>,
    pub disabled: bool,
    /// Identity function; values or labels are used when absent.
    pub key_fn: Option<KeyFn<T>>,
    pub styles: StyleOverrides,
    pub no_results_text: String,
    /// Initial selection, applied without notifying.
    pub value: Option<SelectOption<T>>,
    pub render_input: Option<Box<dyn InputRenderer<T>>>,
    /// Dropdown rows before scrolling. Wins over a dropdown `max_height`
    /// style override.
    pub max_visible: Option<u16>,
}

impl<T> Default for AutocompleteConfig<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            on_select: None,
            disabled: false,
            key_fn: None,
            styles: StyleOverrides::default(),
            no_results_text: DEFAULT_NO_RESULTS_TEXT.to_string(),
            value: None,
            render_input: None,
            max_visible: None,
        }
    }
}

impl<T> AutocompleteConfig<T> {
    pub fn new(options: Vec<SelectOption<T>>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for AutocompleteConfig<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutocompleteConfig")
            .field("options", &self.options)
            .field("placeholder", &self.placeholder)
            .field("on_select", &self.on_select.is_some())
            .field("disabled", &self.disabled)
            .field("key_fn", &self.key_fn.is_some())
            .field("styles", &self.styles)
            .field("no_results_text", &self.no_results_text)
            .field("value", &self.value)
            .field("render_input", &self.render_input.is_some())
            .field("max_visible", &self.max_visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AutocompleteConfig::<u32>::default();
        assert!(config.options.is_empty());
        assert_eq!(config.placeholder, "Search...");
        assert_eq!(config.no_results_text, "No results found");
        assert!(!config.disabled);
        assert!(config.on_select.is_none());
        assert!(config.styles.is_empty());
    }

    #[test]
    fn new_keeps_other_defaults() {
        let config = AutocompleteConfig::new(vec![SelectOption::new(1u8, "One")]);
        assert_eq!(config.options.len(), 1);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
        let debug = format!("{config:?}");
        assert!(debug.contains("on_select: false"));
    }
}
