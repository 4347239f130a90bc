//! Transient interaction state owned by one widget instance.
//!
//! Nothing here knows about rendering or options beyond their count; the
//! widget drives it and re-derives the filtered list around it.

use crate::option::{OptionKey, SelectOption};
use crate::text_edit::TextEditState;

/// Search text, open flag, highlight, selection and focus/hover flags.
///
/// `highlighted` is a position in the filtered list. It is always `None` or
/// less than the filtered length the state was last told about.
#[derive(Debug, Clone)]
pub struct InteractionState<T> {
    pub(crate) editor: TextEditState,
    pub(crate) open: bool,
    pub(crate) highlighted: Option<usize>,
    pub(crate) scroll: usize,
    pub(crate) selection: Option<SelectOption<T>>,
    pub(crate) selected_key: Option<OptionKey>,
    pub(crate) focused: bool,
    pub(crate) clear_hovered: bool,
}

impl<T> Default for InteractionState<T> {
    fn default() -> Self {
        Self {
            editor: TextEditState::new(),
            open: false,
            highlighted: None,
            scroll: 0,
            selection: None,
            selected_key: None,
            focused: false,
            clear_hovered: false,
        }
    }
}

impl<T> InteractionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.editor.value()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn selection(&self) -> Option<&SelectOption<T>> {
        self.selection.as_ref()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_clear_hovered(&self) -> bool {
        self.clear_hovered
    }

    /// First filtered position shown in the dropdown.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Forget the highlight and scroll back to the top. Called whenever the
    /// search text changes.
    pub(crate) fn reset_highlight(&mut self) {
        self.highlighted = None;
        self.scroll = 0;
    }

    /// Move the highlight down one row, stopping at the last of `len` rows.
    pub(crate) fn highlight_next(&mut self, len: usize) {
        if len == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    /// Move the highlight up one row; the top row moves to none.
    pub(crate) fn highlight_prev(&mut self) {
        self.highlighted = match self.highlighted {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Highlight `pos` if it exists in a list of `len` rows.
    pub(crate) fn highlight_at(&mut self, pos: usize, len: usize) {
        if pos < len {
            self.highlighted = Some(pos);
        }
    }

    /// Keep highlight and scroll inside a list that now has `len` rows.
    pub(crate) fn clamp(&mut self, len: usize) {
        if self.highlighted.is_some_and(|i| i >= len) {
            self.highlighted = len.checked_sub(1);
        }
        if self.scroll >= len {
            self.scroll = len.saturating_sub(1);
        }
    }

    pub(crate) fn set_selection(&mut self, selection: Option<SelectOption<T>>, key: Option<OptionKey>) {
        self.selection = selection;
        self.selected_key = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_from_none_goes_to_first_and_clamps_at_last() {
        let mut st = InteractionState::<u32>::new();
        st.highlight_next(3);
        assert_eq!(st.highlighted(), Some(0));
        st.highlight_next(3);
        st.highlight_next(3);
        st.highlight_next(3);
        assert_eq!(st.highlighted(), Some(2));
    }

    #[test]
    fn up_goes_to_none_and_stays() {
        let mut st = InteractionState::<u32>::new();
        st.highlight_next(3);
        st.highlight_next(3);
        st.highlight_prev();
        assert_eq!(st.highlighted(), Some(0));
        st.highlight_prev();
        assert_eq!(st.highlighted(), None);
        st.highlight_prev();
        assert_eq!(st.highlighted(), None);
    }

    #[test]
    fn down_on_empty_list_highlights_nothing() {
        let mut st = InteractionState::<u32>::new();
        st.highlight_next(0);
        assert_eq!(st.highlighted(), None);
    }

    #[test]
    fn highlight_stays_in_range_for_any_key_sequence() {
        for len in 0..5usize {
            let mut st = InteractionState::<u32>::new();
            for step in 0..40 {
                if step % 3 == 0 {
                    st.highlight_prev();
                } else {
                    st.highlight_next(len);
                }
                assert!(st.highlighted().is_none_or(|i| i < len), "len {len} step {step}");
            }
        }
    }

    #[test]
    fn clamp_pulls_highlight_into_shorter_list() {
        let mut st = InteractionState::<u32>::new();
        st.highlighted = Some(4);
        st.scroll = 3;
        st.clamp(2);
        assert_eq!(st.highlighted(), Some(1));
        assert_eq!(st.scroll(), 1);
        st.clamp(0);
        assert_eq!(st.highlighted(), None);
        assert_eq!(st.scroll(), 0);
    }

    #[test]
    fn highlight_at_ignores_out_of_range() {
        let mut st = InteractionState::<u32>::new();
        st.highlight_at(5, 3);
        assert_eq!(st.highlighted(), None);
        st.highlight_at(2, 3);
        assert_eq!(st.highlighted(), Some(2));
    }

    #[test]
    fn reset_clears_highlight_and_scroll() {
        let mut st = InteractionState::<u32>::new();
        st.highlighted = Some(2);
        st.scroll = 2;
        st.reset_highlight();
        assert_eq!(st.highlighted(), None);
        assert_eq!(st.scroll(), 0);
    }
}
