/// Whether a selection widget holds one selected option or many
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// A list of selectable options, e.g. the band pickers
#[derive(Debug, Clone)]
pub struct SelectWidget {
    id: &'static str,
    mode: SelectionMode,
    options: Vec<String>,
    /// Parallel to `options`
    selected: Vec<bool>,
}

impl SelectWidget {
    pub fn new(id: &'static str, mode: SelectionMode) -> Self {
        Self {
            id,
            mode,
            options: Vec::new(),
            selected: Vec::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn append_option(&mut self, text: impl Into<String>) {
        self.options.push(text.into());
        self.selected.push(false);
    }

    /// Selects the first option with the given text
    ///
    /// In single mode any previous selection is dropped. Returns false when no
    /// option matches.
    pub fn select(&mut self, text: &str) -> bool {
        let Some(index) = self.options.iter().position(|o| o == text) else {
            return false;
        };
        if self.mode == SelectionMode::Single {
            self.selected.iter_mut().for_each(|s| *s = false);
        }
        self.selected[index] = true;
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected.iter_mut().for_each(|s| *s = false);
    }

    /// The selected option of a single-selection widget
    pub fn selected_value(&self) -> Option<&str> {
        self.options
            .iter()
            .zip(&self.selected)
            .find(|(_, selected)| **selected)
            .map(|(option, _)| option.as_str())
    }

    /// Every selected option, in widget order
    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(option, _)| option.clone())
            .collect()
    }
}

/// An ordered list of rendered items, e.g. similar bands
#[derive(Debug, Clone)]
pub struct ListRegion {
    id: &'static str,
    items: Vec<String>,
}

impl ListRegion {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push_item(&mut self, text: impl Into<String>) {
        self.items.push(text.into());
    }

    /// Replaces the content with at most `limit` items
    pub fn replace_with<I>(&mut self, items: I, limit: usize)
    where
        I: IntoIterator<Item = String>,
    {
        self.clear();
        self.items.extend(items.into_iter().take(limit));
    }
}

/// A single line of user-visible text
#[derive(Debug, Clone)]
pub struct TextRegion {
    id: &'static str,
    text: Option<String>,
}

impl TextRegion {
    pub fn new(id: &'static str) -> Self {
        Self { id, text: None }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn clear(&mut self) {
        self.text = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(mode: SelectionMode) -> SelectWidget {
        let mut widget = SelectWidget::new("test", mode);
        for band in ["abba", "coldplay", "muse"] {
            widget.append_option(band);
        }
        widget
    }

    #[test]
    fn test_single_selection_replaces_previous() {
        let mut select = widget(SelectionMode::Single);
        assert!(select.select("abba"));
        assert!(select.select("muse"));
        assert_eq!(select.selected_value(), Some("muse"));
        assert_eq!(select.selected_values(), vec!["muse"]);
    }

    #[test]
    fn test_multiple_selection_keeps_widget_order() {
        let mut select = widget(SelectionMode::Multiple);
        select.select("muse");
        select.select("abba");
        assert_eq!(select.selected_values(), vec!["abba", "muse"]);
    }

    #[test]
    fn test_select_unknown_option() {
        let mut select = widget(SelectionMode::Single);
        assert!(!select.select("metallica"));
        assert_eq!(select.selected_value(), None);
    }

    #[test]
    fn test_clear_selection() {
        let mut select = widget(SelectionMode::Multiple);
        select.select("abba");
        select.clear_selection();
        assert!(select.selected_values().is_empty());
    }

    #[test]
    fn test_replace_with_truncates_and_clears() {
        let mut list = ListRegion::new("list");
        list.push_item("old");
        list.replace_with(
            ["X", "Y", "Z", "W", "V", "U"].map(String::from),
            5,
        );
        assert_eq!(list.items(), &["X", "Y", "Z", "W", "V"]);
    }

    #[test]
    fn test_text_region() {
        let mut text = TextRegion::new("text");
        text.set_text("hello");
        assert_eq!(text.text(), Some("hello"));
        text.clear();
        assert_eq!(text.text(), None);
    }
}
