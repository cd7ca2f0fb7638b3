use super::{SelectWidget, SelectionMode, WidgetRefresher};

/// Redraws selection widgets on stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRefresher;

impl TerminalRefresher {
    pub fn new() -> Self {
        Self
    }
}

impl WidgetRefresher for TerminalRefresher {
    fn refresh(&self, widget: &SelectWidget) {
        tracing::debug!(widget = widget.id(), options = widget.options().len(), "Refreshing widget");
        print!("{}", format_widget(widget));
    }
}

/// One line per option, selected options marked with `*`
pub fn format_widget(widget: &SelectWidget) -> String {
    let mode = match widget.mode() {
        SelectionMode::Single => "single",
        SelectionMode::Multiple => "multiple",
    };
    let selected = widget.selected_values();

    let mut out = format!("{} ({}, {} options):\n", widget.id(), mode, widget.options().len());
    for option in widget.options() {
        let marker = if selected.contains(option) { '*' } else { ' ' };
        out.push_str(&format!(" {} {}\n", marker, option));
    }
    out
}
