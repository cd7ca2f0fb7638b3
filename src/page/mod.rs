//! Display surface of the recommendation client
//!
//! A `Page` owns every region the client renders into. Option lists live in
//! `SelectWidget`s whose visual state is kept in sync by an external
//! `WidgetRefresher`; result lists and confirmation text are plain regions.

use std::fmt::Display;

pub mod events;
pub mod terminal;
pub mod widgets;

pub use events::{EventOutcome, FormSubmission, RenderOutcome, UiEvent};
pub use terminal::TerminalRefresher;
pub use widgets::{ListRegion, SelectWidget, SelectionMode, TextRegion};

/// Re-renders a selection widget after its option list changed
///
/// Implementations only redraw the options already present in the widget.
#[cfg_attr(test, mockall::automock)]
pub trait WidgetRefresher: Send + Sync {
    fn refresh(&self, widget: &SelectWidget);
}

/// Every render target of the client
#[derive(Debug, Clone)]
pub struct Page {
    /// Single-selection list used for similarity lookups
    pub band_select: SelectWidget,
    /// Multi-selection list used for registration
    pub likes_select: SelectWidget,
    pub similar_list: ListRegion,
    pub user_list: ListRegion,
    pub registration: TextRegion,
    /// Transport and parse failures shown to the user
    pub status: TextRegion,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            band_select: SelectWidget::new("bandSelect", SelectionMode::Single),
            likes_select: SelectWidget::new("userSelect", SelectionMode::Multiple),
            similar_list: ListRegion::new("bandList"),
            user_list: ListRegion::new("userBandList"),
            registration: TextRegion::new("userAddedText"),
            status: TextRegion::new("status"),
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for list in [&self.similar_list, &self.user_list] {
            if list.items().is_empty() {
                continue;
            }
            writeln!(f, "{}:", list.id())?;
            for (rank, item) in list.items().iter().enumerate() {
                writeln!(f, "  {}. {}", rank + 1, item)?;
            }
        }
        for text in [&self.registration, &self.status] {
            if let Some(value) = text.text() {
                writeln!(f, "{}: {}", text.id(), value)?;
            }
        }
        Ok(())
    }
}
