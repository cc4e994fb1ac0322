use crate::enums::content_tab::ContentTab;

/// Selected tab of the page.
///
/// Starts on [`ContentTab::Breeds`] and changes only through [`TabState::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    active: ContentTab,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ContentTab {
        self.active
    }

    /// Switch to `tab`. Returns `false` when it was already active.
    pub fn select(&mut self, tab: ContentTab) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }

    pub fn shows(&self, panel: ContentTab) -> bool {
        self.active == panel
    }

    /// Panels to render, in display order. Always exactly one.
    pub fn visible_panels(&self) -> Vec<ContentTab> {
        ContentTab::all()
            .into_iter()
            .filter(|panel| self.shows(*panel))
            .collect()
    }
}
