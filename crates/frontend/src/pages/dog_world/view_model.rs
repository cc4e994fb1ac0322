//! ViewModel for the dog world page

use contracts::enums::content_tab::ContentTab;
use contracts::shared::tab_state::TabState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DogWorldVm {
    pub state: RwSignal<TabState>,
    /// Value bound to the tab control.
    pub selected_code: RwSignal<String>,
}

impl DogWorldVm {
    pub fn new() -> Self {
        let state = TabState::new();
        Self {
            selected_code: RwSignal::new(state.active().code().to_string()),
            state: RwSignal::new(state),
        }
    }

    /// Panels the page renders for the current state.
    pub fn visible_panels(&self) -> Signal<Vec<ContentTab>> {
        let state = self.state;
        Signal::derive(move || state.get().visible_panels())
    }

    pub fn set_tab(&self, tab: ContentTab) {
        let mut next = self.state.get_untracked();
        if next.select(tab) {
            log::debug!("tab switched to {}", tab);
            self.state.set(next);
        }
    }

    /// Apply a code coming back from the tab control. Unknown codes are ignored.
    pub fn select_code(&self, code: &str) {
        match code.parse::<ContentTab>() {
            Ok(tab) => self.set_tab(tab),
            Err(err) => log::warn!("ignoring tab selection: {}", err),
        }
    }
}

impl Default for DogWorldVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_breeds() {
        let vm = DogWorldVm::new();
        assert_eq!(vm.state.get_untracked().active(), ContentTab::Breeds);
        assert_eq!(vm.selected_code.get_untracked(), "breeds");
    }

    #[test]
    fn test_select_code() {
        let vm = DogWorldVm::new();
        for tab in ContentTab::all() {
            vm.select_code(tab.code());
            assert_eq!(vm.state.get_untracked().visible_panels(), vec![tab]);
        }
        vm.select_code("care");
        vm.select_code("care");
        assert_eq!(vm.state.get_untracked().visible_panels(), vec![ContentTab::Care]);
    }

    #[test]
    fn test_unknown_code_keeps_state() {
        let vm = DogWorldVm::new();
        vm.select_code("facts");
        vm.select_code("kennel");
        assert_eq!(vm.state.get_untracked().active(), ContentTab::Facts);
        assert_eq!(vm.state.get_untracked().visible_panels(), vec![ContentTab::Facts]);
    }
}
