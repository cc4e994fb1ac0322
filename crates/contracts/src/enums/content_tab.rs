use crate::domain::a002_dog_fact::FACTS_HEADING;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tabs of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTab {
    #[default]
    Breeds,
    Facts,
    Care,
}

/// How a tab's content is framed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFrame {
    /// Rendered as-is, without a surrounding card.
    Bare,
    /// Wrapped in a card, optionally with a card heading.
    Card { heading: Option<&'static str> },
}

impl ContentTab {
    /// Value carried by the tab control.
    pub fn code(&self) -> &'static str {
        match self {
            ContentTab::Breeds => "breeds",
            ContentTab::Facts => "facts",
            ContentTab::Care => "care",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContentTab::Breeds => "Dog Breeds",
            ContentTab::Facts => "Fun Facts",
            ContentTab::Care => "Care Tips",
        }
    }

    /// Icon shown on the tab trigger.
    pub fn icon_name(&self) -> &'static str {
        match self {
            ContentTab::Breeds => "paw",
            ContentTab::Facts => "info",
            ContentTab::Care => "heart",
        }
    }

    pub fn panel(&self) -> PanelFrame {
        match self {
            ContentTab::Breeds => PanelFrame::Bare,
            ContentTab::Facts => PanelFrame::Card {
                heading: Some(FACTS_HEADING),
            },
            ContentTab::Care => PanelFrame::Card { heading: None },
        }
    }

    /// All tabs in display order.
    pub fn all() -> [ContentTab; 3] {
        [ContentTab::Breeds, ContentTab::Facts, ContentTab::Care]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "breeds" => Some(ContentTab::Breeds),
            "facts" => Some(ContentTab::Facts),
            "care" => Some(ContentTab::Care),
            _ => None,
        }
    }
}

impl FromStr for ContentTab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentTab::from_code(s).ok_or_else(|| anyhow::anyhow!("unknown content tab: {:?}", s))
    }
}

impl std::fmt::Display for ContentTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_parse() {
        for tab in ContentTab::all() {
            assert_eq!(tab.code().parse::<ContentTab>().unwrap(), tab);
        }
        let err = "kennel".parse::<ContentTab>().unwrap_err();
        assert!(err.to_string().contains("kennel"));
        assert_eq!(ContentTab::from_code("Breeds"), None);
    }

    #[test]
    fn test_default_is_breeds() {
        assert_eq!(ContentTab::default(), ContentTab::Breeds);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = ContentTab::all().iter().map(|t| t.display_name()).collect();
        assert_eq!(labels, vec!["Dog Breeds", "Fun Facts", "Care Tips"]);
    }

    #[test]
    fn test_panel_frames() {
        assert_eq!(ContentTab::Breeds.panel(), PanelFrame::Bare);
        assert_eq!(
            ContentTab::Facts.panel(),
            PanelFrame::Card {
                heading: Some("Fascinating Dog Facts")
            }
        );
        assert_eq!(ContentTab::Care.panel(), PanelFrame::Card { heading: None });
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(
            serde_json::to_string(&ContentTab::Care).unwrap(),
            "\"care\""
        );
        let tab: ContentTab = serde_json::from_str("\"facts\"").unwrap();
        assert_eq!(tab, ContentTab::Facts);
    }
}
