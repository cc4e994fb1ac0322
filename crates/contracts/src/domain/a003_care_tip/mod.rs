//! Care tips shown on the "Care Tips" tab.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareTipEntry {
    pub title: &'static str,
    pub body: &'static str,
}

impl CareTipEntry {
    pub const fn new(title: &'static str, body: &'static str) -> Self {
        Self { title, body }
    }
}

/// Heading rendered above the tip grid.
pub const CARE_TIPS_HEADING: &str = "Essential Dog Care Tips";

pub const CARE_TIPS: [CareTipEntry; 6] = [
    CareTipEntry::new(
        "Balanced Diet",
        "Provide a balanced diet appropriate for your dog's age, size, and activity level.",
    ),
    CareTipEntry::new(
        "Regular Exercise",
        "Ensure your dog gets regular exercise through walks, playtime, and activities.",
    ),
    CareTipEntry::new(
        "Veterinary Check-ups",
        "Schedule regular check-ups with a veterinarian for vaccinations and health screenings.",
    ),
    CareTipEntry::new(
        "Grooming",
        "Groom your dog regularly, including brushing their coat and teeth.",
    ),
    CareTipEntry::new(
        "Mental Stimulation",
        "Offer mental stimulation through training, puzzles, and interactive toys.",
    ),
    CareTipEntry::new(
        "Love and Attention",
        "Spend quality time with your dog, showing affection and building a strong bond.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_care_tips_shape() {
        assert_eq!(CARE_TIPS.len(), 6);
        assert!(CARE_TIPS
            .iter()
            .all(|tip| !tip.title.is_empty() && !tip.body.is_empty()));
    }

    #[test]
    fn test_care_tips_order() {
        assert_eq!(
            CARE_TIPS.map(|tip| tip.title),
            [
                "Balanced Diet",
                "Regular Exercise",
                "Veterinary Check-ups",
                "Grooming",
                "Mental Stimulation",
                "Love and Attention",
            ]
        );
        assert_eq!(
            CARE_TIPS[0].body,
            "Provide a balanced diet appropriate for your dog's age, size, and activity level."
        );
        assert_eq!(
            CARE_TIPS[5].body,
            "Spend quality time with your dog, showing affection and building a strong bond."
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(CARE_TIPS[3]).unwrap();
        assert_eq!(json["title"], "Grooming");
        assert_eq!(
            json["body"],
            "Groom your dog regularly, including brushing their coat and teeth."
        );
    }
}
