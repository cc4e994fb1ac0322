//! Dog trivia shown on the "Fun Facts" tab.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactEntry {
    pub text: &'static str,
}

impl FactEntry {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }
}

/// Heading of the card that frames the fact list.
pub const FACTS_HEADING: &str = "Fascinating Dog Facts";

// Facts are identified by position only.
pub const FACTS: [FactEntry; 6] = [
    FactEntry::new("Dogs have a sense of time and can tell how long you've been gone."),
    FactEntry::new("A dog's nose print is unique, much like a human's fingerprint."),
    FactEntry::new(
        "Dalmatians are born completely white and develop their spots as they grow older.",
    ),
    FactEntry::new("The Basenji is the only breed of dog that can't bark, but they can yodel!"),
    FactEntry::new("A dog's average body temperature is 101.2°F (38.4°C)."),
    FactEntry::new("Dogs can understand up to 250 words and gestures."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facts_verbatim_in_order() {
        assert_eq!(
            FACTS.map(|f| f.text),
            [
                "Dogs have a sense of time and can tell how long you've been gone.",
                "A dog's nose print is unique, much like a human's fingerprint.",
                "Dalmatians are born completely white and develop their spots as they grow older.",
                "The Basenji is the only breed of dog that can't bark, but they can yodel!",
                "A dog's average body temperature is 101.2°F (38.4°C).",
                "Dogs can understand up to 250 words and gestures.",
            ]
        );
    }
}
