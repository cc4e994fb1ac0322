//! Dog breeds shown in the gallery.

use crate::shared::config::{IMAGE_SERVICE_BASE, IMAGE_SIZE};
use serde::Serialize;

/// Description shared by every breed card.
pub const BREED_DESCRIPTION: &str =
    "A beloved dog breed known for its friendly nature and adaptability.";

/// One breed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreedEntry {
    pub name: &'static str,
}

impl BreedEntry {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Image lookup key: lowercased name, first space replaced with a hyphen.
    pub fn image_key(&self) -> String {
        image_key(self.name)
    }

    pub fn image_url(&self) -> String {
        format!("{}/{}/?{}", IMAGE_SERVICE_BASE, IMAGE_SIZE, self.image_key())
    }

    pub fn description(&self) -> &'static str {
        BREED_DESCRIPTION
    }
}

pub const BREEDS: [BreedEntry; 6] = [
    BreedEntry::new("Labrador Retriever"),
    BreedEntry::new("German Shepherd"),
    BreedEntry::new("Golden Retriever"),
    BreedEntry::new("French Bulldog"),
    BreedEntry::new("Bulldog"),
    BreedEntry::new("Poodle"),
];

/// Derive the placeholder image key from a breed name.
///
/// Only the first space is replaced; any later spaces are kept as-is.
pub fn image_key(name: &str) -> String {
    name.to_lowercase().replacen(' ', "-", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breeds_order() {
        let names: Vec<_> = BREEDS.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            vec![
                "Labrador Retriever",
                "German Shepherd",
                "Golden Retriever",
                "French Bulldog",
                "Bulldog",
                "Poodle",
            ]
        );
    }

    #[test]
    fn test_image_key() {
        assert_eq!(image_key("German Shepherd"), "german-shepherd");
        assert_eq!(image_key("Poodle"), "poodle");
        assert_eq!(image_key("Great Pyrenees Mountain"), "great-pyrenees mountain");
        assert_eq!(image_key(""), "");
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            BREEDS[0].image_url(),
            "https://source.unsplash.com/400x300/?labrador-retriever"
        );
        assert_eq!(
            BREEDS[4].image_url(),
            "https://source.unsplash.com/400x300/?bulldog"
        );
    }

    #[test]
    fn test_description_is_shared() {
        assert!(BREEDS.iter().all(|b| b.description() == BREED_DESCRIPTION));
    }
}
