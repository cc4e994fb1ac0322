pub mod gallery;

pub use gallery::BreedGallery;
