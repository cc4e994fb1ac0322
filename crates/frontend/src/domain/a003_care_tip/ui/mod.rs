pub mod grid;

pub use grid::CareTipGrid;
