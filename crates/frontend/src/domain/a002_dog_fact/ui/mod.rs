pub mod list;

pub use list::FactList;
