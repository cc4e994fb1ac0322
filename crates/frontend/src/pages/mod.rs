pub mod dog_world;
