pub mod a001_breed;
pub mod a002_dog_fact;
pub mod a003_care_tip;
