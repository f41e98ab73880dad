pub mod empty;
pub mod quiz;
