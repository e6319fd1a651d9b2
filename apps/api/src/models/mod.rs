pub mod opportunity;
pub mod profile;
