pub mod catalog;
pub mod goal;
pub mod profile;
