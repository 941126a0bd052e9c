pub mod addons;
pub mod update;
