pub mod components;
pub mod config;
pub mod sim;
pub mod systems;
