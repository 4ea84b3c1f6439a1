pub mod api;
pub mod core;
pub mod game;
pub mod ui;
