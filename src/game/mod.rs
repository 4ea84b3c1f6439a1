//! Game module - board view model, selection gesture and server requests

pub mod board;
pub mod plugin;
pub mod promotion;
pub mod requests;
pub mod selection;
pub mod session;

pub use board::{BoardState, SquareId};
pub use plugin::GamePlugin;
pub use selection::{handle_square_click, ClickOutcome, Selection};
