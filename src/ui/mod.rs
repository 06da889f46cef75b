// UI module for the Sei action panel
// This module handles all the terminal UI rendering logic

mod draw;
mod main_view;
mod utils;
mod waiting;

// Re-export the public functions
pub use draw::draw;
