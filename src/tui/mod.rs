//! Terminal User Interface module
//!
//! A ratatui front end over [`Session`](crate::services::Session): the
//! friend list on the left, the add-friend or split form on the right.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs and panel forms
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
