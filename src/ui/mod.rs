//! UI module
//!
//! MVI (Model-View-Intent) layout:
//! - Model (state.rs): the App struct and its state data
//! - View (view/): pure functions mapping State to widgets
//! - Intent (actions.rs): user interactions as explicit semantic Actions

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::{handle_key_event, handle_mouse_event};
pub use state::App;
pub use view::render;
