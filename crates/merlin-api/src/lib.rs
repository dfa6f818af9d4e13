//! Merlin-api: state handle and view models for the front-end shell
//!
//! The shell holds one [`AppState`] and renders the DTOs built by [`views`].

pub mod dto;
pub mod state;
pub mod views;

pub use state::{AppState, Tab, UiState};
