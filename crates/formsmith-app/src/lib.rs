//! formsmith-app - Application state and orchestration for Formsmith
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the field list, the drag reorder protocol, summary
//! generation, result presentation state, configuration loading, the
//! clipboard seam and the Engine that ties them together.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod confirm_dialog;
pub mod drag;
pub mod engine;
pub mod field_list;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod result;
pub mod signals;
pub mod state;
pub mod summary;
pub mod text_input;

// Re-export primary types
pub use clipboard::{ClipboardService, SystemClipboard};
pub use config::Settings;
pub use drag::{DragState, Reorder};
pub use engine::Engine;
pub use field_list::FieldList;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppState, CardRegion, EditTarget, UiMode};
