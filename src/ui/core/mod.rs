//! Core UI functionality for Folio.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`context`] - Shared services and per-frame render data
//! - [`event_handler`] - Keyboard, mouse and tick events
//! - [`task_manager`] - Background relay calls and delayed actions
//!
//! Components turn input into [`Action`]s; the app component applies them to
//! the navigation controller and the other services. Anything asynchronous
//! reports back through an action channel drained on every tick.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use context::{AppContext, RenderContext};
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
