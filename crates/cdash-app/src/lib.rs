//! cdash-app - Application state and fetch orchestration for Client Dashboard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: page instances with their load states, the message/update
//! loop, background fetch tasks, configuration loading and signal handling.
//! It knows nothing about terminals; the TUI feeds it [`InputKey`]s and
//! renders [`AppState`].

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod join;
pub mod load_state;
pub mod message;
pub mod page;
pub mod process;
pub mod route;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use join::join_first_failure;
pub use load_state::{FetchTicket, LoadState, PageError, PageId};
pub use message::Message;
pub use page::{Page, PageInstance, UserDetail};
pub use route::{parse_user_id, NavSection, Route};
pub use state::{AppState, UiMode, UsersViewSeed};
