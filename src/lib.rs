//! Chatpane
//!
//! A three-pane terminal chat client over mock data: contacts on the left,
//! the active conversation in the middle, message search on the right.
//!
//! The crate follows a pure core / impure shell split. `fixtures`,
//! `view_state` and `state` are pure and tested without a terminal; `view`
//! owns the terminal and the event loop.

pub mod config;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

// Re-export startup integration
pub mod integration;

#[cfg(test)]
mod test_harness;
