//! Terminal replay interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! Three layers:
//!
//! - **[`app`]** — replay state, keyboard event loop, auto-play pacing
//! - **[`render`]** — stateless render functions for each frame kind and the
//!   status bar
//! - **[`theme`]** — centralized color palette
//!
//! The entry point is [`App`]: construct it with a recorded
//! [`Trace`](crate::snapshot::Trace) and call [`App::run`].
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod render;
pub mod theme;

pub use app::App;
