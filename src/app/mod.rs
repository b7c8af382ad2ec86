//! The interactive surface: key bindings, session state and the terminal loop.

mod input;
mod session;
mod tui;

pub use input::{Action, InputHandler, InputMode};
pub use session::{Command, Phase, Session};
pub use tui::{run, FrameView};
