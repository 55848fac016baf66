//! bracken - structural pair selection engine
//!
//! A headless engine for locating the innermost pair of bracket or quote
//! delimiters enclosing a caret or selection, and acting on the result:
//! select the enclosed span, or delete the two delimiter characters while
//! leaving the content intact. State flows through an Elm-style
//! message/update loop over a rope-backed document.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod pairs;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use pairs::Family;
