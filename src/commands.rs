//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

/// Side effect requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the host view
    Redraw,
}
