//! Errors reported by this crate.
//!
//! Only caller input can fail. Missing values are plain `None`/`false` results and a broken tree
//! invariant is a panic (see [`CheckPolicy`][crate::check::CheckPolicy]), so neither shows up
//! here.

/// Invalid arguments to the sliding-window maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// A window of size zero has no maximum.
    #[error("window size must be at least 1")]
    EmptyWindow,
    /// A stride of zero would never advance the window.
    #[error("stride must be at least 1")]
    ZeroStride,
    /// The window doesn't fit in the input even once.
    #[error("window of size {window} does not fit in {len} values")]
    WindowTooLarge {
        /// Requested window size.
        window: usize,
        /// Length of the input.
        len: usize,
    },
}

/// A configuration string didn't name a known mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{given}`, expected one of: {expected}")]
pub struct ParseModeError {
    pub(crate) kind: &'static str,
    pub(crate) given: String,
    pub(crate) expected: &'static str,
}

impl ParseModeError {
    /// The text that failed to parse.
    pub fn given(&self) -> &str {
        &self.given
    }
}
