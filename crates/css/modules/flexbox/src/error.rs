//! Errors surfaced by flex layout.

use crate::host::NodeRef;
use core::fmt;

/// Failure to construct or run a flex layout.
///
/// Unparseable configuration never errors; it falls back to defaults instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The host has no computed style for a node the layout references.
    MissingNode(NodeRef),
}

impl fmt::Display for LayoutError {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNode(node) => write!(formatter, "host node {node} does not exist"),
        }
    }
}

impl core::error::Error for LayoutError {}
