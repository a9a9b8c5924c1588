//! Renderer outcomes.

use std::fmt;

/// Result of a renderer for a given selection.
///
/// `Unchanged` tells the UI to keep whatever figure it is already showing
/// rather than replacing it with an empty one.
#[derive(Debug, Clone, PartialEq)]
pub enum Render<T> {
    Updated(T),
    Unchanged,
}

impl<T> Render<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Render::Unchanged)
    }

    /// The new figure, if there is one.
    pub fn updated(self) -> Option<T> {
        match self {
            Render::Updated(value) => Some(value),
            Render::Unchanged => None,
        }
    }

    pub fn as_updated(&self) -> Option<&T> {
        match self {
            Render::Updated(value) => Some(value),
            Render::Unchanged => None,
        }
    }
}

/// A renderer could not produce a figure.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The selected state has no mask-use aggregate.
    UnknownState(String),
    /// No mask-use row joined any snapshot county, so there is no national average.
    NoMaskData,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownState(state) => {
                write!(f, "No mask-use data for state '{}'", state)
            }
            RenderError::NoMaskData => write!(f, "No mask-use data matched any county"),
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updated_and_unchanged_accessors() {
        let updated: Render<u8> = Render::Updated(3);
        assert!(!updated.is_unchanged());
        assert_eq!(updated.as_updated(), Some(&3));
        assert_eq!(updated.updated(), Some(3));

        let unchanged: Render<u8> = Render::Unchanged;
        assert!(unchanged.is_unchanged());
        assert_eq!(unchanged.updated(), None);
    }

    #[test]
    fn error_messages_name_the_state() {
        let err = RenderError::UnknownState("Narnia".to_string());
        assert_eq!(err.to_string(), "No mask-use data for state 'Narnia'");
    }
}
