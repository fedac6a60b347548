//! Provides the crate [`Error`].
use thiserror::Error;

/// Alias for a `Result<T, swegrid::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
///
/// The transformations themselves never fail,
/// only resolving a coordinate system by its identifier does.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum Error {
    /// The identifier names no supported coordinate system.
    #[error("unknown coordinate system: '{name}'")]
    UnknownSystem {
        /// The identifier as given
        name: String,
    },
}

impl Error {
    #[cold]
    pub(crate) fn new_unknown_system(name: &str) -> Self {
        Self::UnknownSystem {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::new_unknown_system("rt38");
        assert_eq!(err.to_string(), "unknown coordinate system: 'rt38'");
        assert_eq!(
            err,
            Error::UnknownSystem {
                name: "rt38".to_string()
            }
        );
    }
}
