//! Error types for smiles-encoder.

use crate::constants::OneHot;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while splitting, encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A character no tokenizer rule accepts at its position.
    #[error("Unexpected SMILES character: {character}, {smiles}")]
    MalformedInput { character: char, smiles: String },

    /// A `[` without a matching `]` before the end of input.
    #[error("Unclosed bracket atom detected: {smiles}")]
    UnterminatedBracket { smiles: String },

    /// A token the vocabulary was never built with.
    #[error("Unknown SMILES token: {token}")]
    UnknownToken { token: String },

    /// A vector that matches no vocabulary entry.
    #[error("Unexpected character vector: {vector:?}")]
    UnknownVector { vector: OneHot },
}

impl Error {
    pub(crate) fn malformed(character: char, smiles: &str) -> Self {
        Error::MalformedInput {
            character,
            smiles: smiles.to_string(),
        }
    }
}

#[cfg(feature = "python")]
impl From<Error> for pyo3::PyErr {
    fn from(error: Error) -> Self {
        pyo3::exceptions::PyValueError::new_err(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::malformed('?', "C?");
        assert_eq!(err.to_string(), "Unexpected SMILES character: ?, C?");

        let err = Error::UnknownVector {
            vector: vec![0, 1],
        };
        assert_eq!(err.to_string(), "Unexpected character vector: [0, 1]");
    }
}
