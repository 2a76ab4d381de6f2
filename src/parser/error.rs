use crate::TypeFamily;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No parser registered for type `{family}` or any of its ancestors")]
    NoParserRegistered { family: TypeFamily },

    #[error("A parser is already registered for type `{family}`")]
    DuplicateRegistration { family: TypeFamily },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Lookup(#[from] RegistryError),

    #[error("Invalid `{family}` value {input:?}: {reason}")]
    InvalidValue {
        family: TypeFamily,
        input: String,
        reason: String,
    },

    #[error("Type `{family}` needs {expected} type parameters, found {found}")]
    MissingTypeParameters {
        family: TypeFamily,
        expected: usize,
        found: usize,
    },
}

impl ParseError {
    pub(crate) fn invalid(family: TypeFamily, input: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            family,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
