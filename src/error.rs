use crate::input::ValueKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// The value handed in was not a string (or was missing altogether)
    #[error("{}", invalid_input_message(.received))]
    InvalidInput { received: ValueKind },

    /// Nothing left to convert once whitespace and delimiters are removed
    #[error("Input string is empty after trimming.")]
    EmptyInput,
}

fn invalid_input_message(received: &ValueKind) -> String {
    match received {
        ValueKind::Undefined | ValueKind::Null => {
            format!("Input is {}. Please provide a valid string.", received)
        }
        other => format!("Input type is {}. Expected a string.", other),
    }
}

pub type Result<T> = std::result::Result<T, CaseError>;
