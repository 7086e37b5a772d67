use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The phase of analysis an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
    Semantic,
}

/// An analysis error together with the position it was raised at.
///
/// Every error is terminal for the run that produced it; there is no
/// recovery or resynchronisation.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    context: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            context: None,
        }
    }

    /// Attaches a quoted block of the surrounding source lines, shown
    /// whenever the originating source text was available to the analyser.
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn detail(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnscannableCharacter { .. } => "UnscannableCharacter",
            ErrorImpl::TokenAfterProgramEnd { .. } => "TokenAfterProgramEnd",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::IncompatibleTypes { .. } => "IncompatibleTypes",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnscannableCharacter { .. } | ErrorImpl::TokenAfterProgramEnd { .. } => {
                ErrorKind::Lex
            }
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::Parse,
            ErrorImpl::UndeclaredVariable { .. }
            | ErrorImpl::DuplicateDeclaration { .. }
            | ErrorImpl::IncompatibleTypes { .. } => ErrorKind::Semantic,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("character {character:?} matches no token pattern:\n>\t{line_text}")]
    UnscannableCharacter { character: String, line_text: String },
    #[error("unexpected token {token:?} after end of program")]
    TokenAfterProgramEnd { token: String },
    #[error("expected token type(s): {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("variable {variable:?} not declared")]
    UndeclaredVariable { variable: String },
    #[error("variable {variable:?} already declared")]
    DuplicateDeclaration { variable: String },
    #[error("incompatible variable types: {variables:?}, expected {expected}")]
    IncompatibleTypes {
        variables: Vec<String>,
        expected: String,
    },
}
