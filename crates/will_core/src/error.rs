use shared::{
    domain::WillSection,
    error::{ErrorKind, FieldErrors, GENERIC_FAILURE_MESSAGE},
};
use thiserror::Error;

use crate::registration::RegistrationStep;

/// Failure talking to the auth API. `Display` is the text shown to the user.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Non-2xx response; the server's message is surfaced verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// No usable response at all.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    Transport { detail: String },
    /// A 2xx response whose body could not be decoded.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    MalformedResponse { detail: String },
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Api { .. } => ErrorKind::Api,
            Self::Transport { .. } | Self::MalformedResponse { .. } => ErrorKind::Transport,
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("please correct the highlighted fields: {0}")]
    Validation(FieldErrors),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("registration already finished")]
    Finished,
    #[error("a new code can only be requested while entering the code")]
    ResendUnavailable { step: RegistrationStep },
}

impl RegistrationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::Finished | Self::ResendUnavailable { .. } => {
                ErrorKind::Validation
            }
            Self::Auth(err) => err.kind(),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WillError {
    #[error("the will can only be submitted from the witnesses section (currently on {section})")]
    SubmitOutsideWitnesses { section: WillSection },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackageError {
    #[error("unknown package '{0}'")]
    UnknownPackage(String),
}
