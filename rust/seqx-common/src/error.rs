use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Name of the offending argument, when the error is an [`ErrorKind::OutOfRange`].
    pub fn param_name(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::OutOfRange { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    pub fn out_of_range(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::OutOfRange {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_operation(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidOperation {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Clone, Error)]
pub enum ErrorKind {
    #[error("argument '{name}' is out of range: {message}")]
    OutOfRange { name: String, message: String },

    #[error("invalid operation {name}: {message}")]
    InvalidOperation { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
