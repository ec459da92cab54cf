use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    EmptyName,
    #[error("mobile number is required")]
    EmptyMobile,
    #[error("invalid mobile number format: '{0}'")]
    InvalidMobile(String),
    #[error("list name cannot be empty")]
    EmptyListName,
    #[error("invalid interaction type: {0} (expected call|sms|whatsapp)")]
    InvalidInteractionType(String),
    #[error("invalid contact on row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: Box<CoreError>,
    },
    #[error("cannot delete the only remaining list")]
    LastListRemaining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    /// Input breaks a data-model rule; nothing was changed.
    Validation,
    /// The mutation is structurally forbidden; nothing was changed.
    Precondition,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::LastListRemaining => CoreErrorKind::Precondition,
            CoreError::EmptyName
            | CoreError::EmptyMobile
            | CoreError::InvalidMobile(_)
            | CoreError::EmptyListName
            | CoreError::InvalidInteractionType(_)
            | CoreError::InvalidRow { .. } => CoreErrorKind::Validation,
        }
    }
}
