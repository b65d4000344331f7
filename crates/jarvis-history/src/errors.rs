use thiserror::Error;

/// Result type alias using JarvisError
pub type Result<T> = std::result::Result<T, JarvisError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and display in the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Command contract
    NotInvertible,
    InverseBeforeExecute,

    // Domain state
    NotFound,
    IndexOutOfBounds,
    InvalidInput,
    AlreadyExists,

    // History
    InsufficientHistory,

    // Configuration
    InvalidConfig,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotInvertible => "ERR_NOT_INVERTIBLE",
            ExErrorKind::InverseBeforeExecute => "ERR_INVERSE_BEFORE_EXECUTE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::IndexOutOfBounds => "ERR_INDEX_OUT_OF_BOUNDS",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::InsufficientHistory => "ERR_INSUFFICIENT_HISTORY",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the
/// context needed to render the failure in a log line.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    command: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            command: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add command word context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(command) = &self.command {
            write!(f, " (command: {})", command)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for command execution and history operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JarvisError {
    // ===== Command Contract =====
    /// Inverse execution requested on a command that declares none
    #[error("Command '{command}' cannot be inversely executed")]
    CommandNotInvertible { command: String },

    /// Inverse execution requested before the forward execution captured its state
    #[error("Command '{command}' cannot be inverted before it has been executed")]
    InverseBeforeExecute { command: String },

    // ===== Domain State =====
    /// Referenced entity does not exist in the domain state
    #[error("{entity} not found: {id}")]
    EntityNotFound { entity: String, id: String },

    /// One-based index does not address an existing entry
    #[error("Index {index} is out of bounds (list has {len} entries)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Entity already present in the domain state
    #[error("Duplicate {entity}: {id}")]
    DuplicateEntity { entity: String, id: String },

    /// Rejected argument
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    // ===== History =====
    /// Multi-step rollback/commit asked for more entries than the ledger holds
    #[error("Cannot {direction} {requested} command(s): only {available} available")]
    InsufficientHistory {
        direction: String,
        requested: usize,
        available: usize,
    },

    // ===== Configuration =====
    /// Configuration value rejected during load or validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ===== Internal =====
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl JarvisError {
    /// Shorthand for the dedicated "not invertible" failure
    pub fn not_invertible(command: impl Into<String>) -> Self {
        JarvisError::CommandNotInvertible {
            command: command.into(),
        }
    }

    /// Get the canonical error kind
    pub fn kind(&self) -> ExErrorKind {
        ExError::from(self).kind()
    }
}

/// Conversion from JarvisError to ExError
impl From<&JarvisError> for ExError {
    fn from(err: &JarvisError) -> Self {
        match err {
            JarvisError::CommandNotInvertible { command } => {
                ExError::new(ExErrorKind::NotInvertible)
                    .with_command(command)
                    .with_message("Command has no inverse execution")
            }

            JarvisError::InverseBeforeExecute { command } => {
                ExError::new(ExErrorKind::InverseBeforeExecute)
                    .with_command(command)
                    .with_message("Inverse execution requested before execution")
            }

            JarvisError::EntityNotFound { entity, id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(id)
                .with_message(format!("{} not found", entity)),

            JarvisError::IndexOutOfBounds { index, len } => {
                ExError::new(ExErrorKind::IndexOutOfBounds)
                    .with_message(format!("Index {} out of bounds for {} entries", index, len))
            }

            JarvisError::DuplicateEntity { entity, id } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(id)
                    .with_message(format!("Duplicate {}", entity))
            }

            JarvisError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }

            JarvisError::InsufficientHistory {
                direction,
                requested,
                available,
            } => ExError::new(ExErrorKind::InsufficientHistory).with_message(format!(
                "Requested {} {} step(s), {} available",
                requested, direction, available
            )),

            JarvisError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            JarvisError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<JarvisError> for ExError {
    fn from(err: JarvisError) -> Self {
        ExError::from(&err)
    }
}

/// Conversion from toml::de::Error to JarvisError
impl From<toml::de::Error> for JarvisError {
    fn from(err: toml::de::Error) -> Self {
        JarvisError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
