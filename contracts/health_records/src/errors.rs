use soroban_sdk::contracttype;

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Validation errors: invalid input parameters or ranges
    Validation = 1,
    /// Authorization errors: missing role or record access
    Authorization = 2,
    /// Transient errors: temporary rejections that may succeed later
    Transient = 3,
    /// System errors: lifecycle, pausing, collaborator failures
    System = 4,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Low severity: caller mistakes, nothing to act on
    Low = 1,
    /// Medium severity: rejected access attempts worth monitoring
    Medium = 2,
    /// High severity: misconfiguration or collaborator failure
    High = 3,
    /// Critical severity: operations halted
    Critical = 4,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    InvalidRange = 5,
    CooldownActive = 6,
    Paused = 7,
    RoleAuthorityFailure = 8,
    StorageCorrupted = 9,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidInput | ContractError::InvalidRange => ErrorCategory::Validation,
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::CooldownActive => ErrorCategory::Transient,
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::Paused
            | ContractError::RoleAuthorityFailure
            | ContractError::StorageCorrupted => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::AlreadyInitialized
            | ContractError::InvalidInput
            | ContractError::InvalidRange
            | ContractError::CooldownActive => ErrorSeverity::Low,
            ContractError::Unauthorized => ErrorSeverity::Medium,
            ContractError::NotInitialized | ContractError::RoleAuthorityFailure => {
                ErrorSeverity::High
            }
            ContractError::Paused | ContractError::StorageCorrupted => ErrorSeverity::Critical,
        }
    }

    /// Returns whether the same call may succeed later without the caller
    /// changing its inputs. The contract itself never retries.
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            ContractError::CooldownActive | ContractError::Paused
        )
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller lacks the required role or record access",
            ContractError::InvalidInput => "Invalid input parameters provided",
            ContractError::InvalidRange => "Range end must be greater than range start",
            ContractError::CooldownActive => "Access request cooldown is still active",
            ContractError::Paused => "Operation is currently paused",
            ContractError::RoleAuthorityFailure => "Role authority call failed",
            ContractError::StorageCorrupted => "Record storage is inconsistent",
        }
    }
}
