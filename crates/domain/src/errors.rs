use thiserror::Error;

/// Coarse classification used when a failed branch is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Timeout, connection refused, socket error.
    NetworkFailure,
    /// Malformed or mismatched response.
    ProtocolFailure,
    /// Well-formed response with no answer and no usable referral.
    EmptyResult,
}

impl FailureClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureClass::NetworkFailure => "network",
            FailureClass::ProtocolFailure => "protocol",
            FailureClass::EmptyResult => "empty",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Network failure talking to {server}: {reason}")]
    Network { server: String, reason: String },

    #[error("Protocol failure from {server}: {reason}")]
    Protocol { server: String, reason: String },

    #[error("No usable response from {server}")]
    NoUsableResponse { server: String },

    #[error("Referral loop: {server} was already tried")]
    ReferralLoop { server: String },

    #[error("Referral depth exceeded after {depth} hops")]
    ReferralDepthExceeded { depth: usize },
}

impl DomainError {
    pub fn failure_class(&self) -> FailureClass {
        match self {
            DomainError::Network { .. } => FailureClass::NetworkFailure,
            DomainError::Protocol { .. } | DomainError::InvalidDomainName(_) => {
                FailureClass::ProtocolFailure
            }
            DomainError::NoUsableResponse { .. }
            | DomainError::ReferralLoop { .. }
            | DomainError::ReferralDepthExceeded { .. } => FailureClass::EmptyResult,
        }
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self.failure_class(), FailureClass::NetworkFailure)
    }
}
