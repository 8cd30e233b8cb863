//! Centralized Error Handling Module
//!
//! Every failure has a unique error code so log lines and user-facing
//! messages can distinguish "quota exceeded" from "network timeout" from
//! "malformed upstream payload".
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - CFG_xxx: Configuration errors
//! - INPUT_xxx: Input validation errors
//! - QUOTA_xxx: Grant quota errors
//! - NET_xxx: Network/timeout errors
//! - UPSTREAM_xxx: Webacy API errors
//! - PARSE_xxx: Response parse/coercion errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Configuration Errors
    // ============================================
    /// WEBACY_API_KEY absent or blank
    ConfigMissingApiKey,
    /// Invalid configuration value (non-numeric limit, etc.)
    ConfigInvalidValue,

    // ============================================
    // Input Validation Errors
    // ============================================
    /// Empty contract address
    InputEmptyAddress,
    /// Chain name/code not in the supported registry
    InputUnknownChain,

    // ============================================
    // Quota Errors
    // ============================================
    /// Grant credit ceiling reached
    QuotaExceeded,

    // ============================================
    // Network Errors
    // ============================================
    /// Request exceeded the deadline
    NetworkTimeout,
    /// Connection to the API could not be established
    NetworkConnection,

    // ============================================
    // Upstream (Webacy API) Errors
    // ============================================
    /// HTTP 401 - invalid API key
    UpstreamUnauthorized,
    /// HTTP 403 - key lacks access to this endpoint/chain
    UpstreamForbidden,
    /// HTTP 404 - address unknown to the risk engine
    UpstreamNotFound,
    /// Any other non-200 response
    UpstreamError,

    // ============================================
    // Parse/Coercion Errors
    // ============================================
    /// Response body is not valid JSON
    ParseInvalidJson,
    /// overallRisk/creatorRisk present but not coercible to a number
    ParseNonNumericRisk,

    // ============================================
    // Generic
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            // Configuration
            Self::ConfigMissingApiKey => "CFG_MISSING_API_KEY",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",

            // Input validation
            Self::InputEmptyAddress => "INPUT_EMPTY_ADDRESS",
            Self::InputUnknownChain => "INPUT_UNKNOWN_CHAIN",

            // Quota
            Self::QuotaExceeded => "QUOTA_EXCEEDED",

            // Network
            Self::NetworkTimeout => "NET_TIMEOUT",
            Self::NetworkConnection => "NET_CONNECTION_FAILED",

            // Upstream
            Self::UpstreamUnauthorized => "UPSTREAM_UNAUTHORIZED",
            Self::UpstreamForbidden => "UPSTREAM_FORBIDDEN",
            Self::UpstreamNotFound => "UPSTREAM_NOT_FOUND",
            Self::UpstreamError => "UPSTREAM_ERROR",

            // Parse
            Self::ParseInvalidJson => "PARSE_INVALID_JSON",
            Self::ParseNonNumericRisk => "PARSE_NON_NUMERIC_RISK",

            // Generic
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// True when the failure was detected before any request was issued.
    /// These leave both the network and the ledger untouched.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::ConfigMissingApiKey
                | Self::ConfigInvalidValue
                | Self::InputEmptyAddress
                | Self::InputUnknownChain
                | Self::QuotaExceeded
        )
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Missing API key
    pub fn missing_api_key(key_name: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissingApiKey,
            format!("Missing API key: {}. Set it in the environment or .env", key_name),
        )
    }

    /// Invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }

    /// Empty contract address
    pub fn empty_address() -> Self {
        Self::new(
            ErrorCode::InputEmptyAddress,
            "Please enter a contract address first",
        )
    }

    /// Unknown chain
    pub fn unknown_chain(input: &str) -> Self {
        Self::new(
            ErrorCode::InputUnknownChain,
            format!("Unsupported network: {}", input),
        )
    }

    /// Grant quota exceeded
    pub fn quota_exceeded(count: u64, limit: u64) -> Self {
        Self::new(
            ErrorCode::QuotaExceeded,
            format!("Grant quota reached ({} of {} audits used)", count, limit),
        )
    }

    /// Network timeout
    pub fn network_timeout(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkTimeout, msg)
    }

    /// Connection failed
    pub fn connection_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkConnection, msg)
    }

    /// Non-200 upstream response, keeping status and raw body visible
    pub fn upstream(status: u16, body: &str) -> Self {
        let code = match status {
            401 => ErrorCode::UpstreamUnauthorized,
            403 => ErrorCode::UpstreamForbidden,
            404 => ErrorCode::UpstreamNotFound,
            _ => ErrorCode::UpstreamError,
        };
        let message = match code {
            ErrorCode::UpstreamUnauthorized => {
                format!("API Error 401: key rejected by Webacy ({})", body.trim())
            }
            ErrorCode::UpstreamForbidden => {
                format!("API Error 403: access denied for this key ({})", body.trim())
            }
            ErrorCode::UpstreamNotFound => {
                format!("API Error 404: address not known to the risk engine ({})", body.trim())
            }
            _ => format!("API Error {}: {}", status, body.trim()),
        };
        Self::new(code, message)
    }

    /// Unparsable response body
    pub fn invalid_json(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseInvalidJson, msg)
    }

    /// Risk field present but not a number
    pub fn non_numeric_risk(field: &str, value: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ParseNonNumericRisk,
            format!("Field '{}' is not numeric: {}", field, value),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::NetworkTimeout, "Request timed out")
        } else if err.is_connect() {
            Self::new(ErrorCode::NetworkConnection, "Connection failed")
        } else {
            Self::new(ErrorCode::Unknown, err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ParseInvalidJson, "JSON parse error", err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::Unknown, "IO error", err)
    }
}
