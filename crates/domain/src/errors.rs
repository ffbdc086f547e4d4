use thiserror::Error;

/// Error taxonomy for the request-handling pipeline.
///
/// The Portuguese messages on `Blocked`, `RateLimited` and
/// `ResolutionFailure` are part of the public response contract and must
/// not be reworded.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Domínio não permitido")]
    Blocked,

    #[error("Limite de requisições excedido")]
    RateLimited,

    #[error("Not Acceptable")]
    NotAcceptable,

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Não foi possível resolver '{0}'")]
    ResolutionFailure(String),

    /// Unexpected resolver error; the upstream diagnostic is passed
    /// through verbatim as the response error message.
    #[error("{0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
