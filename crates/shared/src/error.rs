use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum CommonError {
    #[error("could not find resource")]
    NotFound {
        msg: String,
        lookup_id: String,
        #[serde(skip)]
        #[source]
        source: Option<anyhow::Error>,
    },
    #[error("unknown error")]
    Unknown(
        #[serde(skip)]
        #[from]
        anyhow::Error,
    ),
    #[error("invalid request")]
    InvalidRequest {
        msg: String,
        #[serde(skip)]
        #[source]
        source: Option<anyhow::Error>,
    },
    #[error("repository error")]
    Repository {
        msg: String,
        #[serde(skip)]
        #[source]
        source: Option<anyhow::Error>,
    },
    #[error("io error")]
    IoError {
        #[serde(skip)]
        #[from]
        #[source]
        source: std::io::Error,
    },
    #[error("serde json error")]
    SerdeSerializationError {
        #[serde(skip)]
        #[from]
        #[source]
        source: serde_json::Error,
    },
    #[error("serde yaml error")]
    SerdeYamlError {
        #[serde(skip)]
        #[from]
        #[source]
        source: serde_yaml::Error,
    },
    #[error("var error")]
    VarError {
        #[serde(skip)]
        #[from]
        #[source]
        source: std::env::VarError,
    },
}

impl CommonError {
    /// Short, stable name of the error kind, suitable for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            CommonError::NotFound { .. } => "NotFound",
            CommonError::InvalidRequest { .. } => "InvalidRequest",
            CommonError::Repository { .. } => "Repository",
            CommonError::Unknown(_)
            | CommonError::IoError { .. }
            | CommonError::SerdeSerializationError { .. }
            | CommonError::SerdeYamlError { .. }
            | CommonError::VarError { .. } => "InternalError",
        }
    }
}
