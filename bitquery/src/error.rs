use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between sending a query and holding typed data.
#[derive(Debug, Error)]
pub enum BitqueryError {
    #[error("request to bitquery failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("bitquery answered {status}: {sample}")]
    Status { status: StatusCode, sample: String },

    #[error("bitquery response could not be decoded: {source}. Sample: {sample}")]
    Decode {
        #[source]
        source: serde_json::Error,
        sample: String,
    },

    #[error("bitquery rejected the query: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("bitquery response carried no `data`")]
    MissingData,
}
