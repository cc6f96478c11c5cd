use thiserror::Error;

use crate::model::{ResourceId, TopicId};

#[derive(Error, Debug)]
pub enum WeekzError {
    #[error("Topic not found: {0}")]
    TopicNotFound(TopicId),

    #[error("Resource not found: {0}")]
    ResourceNotFound(ResourceId),

    #[error("No day selected. Run `weekz day <date>` first")]
    NoDaySelected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, WeekzError>;
