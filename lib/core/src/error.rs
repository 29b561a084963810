use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate criterion: {0}")]
    DuplicateCriterion(String),

    #[error("Registry declares no comparable criteria")]
    NoComparableCriteria,

    #[error("Missing comparable criterion '{criterion}' on item {item}")]
    MissingCriterion { criterion: String, item: String },

    #[error("Non-finite value for criterion '{criterion}' on item {item}")]
    NonFiniteValue { criterion: String, item: String },

    #[error("Aspiration is missing a value for criterion '{0}'")]
    MissingAspiration(String),

    #[error("Non-finite aspiration value for criterion '{0}'")]
    NonFiniteAspiration(String),

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
