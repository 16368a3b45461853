use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("unknown project: {name}")]
    UnknownProject { name: String },
    #[error("unknown server group: {project}/{name}")]
    UnknownServerGroup { project: String, name: String },
}

pub type Result<T> = std::result::Result<T, ToggleError>;
