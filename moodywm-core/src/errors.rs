use thiserror::Error;

pub type Result<T> = std::result::Result<T, MoodyError>;

#[derive(Debug, Error)]
pub enum MoodyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
    #[error("Display server failed to start: {0}")]
    DisplayServer(String),
}

/// Reasons the workspace manager refuses an operation. State is left untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("workspace {0} is full")]
    Full(usize),
    #[error("window is already managed")]
    AlreadyManaged,
    #[error("workspace {0} does not exist")]
    OutOfRange(usize),
    #[error("workspace {0} is already the target")]
    SameWorkspace(usize),
    #[error("window is not managed")]
    NotFound,
}
