#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, AppError>;
