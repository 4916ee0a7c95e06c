use thiserror::Error;

pub type TooltipResult<T> = Result<T, TooltipError>;

#[derive(Debug, Error)]
pub enum TooltipError {
    #[error("invalid data: {0}")]
    InvalidData(String),
}
