use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A target range whose start is after its end, or whose endpoints can't be
    /// compared at all (NaN).
    #[error("invalid range: {0}")]
    InvalidRange(String),
}
