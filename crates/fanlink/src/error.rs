pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid parallel route config JSON: {message}")]
    InvalidConfigJson { message: String },
}
