use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid feed kind. Use 'carrot' or 'pellet'.")]
    InvalidFeedKind,

    #[error("Invalid play kind. Use 'pat' or 'toy'.")]
    InvalidPlayKind,
}

pub type Result<T> = std::result::Result<T, Error>;
