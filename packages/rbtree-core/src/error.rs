use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Red-black invariant a tree failed to satisfy.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("binary search order violated")]
    SearchOrder,
    #[error("root is not black")]
    RootColor,
    #[error("red node has a red child")]
    RedRed,
    #[error("black height differs between paths")]
    BlackHeight,
}
