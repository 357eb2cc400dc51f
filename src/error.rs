use thiserror::Error;

/// Errors reported by cursors and by [`TreapMap::check`](crate::TreapMap::check).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot dereference a cursor positioned at the end")]
    DerefEnd,

    #[error("cannot advance a cursor positioned at the end")]
    AdvanceEnd,

    #[error("keys out of order at in-order position {0}")]
    Unordered(usize),

    #[error("priority exceeds its parent's at in-order position {0}")]
    HeapOrder(usize),

    #[error("map records {recorded} entries but its tree holds {actual}")]
    LenMismatch { recorded: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
