use rr_core::RrError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevealError {
    #[error("cannot start a reveal run with no routes")]
    EmptyRouteSet,

    #[error("route at position {index}: {source}")]
    Route {
        index:  usize,
        source: RrError,
    },

    #[error("route at position {index} has rank {rank}; ranks must run 0..n in order")]
    RankOrder { index: usize, rank: usize },

    #[error(transparent)]
    Core(#[from] RrError),
}

pub type RevealResult<T> = Result<T, RevealError>;
