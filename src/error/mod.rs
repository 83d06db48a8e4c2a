/// Errors reported by basis construction and batch rotation.
#[derive(Debug, thiserror::Error)]
pub enum ShError {
    /// The band order has no slice in the lobe direction table.
    #[error("unsupported band order {band}: expected a value in 1..={max}")]
    UnsupportedBand { band: usize, max: usize },

    /// A batch row does not hold `band²` coefficients.
    #[error(
        "coefficient rows for band order {band} must hold {expected} values but hold {found}"
    )]
    ShapeMismatch {
        band: usize,
        expected: usize,
        found: usize,
    },

    /// A contiguous buffer does not hold `items * band²` coefficients.
    #[error(
        "buffer of {items} items at band order {band} must hold {expected} values but holds {found}"
    )]
    BufferLength {
        items: usize,
        band: usize,
        expected: usize,
        found: usize,
    },

    /// A contiguous buffer cannot be split into whole `band²` rows.
    #[error("buffer of {found} values is not a multiple of {stride} (band order {band})")]
    NotMultiple {
        band: usize,
        stride: usize,
        found: usize,
    },

    /// The lobe basis cannot be inverted to working precision.
    #[error("basis matrix for band order {band} is singular (condition number {condition:e})")]
    SingularBasis { band: usize, condition: f64 },

    /// Rotating one item produced a non-finite coefficient.
    #[error("rotation of item {index} produced a non-finite coefficient")]
    NonFinite { index: usize },

    #[error("failed to build the rotation thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ShError>;
