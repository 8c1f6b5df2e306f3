/// cardmap engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Board size above which callers should run the engine off the interactive path.
/// The engine warns above this size but never refuses; pairwise work is O(n²).
pub const RECOMMENDED_MAX_INLINE_CARDS: usize = 150;

/// Smallest distance used when converting to a density level (λ = 1/d).
pub const MIN_DENSITY_DISTANCE: f64 = 1e-6;

/// Tolerance used when checking matrix symmetry.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Number of dominant tags/types reported per cluster.
pub const DOMINANT_ATTRIBUTE_COUNT: usize = 3;
