// Single source of truth for all default values.

// --- Clustering ---
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;
pub const DEFAULT_MAX_CLUSTER_SIZE: usize = 20;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

// --- Clustering signals ---
pub const DEFAULT_SEMANTIC_SIGNAL_WEIGHT: f64 = 0.5;
pub const DEFAULT_TAG_SIGNAL_WEIGHT: f64 = 0.3;
pub const DEFAULT_EDGE_SIGNAL_WEIGHT: f64 = 0.2;

// --- Adaptive DBSCAN parameters ---
pub const EPS_MIN: f64 = 0.2;
pub const EPS_MAX: f64 = 0.8;
pub const MIN_PTS_FLOOR: usize = 2;
pub const MIN_PTS_POINTS_PER_NEIGHBOR: usize = 8;

// --- HDBSCAN ---
pub const DEFAULT_GLOSH_THRESHOLD: f64 = 0.9;
pub const DEFAULT_ALLOW_SINGLE_CLUSTER: bool = false;

// --- Similarity weights (generic boards) ---
pub const GENERIC_SEMANTIC_WEIGHT: f64 = 0.4;
pub const GENERIC_STRUCTURAL_WEIGHT: f64 = 0.3;
pub const GENERIC_CONTEXTUAL_WEIGHT: f64 = 0.1;
pub const GENERIC_CONTENT_WEIGHT: f64 = 0.2;

// --- Similarity weights (imported AI-ranked suggestions) ---
pub const AI_SEMANTIC_WEIGHT: f64 = 0.7;
pub const AI_STRUCTURAL_WEIGHT: f64 = 0.1;
pub const AI_CONTEXTUAL_WEIGHT: f64 = 0.1;
pub const AI_CONTENT_WEIGHT: f64 = 0.1;

// --- Labeling ---
pub const DEFAULT_MAX_LABEL_ALTERNATIVES: usize = 3;

// --- Quality gates ---
pub const MIN_ACCEPTABLE_COHESION: f64 = 0.3;
pub const MIN_ACCEPTABLE_COVERAGE: f64 = 0.5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
