//! Assignment of points to clusters under a pluggable clustering policy.
//!
//! An upstream clustering stage hands us a list of finalized [`Cluster`] models.
//! A [`Policy`] decides how distances become per-cluster membership weights,
//! and the [`Engine`] turns those weights into zero or more [`Classified`]
//! records per point, discarding outliers below a threshold.
//!
//! ## Core Types
//!
//! - [`Point`] — numeric vector over a fixed dimensionality
//! - [`Measure`] — injected dissimilarity between two points
//! - [`Cluster`] — immutable model with an id, a center, and a measure
//! - [`Policy`] — strategy over `classify`, `select`, `update`
//! - [`Membership`] — fuzzy-c-means membership over a distance slice
//! - [`Engine`] — per-point driver with outlier removal
//!
//! ## Persistence
//!
//! - [`Codec`] — fixed-layout binary state for each policy variant
#[cfg(feature = "cli")]
pub mod cli;
pub mod cluster;
pub mod codec;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod metric;
pub mod point;
pub mod policy;

pub use cluster::*;
pub use codec::*;
pub use engine::*;
pub use error::*;
pub use fuzzy::*;
pub use metric::*;
pub use point::*;
pub use policy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Distances returned by a [`Measure`].
pub type Energy = f64;
/// Membership weights and normalized pdfs.
pub type Probability = f64;
/// Identifier assigned to a cluster by the upstream clustering stage.
pub type ClusterId = i32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// FUZZY K-MEANS
// ============================================================================
/// Fuzzifier exponent. Closer to 1 → harder assignment; larger → flatter.
pub const FUZZINESS: f64 = 2.0;
/// Convergence delta carried alongside the fuzzifier in persisted state.
pub const FUZZY_CONVERGENCE_DELTA: f64 = 0.05;

// ============================================================================
// K-MEANS & CANOPY
// ============================================================================
/// Convergence delta carried by the k-means policy state.
pub const KMEANS_CONVERGENCE_DELTA: f64 = 0.001;
/// Canopy loose distance threshold.
pub const CANOPY_T1: f64 = 3.1;
/// Canopy tight distance threshold.
pub const CANOPY_T2: f64 = 2.1;

// ============================================================================
// CLASSIFICATION
// ============================================================================
/// Minimum best weight for a point to be retained. Zero keeps everything.
pub const OUTLIER_THRESHOLD: Probability = 0.0;
/// Emit only the highest-weight cluster per retained point.
pub const BEST_ONLY: bool = true;
/// Tolerance on the unit sum of normalized membership vectors.
pub const NORMALIZATION_TOLERANCE: Probability = 1e-6;
/// File name that policy state is persisted under inside a clustering output dir.
pub const POLICY_FILE: &str = "_policy";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
