//! Classification Binary
//!
//! Assigns points to finalized clusters under a chosen policy,
//! discarding outliers below a threshold.
//!
//! Options: --centers, --points, --policy, --measure, --threshold, --best-only, --state

fn main() -> anyhow::Result<()> {
    kluster::log();
    kluster::cli::Args::run()
}
