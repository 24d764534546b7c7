use crate::BEST_ONLY;
use crate::CANOPY_T1;
use crate::CANOPY_T2;
use crate::Canopy;
use crate::Cluster;
use crate::ClusterId;
use crate::Engine;
use crate::FUZZINESS;
use crate::FUZZY_CONVERGENCE_DELTA;
use crate::FuzzyKMeans;
use crate::KMEANS_CONVERGENCE_DELTA;
use crate::KMeans;
use crate::OUTLIER_THRESHOLD;
use crate::Point;
use crate::Policies;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Assign points to finalized clusters", long_about = None)]
pub struct Args {
    /// cluster centers, one per line; line order is cluster id
    #[arg(long, required = true)]
    pub centers: PathBuf,
    /// points to classify, one per line
    #[arg(long, required = true)]
    pub points: PathBuf,
    /// manhattan, euclidean, squared-euclidean, chebyshev, cosine
    #[arg(long, default_value = "manhattan")]
    pub measure: String,
    /// fuzzy, kmeans, canopy
    #[arg(long, default_value = "fuzzy")]
    pub policy: String,
    #[arg(long, default_value_t = FUZZINESS)]
    pub fuzziness: f64,
    /// convergence delta; defaults per policy
    #[arg(long)]
    pub delta: Option<f64>,
    #[arg(long, default_value_t = CANOPY_T1)]
    pub t1: f64,
    #[arg(long, default_value_t = CANOPY_T2)]
    pub t2: f64,
    /// minimum best weight for a point to be kept
    #[arg(long, env = "KLUSTER_THRESHOLD", default_value_t = OUTLIER_THRESHOLD)]
    pub threshold: f64,
    /// emit only the single best cluster per point; `--best-only false` emits every retained weight
    #[arg(long, default_value_t = BEST_ONLY, action = clap::ArgAction::Set)]
    pub best_only: bool,
    /// clustering output dir; policy state is read from here if present, written otherwise
    #[arg(long)]
    pub state: Option<PathBuf>,
    /// one JSON record per line instead of tab separated
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn run() -> anyhow::Result<()> {
        Self::parse().execute()
    }

    fn execute(&self) -> anyhow::Result<()> {
        let measure = crate::measure(&self.measure)?;
        let centers = crate::cli::read(&self.centers)?;
        let points = crate::cli::read(&self.points)?;
        conform(&centers, &points)?;
        let models = centers
            .into_iter()
            .enumerate()
            .map(|(i, center)| Cluster::new(i as ClusterId, center, measure.clone()))
            .collect::<Vec<_>>();
        let policy = self.policy()?;
        let engine = Engine::new(self.threshold, self.best_only)?;
        log::info!(
            "{:<32}{} models, {} points, {} policy, {} measure",
            "classifying",
            models.len(),
            points.len(),
            policy.name(),
            measure.name()
        );
        let (records, tally) = engine.par_run(&points, &models, &policy)?;
        for record in records.iter() {
            match self.json {
                true => println!("{}", serde_json::to_string(record)?),
                false => println!("{}", record),
            }
        }
        log::info!("{:<32}{}", "done", tally);
        Ok(())
    }

    /// state on disk wins over flags so a later pass reproduces the run
    fn policy(&self) -> anyhow::Result<Policies> {
        if let Some(ref dir) = self.state {
            if crate::codec::done(dir) {
                return crate::codec::load::<Policies>(dir)
                    .with_context(|| format!("policy state in {}", dir.display()));
            }
        }
        let policy = self.build()?;
        if let Some(ref dir) = self.state {
            crate::codec::save(dir, &policy)?;
        }
        Ok(policy)
    }

    fn build(&self) -> anyhow::Result<Policies> {
        match self.policy.trim().to_lowercase().as_str() {
            "fuzzy" => Ok(FuzzyKMeans::new(
                self.fuzziness,
                self.delta.unwrap_or(FUZZY_CONVERGENCE_DELTA),
            )?
            .into()),
            "kmeans" => Ok(KMeans::new(self.delta.unwrap_or(KMEANS_CONVERGENCE_DELTA))?.into()),
            "canopy" => Ok(Canopy::new(self.t1, self.t2)?.into()),
            other => Err(anyhow::anyhow!("unknown policy: {}", other)),
        }
    }
}

/// every center and point must share the first center's dimension
fn conform(centers: &[Point], points: &[Point]) -> anyhow::Result<()> {
    let dim = match centers.first() {
        Some(center) => center.dim(),
        None => return Err(anyhow::anyhow!("no cluster centers")),
    };
    if let Some((i, c)) = centers.iter().enumerate().find(|(_, c)| c.dim() != dim) {
        return Err(anyhow::anyhow!("center {} has {} dimensions, expected {}", i, c.dim(), dim));
    }
    if let Some((i, p)) = points.iter().enumerate().find(|(_, p)| p.dim() != dim) {
        return Err(anyhow::anyhow!("point {} has {} dimensions, expected {}", i, p.dim(), dim));
    }
    Ok(())
}
