//! Score reports written to disk

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::scoring::{rank, BoardScores, RankedNode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub layout: String,
    pub timestamp: String,
    pub node_count: usize,
    pub best_node: Option<usize>,
    pub best_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub metadata: ReportMetadata,
    pub scores: BoardScores,
}

impl ScoreReport {
    pub fn new(layout: &str, scores: BoardScores) -> Self {
        let best = rank(&scores).first().copied();
        Self {
            metadata: ReportMetadata {
                layout: layout.to_string(),
                timestamp: chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string(),
                node_count: scores.len(),
                best_node: best.map(|RankedNode { node, .. }| node),
                best_score: best.map(|RankedNode { score, .. }| score),
            },
            scores,
        }
    }
}

pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Writes `{output_dir}/{layout}.json`, replacing an earlier report.
    pub fn write(&self, layout: &str, scores: &BoardScores) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create report dir {}", self.output_dir.display())
        })?;
        let report = ScoreReport::new(layout, scores.clone());
        let path = self.output_dir.join(format!("{layout}.json"));
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn load(&self, layout: &str) -> Result<ScoreReport> {
        let path = self.output_dir.join(format!("{layout}.json"));
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read report {}", path.display()))?;
        let report = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(report)
    }
}
