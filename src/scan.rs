//! Result-file discovery and filename parsing.
//!
//! Result files are named `<N>nodes_<mobility>_<S>mps_<ALGO>.txt`, e.g.
//! `50nodes_RandomWaypoint_10mps_AODV.txt`. The four parts carry the
//! categorical fields of one simulation run.

use crate::table::Algorithm;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Categorical fields parsed from a result filename. Node count and speed
/// stay string labels; they are factor levels, not quantities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub mobility: String,
    pub node_count: String,
    pub speed: String,
}

/// A filename that does not follow the result-file grammar. Any of these is
/// fatal for the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("'{0}': expected 4 underscore-separated parts (<N>nodes_<mobility>_<S>mps_<ALGO>)")]
    BadPartCount(String),
    #[error("'{file}': part '{part}' should end in '{suffix}'")]
    MissingSuffix {
        file: String,
        part: String,
        suffix: &'static str,
    },
    #[error("'{file}': unknown routing algorithm '{token}'")]
    UnknownAlgorithm { file: String, token: String },
}

/// Parse one result filename into its categorical fields.
pub fn parse_filename(name: &str) -> Result<RunConfig, ScanError> {
    let stem = name.strip_suffix(".txt").unwrap_or(name);
    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() != 4 {
        return Err(ScanError::BadPartCount(name.to_string()));
    }

    let node_count = parts[0]
        .strip_suffix("nodes")
        .ok_or_else(|| ScanError::MissingSuffix {
            file: name.to_string(),
            part: parts[0].to_string(),
            suffix: "nodes",
        })?;
    let speed = parts[2]
        .strip_suffix("mps")
        .ok_or_else(|| ScanError::MissingSuffix {
            file: name.to_string(),
            part: parts[2].to_string(),
            suffix: "mps",
        })?;

    let algorithm = match parts[3] {
        "AODV" => Algorithm::Aodv,
        "OLSR" => Algorithm::Olsr,
        "DSDV" => Algorithm::Dsdv,
        other => {
            return Err(ScanError::UnknownAlgorithm {
                file: name.to_string(),
                token: other.to_string(),
            })
        }
    };

    Ok(RunConfig {
        algorithm,
        mobility: parts[1].to_string(),
        node_count: node_count.to_string(),
        speed: speed.to_string(),
    })
}

/// Enumerate `*.txt` files under `dir` in sorted order, parsing each
/// filename. Files with other extensions are skipped.
pub fn scan_dir(dir: &Path) -> Result<Vec<(RunConfig, PathBuf)>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read results directory {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;
        paths.push(entry.path());
    }
    paths.sort();

    let mut runs = Vec::new();
    for path in paths {
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let run = parse_filename(&name)?;
        runs.push((run, path));
    }
    Ok(runs)
}
