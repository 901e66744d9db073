use crate::error::MapError;
use crate::map::{BuildMap, DecodeLimits};
use crate::report::{MapReport, ReportMode};
use log::{debug, error, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub mode: ReportMode,
    pub limits: DecodeLimits,
    /// Worker threads. `0` lets rayon pick, `1` runs on the calling thread
    pub jobs: usize,
}

/// The outcome for one input path. A failed file never stops the others.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<MapReport, MapError>,
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Decode, validate and classify a single file
pub fn process_file(path: &Path, options: &BatchOptions) -> FileReport {
    let result = BuildMap::from_file_with_limits(path, &options.limits).map(|map| {
        let report = MapReport::new(path.display().to_string(), &map, options.mode);
        if !report.violations.is_empty() {
            warn!(
                "{:?} has {} structural violations",
                path,
                report.violations.len()
            );
        }
        report
    });
    if let Err(e) = &result {
        error!("{:?} failed {}: {}", path, e.check_name(), e);
    }
    FileReport {
        path: path.to_path_buf(),
        result,
    }
}

/// Run every path through the pipeline, one worker per file. The results come
/// back in the same order as `paths`.
pub fn run_batch(paths: &[PathBuf], options: &BatchOptions) -> Vec<FileReport> {
    debug!("Processing {} files with {} jobs", paths.len(), options.jobs);
    match options.jobs {
        1 => paths.iter().map(|p| process_file(p, options)).collect(),
        0 => run_parallel(paths, options),
        jobs => match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
            Ok(pool) => pool.install(|| run_parallel(paths, options)),
            Err(e) => {
                warn!("Could not build a pool of {jobs} threads, using the default: {e}");
                run_parallel(paths, options)
            }
        },
    }
}

fn run_parallel(paths: &[PathBuf], options: &BatchOptions) -> Vec<FileReport> {
    paths
        .par_iter()
        .map(|p| process_file(p, options))
        .collect()
}
