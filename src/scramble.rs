use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::collision::{CollisionCheck, DiskChecker};
use crate::config::ScrambleConfig;
use crate::error::{Result, ScrambleError};
use crate::mapping::MappingRecorder;
use crate::names::{NameSource, RandomNames};
use crate::planner::{FileEntry, Plan, RenamePlanner};

/// What a finished run did.
#[derive(Debug)]
pub struct Report {
    pub dry_run: bool,
    pub mapping: MappingRecorder,
    /// Entries left alone because every candidate collided.
    pub skipped: Vec<String>,
    pub map_path: PathBuf,
}

/// Top-level entries of `dir`, sorted by name. Subdirectories are included
/// but not descended into.
pub fn list_entries(dir: &Path) -> Result<Vec<FileEntry>> {
    let read_err = |source| ScrambleError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!(
                file = %raw.to_string_lossy(),
                "name is not valid UTF-8, skipping"
            ),
        }
    }
    names.sort();
    Ok(names.into_iter().map(FileEntry::new).collect())
}

/// Runs one pass over a directory: plan, rename, record.
pub struct Scrambler<N, C> {
    config: ScrambleConfig,
    planner: RenamePlanner<N, C>,
    mapping: MappingRecorder,
}

impl Scrambler<RandomNames, DiskChecker> {
    pub fn from_config(config: ScrambleConfig) -> Self {
        let checker = DiskChecker::new(&config.directory);
        Self::new(config, RandomNames::default(), checker)
    }
}

impl<N: NameSource, C: CollisionCheck> Scrambler<N, C> {
    pub fn new(config: ScrambleConfig, names: N, checker: C) -> Self {
        let planner = RenamePlanner::new(&config, names, checker);
        Self {
            config,
            planner,
            mapping: MappingRecorder::new(),
        }
    }

    pub fn run(mut self) -> Result<Report> {
        if self.config.recursive {
            warn!(
                "--recursive is not supported; only the top level of the directory is scrambled"
            );
        }

        let mut entries = list_entries(&self.config.directory)?;
        let map_file = self.config.map_file_name();
        let map_path = self.config.map_path();
        let dry_run = self.config.dry_run;
        self.planner.reserve(&map_file);

        // A map left by an earlier run is renamed like any other entry, and
        // first, before this run's map is written over its name.
        if let Some(pos) = entries.iter().position(|e| e.name() == map_file) {
            let previous = entries.remove(pos);
            if dry_run {
                warn!(
                    file = previous.name(),
                    "dry run: existing mapping file is not renamed and will be overwritten"
                );
            } else {
                entries.insert(0, previous);
            }
        }

        let mut skipped = Vec::new();
        for entry in &entries {
            let new_name = match self.planner.plan(entry)? {
                Plan::Assigned(name) => name,
                Plan::Exhausted { attempts } => {
                    warn!(file = entry.name(), attempts, "could not find a free name, skipping");
                    skipped.push(entry.name().to_string());
                    continue;
                }
            };

            if dry_run {
                info!(from = entry.name(), to = %new_name, "would rename");
                self.mapping.record(entry.name(), new_name);
                continue;
            }

            let from = self.config.directory.join(entry.name());
            let to = self.config.directory.join(&new_name);
            fs::rename(&from, &to).map_err(|source| ScrambleError::Rename {
                from: from.clone(),
                to: to.clone(),
                source,
            })?;
            info!(from = entry.name(), to = %new_name, "renamed");
            self.mapping.record(entry.name(), new_name);
            // Keep the map on disk in step with every applied rename.
            self.mapping.write(&map_path)?;
        }

        self.mapping.write(&map_path)?;
        info!(path = %map_path.display(), entries = self.mapping.len(), "wrote mapping");

        Ok(Report {
            dry_run,
            mapping: self.mapping,
            skipped,
            map_path,
        })
    }
}

/// Scramble `config.directory` with random names.
pub fn run(config: ScrambleConfig) -> Result<Report> {
    Scrambler::from_config(config).run()
}
