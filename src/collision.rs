use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{Result, ScrambleError};

/// Decides whether a candidate name is already taken in the target directory.
pub trait CollisionCheck {
    fn exists(&self, candidate: &str) -> Result<bool>;

    /// Mark `candidate` as taken for the rest of the run.
    fn reserve(&mut self, candidate: &str);

    /// Check and reserve in one step. Returns `true` if the candidate was
    /// free and is now held by the caller.
    fn try_claim(&mut self, candidate: &str) -> Result<bool> {
        if self.exists(candidate)? {
            return Ok(false);
        }
        self.reserve(candidate);
        Ok(true)
    }
}

/// Checks candidates against the directory on disk plus the names handed out
/// earlier in the same run.
#[derive(Debug)]
pub struct DiskChecker {
    dir: PathBuf,
    reserved: HashSet<String>,
}

impl DiskChecker {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            reserved: HashSet::new(),
        }
    }

    fn on_disk(&self, candidate: &str) -> Result<bool> {
        let path = self.dir.join(candidate);
        // Don't follow symlinks: a dangling link still occupies the name.
        match fs::symlink_metadata(&path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(ScrambleError::Probe { path, source }),
        }
    }
}

impl CollisionCheck for DiskChecker {
    fn exists(&self, candidate: &str) -> Result<bool> {
        if self.reserved.contains(candidate) {
            return Ok(true);
        }
        self.on_disk(candidate)
    }

    fn reserve(&mut self, candidate: &str) {
        self.reserved.insert(candidate.to_string());
    }
}
