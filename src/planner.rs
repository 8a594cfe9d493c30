use tracing::debug;

use crate::collision::CollisionCheck;
use crate::config::ScrambleConfig;
use crate::error::Result;
use crate::names::NameSource;

/// A directory entry waiting to be renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: String,
    extension: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let extension = extension_of(&name).to_string();
        Self { name, extension }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Extension of `name` including its dot, or `""` when there is none.
///
/// Only a dot in first position is exempt, so `.bashrc` has no extension
/// while `..foo` has `.foo`. `..` itself has none.
pub fn extension_of(name: &str) -> &str {
    if name == ".." {
        return "";
    }
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx..],
        _ => "",
    }
}

/// Outcome of planning a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// The entry gets this name; it is already reserved for the run.
    Assigned(String),
    /// Every attempt collided. The entry is left alone.
    Exhausted { attempts: u32 },
}

/// Finds a free name for each entry, one entry at a time.
pub struct RenamePlanner<N, C> {
    names: N,
    checker: C,
    word_count: usize,
    separator: String,
    attempts: u32,
}

impl<N: NameSource, C: CollisionCheck> RenamePlanner<N, C> {
    pub fn new(config: &ScrambleConfig, names: N, checker: C) -> Self {
        Self {
            names,
            checker,
            word_count: config.word_count,
            separator: config.separator.clone(),
            attempts: config.collision_attempts,
        }
    }

    /// Keep `name` out of reach of every entry planned afterwards.
    pub fn reserve(&mut self, name: &str) {
        self.checker.reserve(name);
    }

    pub fn plan(&mut self, entry: &FileEntry) -> Result<Plan> {
        for attempt in 1..=self.attempts {
            let candidate = format!(
                "{}{}",
                self.names.generate(self.word_count, &self.separator),
                entry.extension()
            );
            debug!(file = entry.name(), attempt, %candidate, "trying name");
            if self.checker.try_claim(&candidate)? {
                return Ok(Plan::Assigned(candidate));
            }
            debug!(file = entry.name(), attempt, %candidate, "name already taken, retrying");
        }
        Ok(Plan::Exhausted {
            attempts: self.attempts,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::collision::DiskChecker;
    use crate::error::ScrambleError;
    use std::collections::{HashSet, VecDeque};
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// Log sink for asserting on what a run printed.
    #[derive(Clone, Default)]
    pub(crate) struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        pub(crate) fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        /// Run `f` with warnings and above written into `self`.
        pub(crate) fn warnings<T>(&self, f: impl FnOnce() -> T) -> T {
            let writer = self.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::WARN)
                .with_ansi(false)
                .with_writer(move || writer.clone())
                .finish();
            tracing::subscriber::with_default(subscriber, f)
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Hands out a fixed list of names, then repeats the last one.
    pub(crate) struct Scripted {
        queue: VecDeque<String>,
        last: String,
    }

    impl Scripted {
        pub(crate) fn new(names: &[&str]) -> Self {
            Self {
                queue: names.iter().map(|n| n.to_string()).collect(),
                last: names.last().map(|n| n.to_string()).unwrap_or_default(),
            }
        }
    }

    impl NameSource for Scripted {
        fn generate(&mut self, _word_count: usize, _separator: &str) -> String {
            self.queue.pop_front().unwrap_or_else(|| self.last.clone())
        }
    }

    /// Reports every candidate as taken.
    pub(crate) struct AlwaysTaken;

    impl CollisionCheck for AlwaysTaken {
        fn exists(&self, _candidate: &str) -> Result<bool> {
            Ok(true)
        }

        fn reserve(&mut self, _candidate: &str) {}
    }

    /// Ignores the disk and only tracks in-run reservations.
    #[derive(Default)]
    pub(crate) struct MemoryOnly {
        reserved: HashSet<String>,
    }

    impl CollisionCheck for MemoryOnly {
        fn exists(&self, candidate: &str) -> Result<bool> {
            Ok(self.reserved.contains(candidate))
        }

        fn reserve(&mut self, candidate: &str) {
            self.reserved.insert(candidate.to_string());
        }
    }

    struct Broken;

    impl CollisionCheck for Broken {
        fn exists(&self, candidate: &str) -> Result<bool> {
            Err(ScrambleError::Probe {
                path: PathBuf::from(candidate),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            })
        }

        fn reserve(&mut self, _candidate: &str) {}
    }

    fn config(attempts: u32) -> ScrambleConfig {
        let mut c = ScrambleConfig::new("/unused", true);
        c.collision_attempts = attempts;
        c
    }

    #[test]
    fn extension_rules() {
        assert_eq!(extension_of("report.PDF"), ".PDF");
        assert_eq!(extension_of("a.tar.gz"), ".gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of(".config.bak"), ".bak");
        assert_eq!(extension_of("notes."), ".");
        assert_eq!(extension_of("..foo"), ".foo");
        assert_eq!(extension_of("..."), ".");
        assert_eq!(extension_of(".."), "");
        assert_eq!(extension_of("."), "");
        assert_eq!(extension_of("a.."), ".");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn file_entry_keeps_name_and_extension() {
        let entry = FileEntry::new("holiday.JPG");
        assert_eq!(entry.name(), "holiday.JPG");
        assert_eq!(entry.extension(), ".JPG");
    }

    #[test]
    fn first_free_candidate_is_assigned_with_extension() {
        let names = Scripted::new(&["fox_red"]);
        let mut planner = RenamePlanner::new(&config(10), names, MemoryOnly::default());
        let plan = planner.plan(&FileEntry::new("report.PDF")).unwrap();
        assert_eq!(plan, Plan::Assigned("fox_red.PDF".to_string()));
    }

    #[test]
    fn entry_without_extension_gets_bare_name() {
        let names = Scripted::new(&["owl"]);
        let mut planner = RenamePlanner::new(&config(10), names, MemoryOnly::default());
        let plan = planner.plan(&FileEntry::new("Makefile")).unwrap();
        assert_eq!(plan, Plan::Assigned("owl".to_string()));
    }

    #[test]
    fn duplicate_candidate_is_never_assigned_twice() {
        let names = Scripted::new(&["dup"]);
        let mut planner = RenamePlanner::new(&config(3), names, MemoryOnly::default());
        let first = planner.plan(&FileEntry::new("a.ext")).unwrap();
        let second = planner.plan(&FileEntry::new("b.ext")).unwrap();
        assert_eq!(first, Plan::Assigned("dup.ext".to_string()));
        assert_eq!(second, Plan::Exhausted { attempts: 3 });
    }

    #[test]
    fn duplicate_candidate_retries_until_a_new_name() {
        let names = Scripted::new(&["dup", "dup", "dup", "fresh"]);
        let mut planner = RenamePlanner::new(&config(5), names, MemoryOnly::default());
        planner.plan(&FileEntry::new("a.ext")).unwrap();
        let second = planner.plan(&FileEntry::new("b.ext")).unwrap();
        assert_eq!(second, Plan::Assigned("fresh.ext".to_string()));
    }

    #[test]
    fn same_stem_with_different_extension_does_not_collide() {
        let names = Scripted::new(&["dup"]);
        let mut planner = RenamePlanner::new(&config(1), names, MemoryOnly::default());
        assert_eq!(
            planner.plan(&FileEntry::new("a.txt")).unwrap(),
            Plan::Assigned("dup.txt".to_string())
        );
        assert_eq!(
            planner.plan(&FileEntry::new("a.md")).unwrap(),
            Plan::Assigned("dup.md".to_string())
        );
    }

    #[test]
    fn always_taken_exhausts_after_configured_attempts() {
        let mut planner = RenamePlanner::new(&config(1), Scripted::new(&["x"]), AlwaysTaken);
        let plan = planner.plan(&FileEntry::new("a.txt")).unwrap();
        assert_eq!(plan, Plan::Exhausted { attempts: 1 });
    }

    #[test]
    fn collisions_are_not_logged_as_warnings() {
        let logs = Captured::default();
        let plan = logs.warnings(|| {
            let mut planner = RenamePlanner::new(&config(10), Scripted::new(&["x"]), AlwaysTaken);
            planner.plan(&FileEntry::new("a.txt")).unwrap()
        });
        assert_eq!(plan, Plan::Exhausted { attempts: 10 });
        assert_eq!(logs.text(), "");
    }

    #[test]
    fn manual_reservation_blocks_candidate() {
        let names = Scripted::new(&["map"]);
        let mut planner = RenamePlanner::new(&config(1), names, MemoryOnly::default());
        planner.reserve("map.json");
        let plan = planner.plan(&FileEntry::new("data.json")).unwrap();
        assert_eq!(plan, Plan::Exhausted { attempts: 1 });
    }

    #[test]
    fn checker_failure_is_fatal() {
        let mut planner = RenamePlanner::new(&config(10), Scripted::new(&["x"]), Broken);
        assert!(planner.plan(&FileEntry::new("a.txt")).is_err());
    }

    #[test]
    fn candidate_on_disk_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("taken.txt"), "x").unwrap();
        let names = Scripted::new(&["taken", "free"]);
        let mut planner = RenamePlanner::new(&config(10), names, DiskChecker::new(dir.path()));
        let plan = planner.plan(&FileEntry::new("a.txt")).unwrap();
        assert_eq!(plan, Plan::Assigned("free.txt".to_string()));
    }
}
