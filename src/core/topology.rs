// CPU topology discovery and per-core governor reads from sysfs
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::platform::{list_entry_names, read_first_line};

/// Directory holding one `cpuN` node per logical CPU
pub const DEFAULT_CPU_DIR: &str = "/sys/devices/system/cpu";

const SCALING_GOVERNOR: &str = "cpufreq/scaling_governor";
const AVAILABLE_GOVERNORS: &str = "cpufreq/scaling_available_governors";

static CPU_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^cpu[0-9]+$").expect("static regex is valid"));

/// Why discovery fell back to a single core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The directory was listed but no entry looked like `cpuN`
    NoMatchingEntries,
    /// The directory could not be listed
    Unreadable(String),
}

/// Result of counting cores, keeping track of whether the number was observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreCount {
    Detected(usize),
    Assumed { count: usize, reason: FallbackReason },
}

impl CoreCount {
    fn fallback(reason: FallbackReason) -> Self {
        CoreCount::Assumed { count: 1, reason }
    }

    /// Number of cores to operate on
    pub fn get(&self) -> usize {
        match self {
            CoreCount::Detected(n) => *n,
            CoreCount::Assumed { count, .. } => *count,
        }
    }

    pub fn is_assumed(&self) -> bool {
        matches!(self, CoreCount::Assumed { .. })
    }
}

impl fmt::Display for CoreCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreCount::Detected(n) => write!(f, "{}", n),
            CoreCount::Assumed { count, reason } => match reason {
                FallbackReason::NoMatchingEntries => {
                    write!(f, "{} (assumed, no cpu entries found)", count)
                }
                FallbackReason::Unreadable(e) => {
                    write!(f, "{} (assumed, cpu directory unreadable: {})", count, e)
                }
            },
        }
    }
}

/// Governor state of a single core, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreGovernors {
    pub core: usize,
    pub active: Option<String>,
    pub available: Vec<String>,
}

/// Reads CPU topology and governor files below a cpu device directory
#[derive(Debug, Clone)]
pub struct CpuTopology {
    cpu_dir: PathBuf,
}

impl Default for CpuTopology {
    fn default() -> Self {
        Self::new(DEFAULT_CPU_DIR)
    }
}

impl CpuTopology {
    pub fn new<P: Into<PathBuf>>(cpu_dir: P) -> Self {
        Self {
            cpu_dir: cpu_dir.into(),
        }
    }

    pub fn cpu_dir(&self) -> &Path {
        &self.cpu_dir
    }

    pub fn core_dir(&self, core: usize) -> PathBuf {
        self.cpu_dir.join(format!("cpu{}", core))
    }

    pub fn scaling_governor_path(&self, core: usize) -> PathBuf {
        self.core_dir(core).join(SCALING_GOVERNOR)
    }

    pub fn available_governors_path(&self, core: usize) -> PathBuf {
        self.core_dir(core).join(AVAILABLE_GOVERNORS)
    }

    /// Counts `cpuN` entries in the cpu directory.
    ///
    /// Never fails: an unreadable directory or one without matching entries
    /// is reported as a single assumed core.
    pub fn discover_core_count(&self) -> CoreCount {
        let names = match list_entry_names(&self.cpu_dir) {
            Ok(names) => names,
            Err(e) => {
                log::warn!(
                    "Cannot list {}: {}, assuming a single core",
                    self.cpu_dir.display(),
                    e
                );
                return CoreCount::fallback(FallbackReason::Unreadable(e.to_string()));
            }
        };

        let count = names.iter().filter(|name| is_cpu_entry(name)).count();
        if count == 0 {
            log::warn!(
                "No cpu entries in {}, assuming a single core",
                self.cpu_dir.display()
            );
            return CoreCount::fallback(FallbackReason::NoMatchingEntries);
        }

        log::debug!("Discovered {} core(s) in {}", count, self.cpu_dir.display());
        CoreCount::Detected(count)
    }

    /// First line of a pseudo-file, or `None` if it cannot be read
    pub fn read_scalar_file(&self, path: &Path) -> Option<String> {
        read_scalar_file(path)
    }

    /// Governors offered by every core, in the order core 0 lists them
    pub fn list_available_governors(&self) -> Vec<String> {
        let cores = self.discover_core_count().get();
        let per_core: Vec<Vec<String>> = (0..cores)
            .map(|core| self.read_available_governors(core))
            .collect();

        intersect_governors(&per_core)
    }

    /// Governor currently set on core 0
    pub fn get_active_governor(&self) -> Option<String> {
        read_scalar_file(&self.scaling_governor_path(0))
    }

    /// Active and available governors of every discovered core
    pub fn core_governors(&self) -> Vec<CoreGovernors> {
        let cores = self.discover_core_count().get();
        (0..cores)
            .map(|core| CoreGovernors {
                core,
                active: read_scalar_file(&self.scaling_governor_path(core)),
                available: self.read_available_governors(core),
            })
            .collect()
    }

    fn read_available_governors(&self, core: usize) -> Vec<String> {
        read_scalar_file(&self.available_governors_path(core))
            .map(|line| split_governors(&line))
            .unwrap_or_default()
    }
}

/// Reads the first line of `path`, logging and swallowing any I/O error
pub fn read_scalar_file(path: &Path) -> Option<String> {
    match read_first_line(path) {
        Ok(line) => {
            log::trace!("Read {:?} from {}", line, path.display());
            Some(line)
        }
        Err(e) => {
            log::debug!("Failed to read {}: {}", path.display(), e);
            None
        }
    }
}

pub fn is_cpu_entry(name: &str) -> bool {
    CPU_ENTRY.is_match(name)
}

/// Splits a `scaling_available_governors` line on spaces
pub fn split_governors(line: &str) -> Vec<String> {
    line.split(' ')
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Keeps the governors of the first list that every other list also contains.
///
/// An empty input, or an empty list for any core, yields an empty result.
pub fn intersect_governors(per_core: &[Vec<String>]) -> Vec<String> {
    let Some((first, rest)) = per_core.split_first() else {
        return Vec::new();
    };

    first
        .iter()
        .filter(|governor| rest.iter().all(|other| other.contains(*governor)))
        .cloned()
        .collect()
}
