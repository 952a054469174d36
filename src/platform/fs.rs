// Platform filesystem helpers for sysfs-style pseudo-files

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read the first line of a file, without its line terminator.
///
/// Pseudo-files under `/sys` report a size of 4096 regardless of content, so
/// this reads one line through a buffered reader instead of trusting metadata.
pub fn read_first_line(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

/// List the file names of a directory's entries.
/// Names that are not valid UTF-8 are skipped.
pub fn list_entry_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    Ok(names)
}
