//! File system helpers.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

/// Counts the lines of the file at `path`.
/// A trailing line terminator does not start a new line.
///
/// # Errors
/// If the file cannot be opened or read.
pub fn count_lines<P: AsRef<Path>>(path: P) -> io::Result<u64> {
    let reader = BufReader::new(File::open(path)?);
    reader
        .split(b'\n')
        .try_fold(0, |count, line| line.map(|_| count + 1))
}

/// Collects the directories and files under a root directory that satisfy a predicate.
#[derive(Debug, Clone)]
pub struct PredicatedFileCollector {
    root: PathBuf,
    skip_hidden: bool,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|it| it.starts_with('.'))
}

impl PredicatedFileCollector {
    /// Creates a collector rooted at `root`, made absolute against the current directory.
    /// Hidden entries are skipped by default.
    ///
    /// # Errors
    /// If `root` is relative and the current directory cannot be determined.
    pub fn new<P: AsRef<Path>>(root: P) -> io::Result<Self> {
        Ok(Self {
            root: std::path::absolute(root)?,
            skip_hidden: true,
        })
    }

    /// Sets whether hidden entries, i.e., those whose name starts with `.`, are skipped.
    /// The content of a skipped directory is skipped as well.
    #[must_use]
    pub const fn skip_hidden(mut self, skip_hidden: bool) -> Self {
        self.skip_hidden = skip_hidden;
        self
    }

    /// The absolute root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walks the root recursively and returns the paths satisfying `predicate`, the root
    /// included. Entries in a directory are visited in file name order.
    ///
    /// # Errors
    /// If a directory cannot be read.
    pub fn collect<F>(&self, mut predicate: F) -> Result<Vec<PathBuf>, walkdir::Error>
    where
        F: FnMut(&Path) -> bool,
    {
        let skip_hidden = self.skip_hidden;
        let mut matched = Vec::new();
        for entry in WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|it| !(skip_hidden && is_hidden(it)))
        {
            let entry = entry?;
            if predicate(entry.path()) {
                matched.push(entry.into_path());
            }
        }
        log::trace!(
            "Collected {} paths under {}",
            matched.len(),
            self.root.display()
        );
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    struct Fixture(PathBuf);

    impl Fixture {
        fn new(name: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "castle-toolkit-fs-{}-{name}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(root.join("src/nested")).unwrap();
            fs::create_dir_all(root.join(".git")).unwrap();
            fs::write(root.join("src/Main.java"), "class Main {}\n").unwrap();
            fs::write(root.join("src/nested/Util.java"), "class Util {}\n").unwrap();
            fs::write(root.join("src/notes.txt"), "a\nb\nc").unwrap();
            fs::write(root.join(".git/HEAD.java"), "").unwrap();
            fs::write(root.join(".hidden.java"), "").unwrap();
            Self(root)
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn is_java(path: &Path) -> bool {
        path.extension().is_some_and(|it| it == "java")
    }

    #[test]
    fn collect_skipping_hidden() {
        let fixture = Fixture::new("skip");
        let collector = PredicatedFileCollector::new(&fixture.0).unwrap();
        let found = collector.collect(is_java).unwrap();
        assert_eq!(
            found,
            [
                fixture.0.join("src/Main.java"),
                fixture.0.join("src/nested/Util.java"),
            ]
        );
    }

    #[test]
    fn collect_hidden() {
        let fixture = Fixture::new("hidden");
        let collector = PredicatedFileCollector::new(&fixture.0)
            .unwrap()
            .skip_hidden(false);
        let found = collector.collect(is_java).unwrap();
        assert_eq!(found.len(), 4);
        assert!(found.contains(&fixture.0.join(".git/HEAD.java")));
        assert!(found.contains(&fixture.0.join(".hidden.java")));
    }

    #[test]
    fn collect_includes_directories_and_root() {
        let fixture = Fixture::new("dirs");
        let collector = PredicatedFileCollector::new(&fixture.0).unwrap();
        let found = collector.collect(Path::is_dir).unwrap();
        assert_eq!(
            found,
            [
                fixture.0.clone(),
                fixture.0.join("src"),
                fixture.0.join("src/nested"),
            ]
        );
    }

    #[test]
    fn missing_root() {
        let collector =
            PredicatedFileCollector::new(std::env::temp_dir().join("castle-toolkit-fs-missing"))
                .unwrap();
        assert!(collector.collect(|_| true).is_err());
    }

    #[test]
    fn relative_root_is_absolute() {
        let collector = PredicatedFileCollector::new("src").unwrap();
        assert!(collector.root().is_absolute());
    }

    #[test]
    fn line_counts() {
        let fixture = Fixture::new("lines");
        assert_eq!(count_lines(fixture.0.join("src/Main.java")).unwrap(), 1);
        assert_eq!(count_lines(fixture.0.join("src/notes.txt")).unwrap(), 3);
        assert_eq!(count_lines(fixture.0.join(".hidden.java")).unwrap(), 0);
        assert!(count_lines(fixture.0.join("absent")).is_err());
    }
}
