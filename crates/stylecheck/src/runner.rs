//! Parallel checking of many files.

use std::convert::identity;
use std::path::PathBuf;

use rayon::prelude::*;
use stylecheck_java_parser::JavaParser;
use stylecheck_linter::{FileCheckError, StyleChecker};

/// Checks `files` in parallel, one parser per worker thread.
///
/// Returns the failure of the earliest failing file in `files` order, or
/// `None` when every file passes.
pub(crate) fn check_files(checker: &StyleChecker, files: &[PathBuf]) -> Option<FileCheckError> {
    files
        .par_iter()
        .map_init(JavaParser::new, |parser, path| {
            checker.check_file(parser, path).err()
        })
        .find_map_first(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_files(dir: &std::path::Path, files: &[(&str, &str)]) -> Vec<PathBuf> {
        files
            .iter()
            .map(|(name, content)| {
                let path = dir.join(name);
                fs::write(&path, content).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_all_files_pass() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_files(
            dir.path(),
            &[
                ("A.java", "class A { void run(int userId) {} }"),
                ("B.java", "class B { int countTotal2; }"),
            ],
        );
        assert!(check_files(&StyleChecker::default(), &files).is_none());
    }

    #[test]
    fn test_earliest_failing_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_files(
            dir.path(),
            &[
                ("A.java", "class A {}"),
                ("B.java", "class B { void doThing() {} }"),
                ("C.java", "class C { int Bad_Field; }"),
            ],
        );

        for _ in 0..8 {
            let failure = check_files(&StyleChecker::default(), &files).unwrap();
            assert_eq!(failure.path(), files[1]);
            assert!(failure.is_violation());
        }
    }

    #[test]
    fn test_parse_failure_is_not_a_violation() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_files(dir.path(), &[("Broken.java", "class Broken {")]);
        let failure = check_files(&StyleChecker::default(), &files).unwrap();
        assert!(matches!(failure, FileCheckError::Parse { .. }));
        assert!(!failure.is_violation());
    }
}
