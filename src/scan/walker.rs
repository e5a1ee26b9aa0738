//! Tree walk
//!
//! Enumerates the entries below the scan root in pre-order (a directory is
//! yielded before its contents, siblings sorted by file name). The root
//! itself is not an entry.
//!
//! Symbolic links below the root are never followed. A link is an entry in
//! its own right and its name is checked like any other, but its target is
//! not walked: every entry is reached through exactly one path and nothing
//! outside the root is touched.

use log::debug;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::scan::entry::PathEntry;

/// Collect the entries below `root` accepted by `keep`, in pre-order.
/// Rejected entries are dropped as the walk goes.
pub fn collect_matching<F>(root: &Path, mut keep: F) -> Result<Vec<PathEntry>, ScanError>
where
    F: FnMut(&PathEntry) -> bool,
{
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut walked = 0usize;
    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        walked += 1;
        match PathEntry::from_path(entry.path()) {
            Some(path_entry) if keep(&path_entry) => entries.push(path_entry),
            Some(_) => {}
            None => debug!("Skipping entry without a base name: {}", entry.path().display()),
        }
    }

    debug!(
        "Walked {} entries below {}, kept {}",
        walked,
        root.display(),
        entries.len()
    );
    Ok(entries)
}

/// Collect every entry below `root`
pub fn collect_entries(root: &Path) -> Result<Vec<PathEntry>, ScanError> {
    collect_matching(root, |_| true)
}

/// Collect the entries below `root` whose base name is invalid, in pre-order
pub fn collect_invalid_entries(root: &Path) -> Result<Vec<PathEntry>, ScanError> {
    collect_matching(root, PathEntry::is_invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_pre_order_and_root_excluded() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("b/inner")).unwrap();
        fs::write(tmp.path().join("a.txt"), b"").unwrap();
        fs::write(tmp.path().join("b/inner/c.txt"), b"").unwrap();

        let paths: Vec<_> = collect_entries(tmp.path())
            .unwrap()
            .iter()
            .map(|e| e.full_path().strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            paths,
            vec![
                Path::new("a.txt").to_path_buf(),
                Path::new("b").to_path_buf(),
                Path::new("b/inner").to_path_buf(),
                Path::new("b/inner/c.txt").to_path_buf(),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_only_invalid_entries_collected() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("dir.")).unwrap();
        fs::write(tmp.path().join("dir./ok.txt"), b"").unwrap();
        fs::write(tmp.path().join("dir./bad|name"), b"").unwrap();
        fs::write(tmp.path().join("fine"), b"").unwrap();

        let names: Vec<_> = collect_invalid_entries(tmp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name_str().into_owned())
            .collect();

        assert_eq!(names, vec!["dir.".to_string(), "bad|name".to_string()]);
    }

    #[test]
    fn test_predicate_sees_every_entry_once() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("x/y")).unwrap();
        fs::write(tmp.path().join("x/y/z"), b"").unwrap();

        let mut seen = Vec::new();
        let kept = collect_matching(tmp.path(), |e| {
            seen.push(e.name_str().into_owned());
            false
        })
        .unwrap();

        assert!(kept.is_empty());
        assert_eq!(seen, vec!["x", "y", "z"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_walked() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        fs::write(tmp.path().join("real/bad?"), b"").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();

        let paths: Vec<_> = collect_entries(tmp.path())
            .unwrap()
            .iter()
            .map(|e| e.full_path().strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            paths,
            vec![
                Path::new("link").to_path_buf(),
                Path::new("real").to_path_buf(),
                Path::new("real/bad?").to_path_buf(),
            ]
        );
    }
}
