//! Enforces the one-to-one mapping between src files and unit test files

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    fn collect_rs_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_e| io::Error::other("path outside base directory"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                collect_rs_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn relative_paths(base: &str) -> BTreeSet<String> {
        let base = Path::new(base);
        let mut paths = BTreeSet::new();
        if base.exists() {
            let collected = collect_rs_paths(base, base, &mut paths);
            assert!(collected.is_ok(), "Failed to scan {}", base.display());
        }
        paths
    }

    fn is_organizational(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    // Tests every src file has a unit test counterpart and vice versa
    // Verified by renaming a unit test file
    #[test]
    fn test_unit_tree_mirrors_src_tree() {
        let src_paths = relative_paths("src");
        let test_paths = relative_paths("tests/unit");

        let missing: Vec<_> = src_paths
            .iter()
            .filter(|path| !is_organizational(path) && !test_paths.contains(*path))
            .collect();
        assert!(
            missing.is_empty(),
            "src files without unit test counterparts: {missing:?}"
        );

        let orphaned: Vec<_> = test_paths
            .iter()
            .filter(|path| !is_organizational(path) && !src_paths.contains(*path))
            .collect();
        assert!(
            orphaned.is_empty(),
            "unit test files without src counterparts: {orphaned:?}"
        );
    }

    // Tests every test file actually contains test functions
    // Verified by emptying a unit test file
    #[test]
    fn test_all_test_files_contain_tests() {
        let mut empty_files = Vec::new();

        for path in relative_paths("tests") {
            if path == "main.rs" || path.ends_with("mod.rs") {
                continue;
            }
            let full = Path::new("tests").join(&path);
            if full.is_dir() {
                continue;
            }
            let content = fs::read_to_string(&full).unwrap_or_default();
            if !content.contains("#[test]") {
                empty_files.push(path);
            }
        }

        assert!(
            empty_files.is_empty(),
            "test files without #[test] functions: {empty_files:?}"
        );
    }
}
