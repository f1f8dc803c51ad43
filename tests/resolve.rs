//! Integration tests for the resolver against a real temporary filesystem.
//!
//! A counting fake loader records every path it is handed so each test can
//! assert how often (and with what) the load step ran.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::json;

use deploader::{
    DataLoader, LoadError, Loader, LoaderOptions, OptionsError, ResolveError, SourceLoader,
    deploader, deploader_from_value,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// In-memory loader: returns a fixed value and records every call.
#[derive(Debug, Default)]
struct FakeLoader {
    calls: RefCell<Vec<PathBuf>>,
}

impl Loader for FakeLoader {
    type Value = &'static str;
    type Error = std::io::Error;

    fn load(&self, path: &Path) -> Result<&'static str, std::io::Error> {
        self.calls.borrow_mut().push(path.to_path_buf());
        Ok("exported")
    }
}

fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, rel).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Decision policy
// ---------------------------------------------------------------------------

#[test]
fn absolute_module_path_single_match_returns_export() {
    let dir = tempfile::tempdir().unwrap();
    let lib = dir.path().join("lib");
    let util = touch(dir.path(), "lib/util");

    let resolver = deploader(LoaderOptions::new([&lib]), FakeLoader::default());
    assert_eq!(resolver.load("util").unwrap(), "exported");
    assert_eq!(*resolver.loader().calls.borrow(), vec![util]);
}

#[test]
fn two_absolute_module_paths_are_ambiguous() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "lib/util");
    touch(dir.path(), "vendor/util");

    let resolver = deploader(
        LoaderOptions::new([dir.path().join("lib"), dir.path().join("vendor")]),
        FakeLoader::default(),
    );

    let err = resolver.load("util").unwrap_err();
    assert!(matches!(err, ResolveError::Ambiguous));
    assert!(!err.to_string().contains("lib"), "matches must not be named: {err}");
    assert!(resolver.loader().calls.borrow().is_empty());
}

#[test]
fn nothing_on_disk_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = deploader(
        LoaderOptions::new(["lib", "vendor"])
            .with_cwd(dir.path())
            .with_extensions([".js", ".json"]),
        FakeLoader::default(),
    );

    let err = resolver.load("util").unwrap_err();
    assert!(matches!(err, ResolveError::NotFound));
    assert_eq!(err.to_string(), "No dependency matches found in filesystem");
    assert!(resolver.loader().calls.borrow().is_empty());
}

#[test]
fn absolute_name_cannot_escape_module_paths() {
    let dir = tempfile::tempdir().unwrap();
    let outside = touch(dir.path(), "outside");
    let name = outside.to_str().unwrap();

    for paths in [vec!["lib"], vec!["lib", "vendor"]] {
        let resolver = deploader(
            LoaderOptions::new(paths).with_cwd(dir.path()),
            FakeLoader::default(),
        );

        let err = resolver.load(name).unwrap_err();
        assert!(matches!(err, ResolveError::AbsoluteName(_)), "got: {err}");
        assert!(resolver.loader().calls.borrow().is_empty());
    }
}

#[test]
fn empty_module_paths_are_not_found() {
    let resolver = deploader(
        LoaderOptions::new(Vec::<PathBuf>::new()),
        FakeLoader::default(),
    );
    assert!(matches!(resolver.load("util"), Err(ResolveError::NotFound)));
}

#[test]
fn match_in_second_module_path_with_second_extension() {
    let dir = tempfile::tempdir().unwrap();
    let target = touch(dir.path(), "vendor/util.json");

    let resolver = deploader(
        LoaderOptions::new(["lib", "vendor"])
            .with_cwd(dir.path())
            .with_extensions([".js", ".json"]),
        FakeLoader::default(),
    );

    resolver.load("util").unwrap();
    assert_eq!(*resolver.loader().calls.borrow(), vec![target]);
}

#[test]
fn directory_entry_counts_as_match() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("lib/util")).unwrap();
    touch(dir.path(), "vendor/util");

    let resolver = deploader(
        LoaderOptions::new(["lib", "vendor"]).with_cwd(dir.path()),
        FakeLoader::default(),
    );
    assert!(matches!(resolver.load("util"), Err(ResolveError::Ambiguous)));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_a_match() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("lib")).unwrap();
    let link = dir.path().join("lib/util");
    std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

    let resolver = deploader(
        LoaderOptions::new(["lib"]).with_cwd(dir.path()),
        FakeLoader::default(),
    );
    resolver.load("util").unwrap();
    assert_eq!(*resolver.loader().calls.borrow(), vec![link]);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_fails_in_source_loader() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("lib")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("lib/util")).unwrap();

    let resolver = deploader(LoaderOptions::new(["lib"]).with_cwd(dir.path()), SourceLoader);
    let err = resolver.load("util").unwrap_err();
    assert!(matches!(err, ResolveError::Load(LoadError::Read { .. })));
}

// ---------------------------------------------------------------------------
// Candidate generation
// ---------------------------------------------------------------------------

#[test]
fn candidates_are_full_cross_product_in_order() {
    let resolver = deploader(
        LoaderOptions::new(["a", "b"]).with_extensions([".js", ".json"]),
        FakeLoader::default(),
    );
    let paths: Vec<PathBuf> = resolver.candidates("foo").iter().map(|c| c.path()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("a/foo.js"),
            PathBuf::from("b/foo.js"),
            PathBuf::from("a/foo.json"),
            PathBuf::from("b/foo.json"),
        ]
    );
}

#[test]
fn no_extensions_uses_bare_name() {
    let resolver = deploader(LoaderOptions::new(["a"]), FakeLoader::default());
    let names: Vec<String> = resolver
        .candidates("foo")
        .into_iter()
        .map(|c| c.filename)
        .collect();
    assert_eq!(names, vec!["foo"]);
}

#[test]
fn matches_reports_only_existing() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "b/foo.json");

    let resolver = deploader(
        LoaderOptions::new(["a", "b"])
            .with_cwd(dir.path())
            .with_extensions([".js", ".json"]),
        FakeLoader::default(),
    );
    let found: Vec<PathBuf> = resolver.matches("foo").iter().map(|c| c.path()).collect();
    assert_eq!(found, vec![dir.path().join("b/foo.json")]);
}

// ---------------------------------------------------------------------------
// Factory and validation
// ---------------------------------------------------------------------------

#[test]
fn factory_rejects_missing_module_paths() {
    let err = deploader_from_value(&json!({ "extensions": [".js"] }), FakeLoader::default())
        .unwrap_err();
    assert!(matches!(err, OptionsError::Invalid { .. }));
}

#[test]
fn factory_rejects_non_string_module_path() {
    let err = deploader_from_value(&json!({ "modulePaths": ["lib", null] }), FakeLoader::default())
        .unwrap_err();
    assert!(err.to_string().contains("array<string>"), "got: {err}");
}

#[test]
fn factory_accepts_valid_document() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "lib/util.toml");
    std::fs::write(dir.path().join("lib/util.toml"), "answer = 42\n").unwrap();

    let resolver = deploader_from_value(
        &json!({
            "cwd": dir.path().to_str().unwrap(),
            "modulePaths": ["lib"],
            "extensions": [".toml"],
        }),
        DataLoader,
    )
    .unwrap();

    assert_eq!(resolver.load("util").unwrap(), json!({"answer": 42}));
}

// ---------------------------------------------------------------------------
// Determinism and thread safety
// ---------------------------------------------------------------------------

#[test]
fn equal_configs_give_equal_results() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "lib/util.js");

    let opts = LoaderOptions::new(["lib", "vendor"])
        .with_cwd(dir.path())
        .with_extensions([".js", ".json"]);
    let first = deploader(opts.clone(), SourceLoader);
    let second = deploader(opts, SourceLoader);

    assert_eq!(first.load("util").unwrap(), second.load("util").unwrap());
    assert_eq!(first.load("util").unwrap(), "lib/util.js");
}

#[test]
fn no_caching_between_calls() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = deploader(
        LoaderOptions::new(["lib"]).with_cwd(dir.path()),
        FakeLoader::default(),
    );

    assert!(matches!(resolver.load("util"), Err(ResolveError::NotFound)));
    touch(dir.path(), "lib/util");
    assert_eq!(resolver.load("util").unwrap(), "exported");
    assert_eq!(resolver.loader().calls.borrow().len(), 1);
}

#[test]
fn shared_across_threads() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "lib/util");

    let resolver = deploader(LoaderOptions::new(["lib"]).with_cwd(dir.path()), SourceLoader);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(resolver.load("util").unwrap(), "lib/util"));
        }
    });
}
