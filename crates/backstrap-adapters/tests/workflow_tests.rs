//! End-to-end workflow tests against real and in-memory filesystems.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use backstrap_adapters::{LocalFilesystem, MemoryFilesystem, ScriptedPrompter};
use backstrap_core::{
    application::{InitService, Scaffolder, SilentProgress},
    domain::{DIRECTORY_PLAN, FILE_PLAN, FrameworkChoice, ScaffoldPlan},
};
use tempfile::TempDir;
use walkdir::WalkDir;

fn local_service(prompter: ScriptedPrompter) -> InitService {
    InitService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(prompter),
        Box::new(SilentProgress),
    )
}

/// Every entry under `root`, relative, with `/` separators.
fn tree(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

fn read_manifest(root: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(root.join("package.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn full_tree_for_express_sample() {
    let tmp = TempDir::new().unwrap();
    let service = local_service(ScriptedPrompter::framework(FrameworkChoice::Express));

    let report = service.run(Some("sample".into()), tmp.path()).unwrap();
    let root = tmp.path().join("sample");
    assert_eq!(report.project_root, root);

    let expected: BTreeSet<String> = DIRECTORY_PLAN
        .iter()
        .chain(FILE_PLAN)
        .map(|p| p.to_string())
        .chain(std::iter::once("package.json".to_string()))
        .collect();
    assert_eq!(tree(&root), expected);

    for file in FILE_PLAN {
        let content = fs::read_to_string(root.join(file)).unwrap();
        assert!(content.is_empty(), "{file} should be empty");
    }

    let manifest = read_manifest(&root);
    assert_eq!(manifest["name"], "sample");
    assert_eq!(manifest["version"], "1.0.0");
    assert_eq!(manifest["description"], "sample project");
    assert_eq!(manifest["scripts"]["start"], "node src/index.js");
    assert_eq!(
        manifest["dependencies"],
        serde_json::json!({ "express": "latest" })
    );
}

#[test]
fn manifest_dependencies_match_catalog_for_every_choice() {
    let cases = [
        (FrameworkChoice::Express, serde_json::json!({ "express": "latest" })),
        (
            FrameworkChoice::ExpressMongo,
            serde_json::json!({ "express": "latest", "mongoose": "latest" }),
        ),
        (
            FrameworkChoice::ExpressSql,
            serde_json::json!({ "express": "latest", "sequelize": "latest" }),
        ),
    ];

    for (choice, expected) in cases {
        let tmp = TempDir::new().unwrap();
        local_service(ScriptedPrompter::framework(choice))
            .run(Some("demo-api".into()), tmp.path())
            .unwrap();

        let manifest = read_manifest(&tmp.path().join("demo-api"));
        assert_eq!(manifest["dependencies"], expected, "choice {choice}");
        assert_eq!(manifest["description"], "demo-api project");
        assert!(manifest["scripts"]["test"].is_string());
    }
}

#[test]
fn collision_guard_writes_nothing_and_skips_framework_prompt() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("myapp")).unwrap();
    let before = tree(tmp.path());

    let prompter = ScriptedPrompter::framework(FrameworkChoice::Express);
    let err = local_service(prompter.clone())
        .run(Some("myapp".into()), tmp.path())
        .unwrap_err();

    assert!(err.is_collision());
    assert_eq!(prompter.framework_prompts(), 0);
    assert_eq!(tree(tmp.path()), before);
}

#[test]
fn collision_guard_applies_to_plain_files_too() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes"), "keep").unwrap();

    let err = local_service(ScriptedPrompter::framework(FrameworkChoice::Express))
        .run(Some("notes".into()), tmp.path())
        .unwrap_err();

    assert!(err.is_collision());
    assert_eq!(fs::read_to_string(tmp.path().join("notes")).unwrap(), "keep");
}

#[test]
fn collision_in_memory_counts_zero_writes() {
    let fs = MemoryFilesystem::new().with_directory("/work/myapp");
    let service = InitService::new(
        Box::new(fs.clone()),
        Box::new(ScriptedPrompter::framework(FrameworkChoice::ExpressSql)),
        Box::new(SilentProgress),
    );

    assert!(service.run(Some("myapp".into()), Path::new("/work")).is_err());
    assert_eq!(fs.write_count(), 0);
}

#[test]
fn absolute_name_is_created_under_working_dir() {
    let cwd = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let name = elsewhere.path().join("proj");
    let service = local_service(ScriptedPrompter::framework(FrameworkChoice::Express));

    let report = service
        .run(Some(name.to_string_lossy().into_owned()), cwd.path())
        .unwrap();

    assert!(report.project_root.starts_with(cwd.path()));
    assert!(report.project_root.join("package.json").is_file());
    assert!(tree(elsewhere.path()).is_empty());
}

#[test]
fn prompted_name_is_used_when_no_argument() {
    let fs = MemoryFilesystem::new().with_directory("/work");
    let prompter = ScriptedPrompter::new(Some("from-prompt"), Some(FrameworkChoice::ExpressMongo));
    let service = InitService::new(
        Box::new(fs.clone()),
        Box::new(prompter.clone()),
        Box::new(SilentProgress),
    );

    let report = service.run(None, Path::new("/work")).unwrap();

    assert_eq!(prompter.name_prompts(), 1);
    assert_eq!(report.project_root, PathBuf::from("/work/from-prompt"));
    let manifest = fs
        .read_file(Path::new("/work/from-prompt/package.json"))
        .unwrap();
    assert!(manifest.contains("\"mongoose\": \"latest\""));
}

#[test]
fn directory_creation_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let filesystem = LocalFilesystem::new();
    let scaffolder = Scaffolder::new(&filesystem);
    let plan = ScaffoldPlan::backend().unwrap();

    let first = scaffolder
        .create_directories(tmp.path(), plan.directories())
        .unwrap();
    let after_first = tree(tmp.path());
    let second = scaffolder
        .create_directories(tmp.path(), plan.directories())
        .unwrap();

    assert_eq!(first, DIRECTORY_PLAN.len());
    assert_eq!(second, 0);
    assert_eq!(tree(tmp.path()), after_first);
}

#[test]
fn existing_files_are_not_clobbered() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("tests")).unwrap();
    fs::write(tmp.path().join("tests/.gitkeep"), "x").unwrap();

    let filesystem = LocalFilesystem::new();
    let outcome = Scaffolder::new(&filesystem)
        .create_tree(tmp.path(), ScaffoldPlan::backend().unwrap(), &SilentProgress)
        .unwrap();

    assert_eq!(
        fs::read_to_string(tmp.path().join("tests/.gitkeep")).unwrap(),
        "x"
    );
    assert_eq!(outcome.files_skipped, 1);
    assert_eq!(outcome.files_created, FILE_PLAN.len() - 1);
}

#[cfg(unix)]
#[test]
fn scaffolding_error_propagates() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let locked = tmp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores permission bits; nothing to assert in that case.
    if fs::write(locked.join("write-check"), "").is_ok() {
        return;
    }

    let result = local_service(ScriptedPrompter::framework(FrameworkChoice::Express))
        .run(Some("app".into()), &locked);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let err = result.unwrap_err();
    assert!(!err.is_collision());
    assert!(err.to_string().contains("Failed to create directory"));
}
