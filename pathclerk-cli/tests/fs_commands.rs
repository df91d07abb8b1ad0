//! Integration tests for the filesystem commands.

mod common;

use common::{arg, TestEnv};
use predicates::prelude::*;
use std::fs;

/// `project/` with a hidden file, a plain file and a subdirectory.
fn project(env: &TestEnv) -> std::path::PathBuf {
    env.create_file("project/.hidden", "");
    env.create_file("project/b.txt", "b");
    env.create_file("project/sub/c.txt", "c");
    env.path().join("project")
}

// ============================================================================
// ls / find
// ============================================================================

#[test]
fn test_ls_includes_hidden_by_default() {
    let env = TestEnv::new();
    let dir = project(&env);
    assert_eq!(env.stdout_of(&["ls", arg(&dir)]), ".hidden\nb.txt\nsub");
}

#[test]
fn test_ls_hidden_follows_configuration_and_flags() {
    let env = TestEnv::new();
    let dir = project(&env);
    env.write_config("include_hidden: false\n");

    assert_eq!(env.stdout_of(&["ls", arg(&dir)]), "b.txt\nsub");
    assert_eq!(env.stdout_of(&["ls", "--all", arg(&dir)]), ".hidden\nb.txt\nsub");
}

#[test]
fn test_ls_dirs_and_files() {
    let env = TestEnv::new();
    let dir = project(&env);
    assert_eq!(env.stdout_of(&["ls", "--dirs", arg(&dir)]), "sub");
    assert_eq!(env.stdout_of(&["ls", "--files", "--no-hidden", arg(&dir)]), "b.txt");
}

#[test]
fn test_ls_recursive() {
    let env = TestEnv::new();
    let dir = project(&env);

    assert_eq!(
        env.stdout_of(&["ls", "-r", "--no-hidden", arg(&dir)]),
        "project:\n  sub\n  b.txt\nproject/sub:\n  c.txt"
    );

    let groups = env.json_of(&["ls", "-r", "--max-depth", "0", arg(&dir)]);
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["directory"], "project");
    assert_eq!(groups[0]["subdirs"], serde_json::json!(["sub"]));
}

#[test]
fn test_ls_missing_directory() {
    let env = TestEnv::new();
    env.command()
        .args(["ls", arg(&env.path().join("nope"))])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_find() {
    let env = TestEnv::new();
    let dir = project(&env);

    let found = env.stdout_of(&["find", "C.TXT", arg(&dir)]);
    assert_eq!(found, arg(&dir.join("sub/c.txt")));

    env.command()
        .args(["find", "missing.txt", arg(&dir)])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_search_by_similarity() {
    let env = TestEnv::new();
    let dir = project(&env);

    let found = env.stdout_of(&["search", "b.text", arg(&dir), "--similarity", "0.8"]);
    assert_eq!(found, arg(&dir.join("b.txt")));

    let matches = env.json_of(&["search", "c.txt", arg(&dir), "--similarity", "1"]);
    assert_eq!(matches[0]["name"], "c.txt");
    assert_eq!(matches[0]["similarity"], 1.0);

    env.command()
        .args(["search", "zzzzzz", arg(&dir), "--similarity", "0.9"])
        .assert()
        .code(1);
}

#[test]
fn test_kind_and_size() {
    let env = TestEnv::new();
    let dir = project(&env);

    assert_eq!(env.stdout_of(&["kind", arg(&dir)]), "directory");
    assert_eq!(env.stdout_of(&["kind", arg(&dir.join("b.txt"))]), "txt");

    env.create_file("sized/data.bin", &"x".repeat(2048));
    let sized = env.path().join("sized");
    assert_eq!(env.stdout_of(&["size", arg(&sized)]), "2 KB");
    assert_eq!(env.stdout_of(&["size", "--unit", "b", arg(&sized)]), "2048 B");

    let size = env.json_of(&["size", "--unit", "kb", "--precision", "2", arg(&sized)]);
    assert_eq!(size["bytes"], 2048);
    assert_eq!(size["unit"], "KB");

    env.command()
        .args(["size", "--unit", "pb", arg(&sized)])
        .assert()
        .code(2);
}

#[cfg(unix)]
#[test]
fn test_ls_recursive_does_not_follow_links() {
    let env = TestEnv::new();
    let dir = env.create_dir("d");
    std::os::unix::fs::symlink(&dir, dir.join("loop")).unwrap();

    assert_eq!(env.stdout_of(&["ls", "-r", arg(&dir)]), "d:\n  loop");
}

// ============================================================================
// copy / move / duplicate
// ============================================================================

#[test]
fn test_copy_and_conflicts() {
    let env = TestEnv::new();
    let file = env.create_file("report.txt", "data");
    let dest = env.create_dir("backup");

    let copied = env.stdout_of(&["copy", arg(&file), arg(&dest)]);
    assert_eq!(copied, arg(&dest.join("report.txt")));
    assert_eq!(fs::read_to_string(dest.join("report.txt")).unwrap(), "data");

    env.command()
        .args(["copy", arg(&file), arg(&dest)])
        .assert()
        .code(6);

    let appended = env.stdout_of(&["copy", "--mode", "a", arg(&file), arg(&dest)]);
    assert_eq!(appended, arg(&dest.join("report 1.txt")));
}

#[test]
fn test_copy_mode_from_configuration() {
    let env = TestEnv::new();
    env.write_config("conflict_mode: append\n");
    let file = env.create_file("a.txt", "");
    let dest = env.create_dir("dest");
    fs::write(dest.join("a.txt"), "").unwrap();

    let copied = env.stdout_of(&["copy", arg(&file), arg(&dest)]);
    assert_eq!(copied, arg(&dest.join("a 1.txt")));
}

#[test]
fn test_move() {
    let env = TestEnv::new();
    let dir = project(&env);
    let dest = env.create_dir("archive");

    let moved = env.stdout_of(&["move", arg(&dir), arg(&dest)]);
    assert_eq!(moved, arg(&dest.join("project")));
    assert!(!dir.exists());
    assert!(dest.join("project/sub/c.txt").exists());
}

#[test]
fn test_move_into_itself_is_refused() {
    let env = TestEnv::new();
    let dir = project(&env);
    env.command()
        .args(["move", arg(&dir), arg(&dir.join("sub"))])
        .assert()
        .code(4);
    assert!(dir.exists());
}

#[test]
fn test_overwrite_into_own_directory_keeps_item() {
    let env = TestEnv::new();
    let file = env.create_file("keep.txt", "precious");

    env.command()
        .args(["move", "--mode", "o", arg(&file), arg(env.path())])
        .assert()
        .code(4);
    env.command()
        .args(["copy", "--mode", "o", arg(&file), arg(env.path())])
        .assert()
        .code(4);
    assert_eq!(fs::read_to_string(&file).unwrap(), "precious");
}

#[test]
fn test_copy_and_move_contents() {
    let env = TestEnv::new();
    let dir = project(&env);
    let copies = env.create_dir("copies");
    let moved = env.create_dir("moved");

    let landed = env.stdout_of(&["copy", "--contents", arg(&dir), arg(&copies)]);
    assert_eq!(landed.lines().count(), 3);
    assert!(copies.join("sub/c.txt").exists());
    assert!(dir.join("b.txt").exists());

    env.command()
        .args(["move", "--contents", arg(&dir), arg(&moved)])
        .assert()
        .success();
    assert!(dir.is_dir());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    assert!(moved.join(".hidden").exists());
}

#[test]
fn test_duplicate() {
    let env = TestEnv::new();
    let file = env.create_file("report.txt", "data");
    let copy = env.stdout_of(&["duplicate", arg(&file)]);
    assert_eq!(copy, arg(&env.path().join("report 1.txt")));
}

// ============================================================================
// delete / trash
// ============================================================================

#[test]
fn test_delete_items() {
    let env = TestEnv::new();
    let dir = project(&env);
    let file = env.create_file("loose.txt", "");

    env.command()
        .args(["delete", arg(&dir), arg(&file)])
        .assert()
        .success();
    assert!(!dir.exists());
    assert!(!file.exists());
}

#[test]
fn test_delete_contents_keeps_directory() {
    let env = TestEnv::new();
    let dir = project(&env);

    env.command()
        .args(["delete", "--contents", arg(&dir)])
        .assert()
        .success();
    assert!(dir.is_dir());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn test_delete_to_configured_trash() {
    let env = TestEnv::new();
    let trash = env.path().join("trash");
    env.write_config(&format!("trash_dir: {}\n", trash.display()));
    let first = env.create_file("a/notes.txt", "1");
    let second = env.create_file("b/notes.txt", "2");

    let out = env.stdout_of(&["delete", "--trash", arg(&first), arg(&second)]);
    assert_eq!(
        out,
        format!(
            "{}\n{}",
            trash.join("notes.txt").display(),
            trash.join("notes 1.txt").display()
        )
    );
    assert!(!first.exists());
    assert_eq!(fs::read_to_string(trash.join("notes 1.txt")).unwrap(), "2");
}

#[test]
fn test_delete_missing_item() {
    let env = TestEnv::new();
    env.command()
        .args(["delete", arg(&env.path().join("ghost"))])
        .assert()
        .code(6);
}

// ============================================================================
// mkdir / touch
// ============================================================================

#[test]
fn test_mkdir_and_touch() {
    let env = TestEnv::new();
    let dir = env.path().join("new");
    assert_eq!(env.stdout_of(&["mkdir", arg(&dir)]), arg(&dir));
    assert!(dir.is_dir());

    let file = dir.join("empty.txt");
    assert_eq!(env.stdout_of(&["touch", arg(&file)]), arg(&file));
    assert_eq!(fs::read(&file).unwrap().len(), 0);

    env.command().args(["touch", arg(&file)]).assert().code(6);
    assert_eq!(
        env.stdout_of(&["touch", "--mode", "a", arg(&file)]),
        arg(&dir.join("empty 1.txt"))
    );
}

#[test]
fn test_touch_hidden() {
    let env = TestEnv::new();
    let file = env.path().join("rc");
    assert_eq!(
        env.stdout_of(&["touch", "--hidden", arg(&file)]),
        arg(&env.path().join(".rc"))
    );
}

// ============================================================================
// --apply renames
// ============================================================================

#[test]
fn test_rename_apply() {
    let env = TestEnv::new();
    let file = env.create_file("draft.txt", "x");

    let renamed = env.stdout_of(&["rename", "--apply", arg(&file), "final.md"]);
    assert_eq!(renamed, arg(&env.path().join("final.md")));
    assert!(!file.exists());
    assert!(env.path().join("final.md").exists());
}

#[test]
fn test_change_ext_without_apply_leaves_disk_alone() {
    let env = TestEnv::new();
    let file = env.create_file("draft.txt", "x");

    let computed = env.stdout_of(&["change-ext", arg(&file), "md"]);
    assert_eq!(computed, arg(&env.path().join("draft.md")));
    assert!(file.exists());
}

#[test]
fn test_hide_apply_refuses_taken_name() {
    let env = TestEnv::new();
    let file = env.create_file("rc", "");
    env.create_file(".rc", "");

    env.command()
        .args(["hide", "--apply", arg(&file)])
        .assert()
        .code(6);
    assert!(file.exists());
}

// ============================================================================
// perms
// ============================================================================

#[cfg(unix)]
mod perms {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn test_set_and_show() {
        let env = TestEnv::new();
        let file = env.create_file("secret.txt", "");

        env.command()
            .args(["perms", arg(&file), "--set", "r"])
            .assert()
            .success();
        assert_eq!(
            fs::metadata(&file).unwrap().permissions().mode() & 0o777,
            0o444
        );

        assert_eq!(
            env.stdout_of(&["perms", arg(&file)]),
            "user: read-only\ngroup: read-only\nothers: read-only"
        );
        assert_eq!(
            env.json_of(&["perms", "--party", "all", arg(&file)]),
            serde_json::json!([{"party": "all", "permission": "read-only"}])
        );
    }

    #[test]
    fn test_single_party() {
        let env = TestEnv::new();
        let file = env.create_file("script.sh", "");
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();

        env.command()
            .args(["perms", arg(&file), "--party", "others", "--set", "none"])
            .assert()
            .success();
        assert_eq!(
            fs::metadata(&file).unwrap().permissions().mode() & 0o777,
            0o640
        );
    }

    #[test]
    fn test_bad_permission_is_usage_error() {
        let env = TestEnv::new();
        let file = env.create_file("f", "");
        env.command()
            .args(["perms", arg(&file), "--set", "mixed"])
            .assert()
            .code(2);
    }
}
