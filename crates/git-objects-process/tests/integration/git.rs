// Copyright 2026 Oxide Computer Company

//! Tests that read the output of a real `git` process through
//! `ProcessStreamAdapter`.

use anyhow::{Result, bail};
use camino::Utf8Path;
use camino_tempfile::Utf8TempDir;
use fs_err as fs;
use git_objects::{Actor, ObjectType, parse_actor_and_date, parse_actor_line};
use git_objects_process::{ProcessStreamAdapter, StreamName, StreamSelectError};
use std::{
    io::{Read, Write},
    process::{Child, Command, Stdio},
};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

const AUTHOR_DATE: &str = "1191999972 -0700";
const COMMITTER_DATE: &str = "1700000000 +0130";

/// Returns a `Command` for git, respecting the `$GIT` environment variable.
fn git_command() -> Command {
    let bin = std::env::var("GIT").unwrap_or_else(|_| "git".to_string());
    Command::new(bin)
}

/// Runs git in `repo_root` with fixed dates, failing if it exits non-zero.
fn run_git(repo_root: &Utf8Path, args: &[&str]) -> Result<()> {
    let output = git_command()
        .args(args)
        .current_dir(repo_root)
        .env("GIT_AUTHOR_DATE", AUTHOR_DATE)
        .env("GIT_COMMITTER_DATE", COMMITTER_DATE)
        .output()?;
    if !output.status.success() {
        bail!(
            "git {} failed ({}): {}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim(),
        );
    }
    Ok(())
}

/// Spawns git in `repo_root` with stdout and stderr piped.
fn spawn_git(repo_root: &Utf8Path, args: &[&str]) -> Result<Child> {
    Ok(git_command()
        .args(args)
        .current_dir(repo_root)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?)
}

/// Reads the named stream of `child` to the end.
fn read_stream(child: &mut Child, name: StreamName) -> Result<String> {
    let mut output = String::new();
    ProcessStreamAdapter::new(child, name)?.read_to_string(&mut output)?;
    Ok(output)
}

/// A repository with one commit (`file.txt`) and one annotated tag (`v1`).
struct TestRepo {
    temp: Utf8TempDir,
}

impl TestRepo {
    fn new() -> Result<Self> {
        let temp = Utf8TempDir::with_prefix("git-objects-")?;
        let root = temp.path();

        run_git(root, &["init"])?;
        run_git(root, &["config", "user.email", "a007@example.com"])?;
        run_git(root, &["config", "user.name", "Agent 007"])?;

        fs::write(root.join("file.txt"), "hello\n")?;
        run_git(root, &["add", "."])?;
        run_git(root, &["commit", "-m", "Add file"])?;
        run_git(root, &["tag", "-a", "v1", "-m", "Version 1"])?;

        Ok(TestRepo { temp })
    }

    fn root(&self) -> &Utf8Path {
        self.temp.path()
    }

    /// Returns the type of `rev` as reported by `git cat-file -t`.
    fn object_type(&self, rev: &str) -> Result<ObjectType> {
        let mut child = spawn_git(self.root(), &["cat-file", "-t", rev])?;
        let stdout = read_stream(&mut child, StreamName::Stdout)?;
        let status = child.wait()?;
        assert!(status.success(), "git cat-file -t {rev} failed");
        Ok(stdout.trim_end().parse()?)
    }

    /// Returns the lines of `git cat-file -p <rev>`.
    fn pretty_print(&self, rev: &str) -> Result<Vec<String>> {
        let mut child = spawn_git(self.root(), &["cat-file", "-p", rev])?;
        let lines = ProcessStreamAdapter::new(&mut child, StreamName::Stdout)?
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?;
        let status = child.wait()?;
        assert!(status.success(), "git cat-file -p {rev} failed");
        Ok(lines)
    }
}

fn find_line<'a>(lines: &'a [String], label: &str) -> &'a str {
    let prefix = format!("{label} ");
    lines
        .iter()
        .map(String::as_str)
        .find(|line| line.starts_with(&prefix))
        .unwrap_or_else(|| panic!("no {label} line in {lines:?}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_object_types_from_cat_file() -> Result<()> {
    let repo = TestRepo::new()?;

    assert_eq!(repo.object_type("HEAD")?, ObjectType::Commit);
    assert_eq!(repo.object_type("HEAD^{tree}")?, ObjectType::Tree);
    assert_eq!(repo.object_type("HEAD:file.txt")?, ObjectType::Blob);
    assert_eq!(repo.object_type("v1")?, ObjectType::Tag);

    Ok(())
}

#[test]
fn test_commit_actor_lines() -> Result<()> {
    let repo = TestRepo::new()?;
    let lines = repo.pretty_print("HEAD")?;

    let (author, epoch) = parse_actor_and_date(find_line(&lines, "author"))?;
    assert_eq!(author, Actor::new("Agent 007", "a007@example.com"));
    assert_eq!(epoch, 1191999972);

    let committer = parse_actor_line(find_line(&lines, "committer"))?;
    assert_eq!(committer.label(), "committer");
    assert_eq!(committer.actor(), &author);
    assert_eq!(committer.epoch(), 1700000000);
    assert_eq!(committer.timezone(), "+0130");
    assert_eq!(committer.tz_offset_seconds(), Some(90 * 60));

    Ok(())
}

#[test]
fn test_tag_tagger_line() -> Result<()> {
    let repo = TestRepo::new()?;
    let lines = repo.pretty_print("v1")?;

    let tagger = parse_actor_line(find_line(&lines, "tagger"))?;
    assert_eq!(tagger.actor().name(), "Agent 007");
    assert_eq!(tagger.actor().email(), "a007@example.com");
    assert_eq!(tagger.epoch(), 1700000000);

    let target: ObjectType =
        find_line(&lines, "type")["type ".len()..].parse()?;
    assert_eq!(target, ObjectType::Commit, "v1 should point at a commit");

    Ok(())
}

#[test]
fn test_stdin_then_stdout() -> Result<()> {
    let repo = TestRepo::new()?;
    let mut child = git_command()
        .args(["hash-object", "--stdin"])
        .current_dir(repo.root())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = ProcessStreamAdapter::new(&mut child, StreamName::Stdin)?;
    stdin.write_all(b"hello\n")?;
    stdin.flush()?;
    // git reads until end-of-file.
    stdin.close();
    assert!(child.stdin.is_none(), "close should release stdin");

    let stdout = read_stream(&mut child, StreamName::Stdout)?;
    assert!(child.wait()?.success(), "git hash-object failed");
    // The well-known blob ID for "hello\n".
    assert_eq!(
        stdout.trim_end(),
        "ce013625030ba8dba906f756967f9e9ca394464a"
    );

    Ok(())
}

#[test]
fn test_stderr_of_failing_command() -> Result<()> {
    let repo = TestRepo::new()?;
    let mut child = spawn_git(
        repo.root(),
        &["cat-file", "-t", "0000000000000000000000000000000000000001"],
    )?;

    let stdout = read_stream(&mut child, StreamName::Stdout)?;
    let stderr = read_stream(&mut child, StreamName::Stderr)?;
    let status = child.wait()?;

    assert!(!status.success(), "cat-file of a missing object should fail");
    assert_eq!(stdout, "", "nothing should be written to stdout");
    assert!(!stderr.is_empty(), "git should explain the failure on stderr");

    Ok(())
}

#[test]
fn test_unpiped_stream_is_missing() -> Result<()> {
    let mut child = git_command()
        .arg("--version")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let err = ProcessStreamAdapter::new(&mut child, StreamName::Stderr)
        .unwrap_err();
    assert_eq!(err.stream, StreamName::Stderr);
    assert_eq!(
        err.to_string(),
        "process has no stderr stream (was it piped?)"
    );

    let err =
        ProcessStreamAdapter::from_name(&mut child, "stdin").unwrap_err();
    assert!(
        matches!(err, StreamSelectError::NoSuchStream(_)),
        "stdin was not piped: {err:?}"
    );

    let stdout = read_stream(&mut child, StreamName::Stdout)?;
    assert!(child.wait()?.success(), "git --version failed");
    assert!(
        stdout.starts_with("git version"),
        "unexpected version output: {stdout:?}"
    );

    Ok(())
}
