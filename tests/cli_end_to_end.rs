use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use assert_cmd::Command;
use tempfile::TempDir;

/// Stand-in `snap`/`pkill` executables on an isolated PATH.
struct FakeTools {
    dir: TempDir,
}

impl FakeTools {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    fn install(&self, name: &str, script_body: &str) {
        let path = self.dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{script_body}\n")).expect("write fake tool");
        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod fake tool");
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("invocations.log")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("snapup").expect("binary built");
        cmd.env("PATH", self.dir.path());
        cmd.env("RUST_LOG", "off");
        cmd
    }
}

#[test]
fn help_displays_usage_information() {
    let tools = FakeTools::new();
    let mut cmd = tools.command();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("refresh"))
        .stdout(predicate::str::contains("full"));
}

#[test]
fn version_flag_prints_version() {
    let tools = FakeTools::new();
    let mut cmd = tools.command();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_rejected() {
    let tools = FakeTools::new();
    let mut cmd = tools.command();
    cmd.arg("upgrade");

    cmd.assert().failure();
}

#[test]
fn successful_refresh_exits_zero_after_enter() {
    let tools = FakeTools::new();
    tools.install("snap", "exit 0");

    let mut cmd = tools.command();
    cmd.arg("refresh").write_stdin("\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Refreshing snaps..."))
        .stdout(predicate::str::contains("Press Enter to continue..."));
}

#[test]
fn failing_refresh_propagates_its_exit_code() {
    let tools = FakeTools::new();
    tools.install("snap", "exit 1");

    let mut cmd = tools.command();
    cmd.arg("refresh").write_stdin("\n");

    // The pause still happens; the failure only shows in the exit status.
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Press Enter to continue..."));
}

#[test]
fn prompt_appears_only_after_refresh_output() {
    let tools = FakeTools::new();
    tools.install("snap", "echo refresh-output");

    let mut cmd = tools.command();
    cmd.arg("refresh").write_stdin("\n");

    cmd.assert().success().stdout(predicate::eq(
        "Refreshing snaps...\nrefresh-output\nPress Enter to continue...\n",
    ));
}

#[test]
fn full_variant_closes_store_before_refreshing() {
    let tools = FakeTools::new();
    let log = tools.log_path();
    tools.install("pkill", &format!("echo pkill-$1 >> {}", log.display()));
    tools.install("snap", &format!("echo snap-$1 >> {}", log.display()));

    let mut cmd = tools.command();
    cmd.arg("full").write_stdin("\n");
    cmd.assert().success();

    let invocations = fs::read_to_string(&log).expect("invocation log");
    assert_eq!(invocations, "pkill-snap-store\nsnap-refresh\n");
}

#[test]
fn full_variant_refreshes_even_when_no_store_was_running() {
    let tools = FakeTools::new();
    // pkill exits 1 when nothing matched
    tools.install("pkill", "exit 1");
    tools.install("snap", "exit 0");

    let mut cmd = tools.command();
    cmd.arg("full").write_stdin("\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Refreshing snaps..."));
}

#[test]
fn missing_snap_executable_reports_an_error() {
    let tools = FakeTools::new();

    let mut cmd = tools.command();
    cmd.arg("refresh");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("'snap' not found in PATH"));
}

#[test]
fn closed_stdin_does_not_hang_the_pause() {
    let tools = FakeTools::new();
    tools.install("snap", "exit 0");

    // No stdin at all: the pause sees end of input and returns immediately.
    let mut cmd = tools.command();
    cmd.arg("refresh");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to continue..."));
}
