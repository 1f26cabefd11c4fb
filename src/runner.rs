//! Spawn-and-wait supervision for maintenance steps.

use crate::error::MaintenanceError;
use crate::plan::{Plan, Step};
use crate::prompt;
use crate::signal;
use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Runs every step of the plan in order, one child at a time, and returns the
/// exit code of the last step.
///
/// A step that exits non-zero does not stop the sequence; only spawn-phase
/// failures abort. `pkill snap-store` exiting 1 because no store was open must
/// not block the refresh that follows it.
pub async fn run_plan(plan: &Plan) -> Result<i32, MaintenanceError> {
    let mut last_code = 0;
    for step in &plan.steps {
        last_code = run_step(step).await?;
        if step.pause_after {
            prompt::pause_on_stdin().await?;
        }
    }
    Ok(last_code)
}

/// Announces and runs a single step: resolve the executable, spawn it with the
/// terminal streams inherited, block until the child exits.
pub async fn run_step(step: &Step) -> Result<i32, MaintenanceError> {
    println!("{}", step.announce);

    let program = resolve_program(&step.program)?;

    let mut command = Command::new(&program);
    command.args(&step.args);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    isolate_child(&mut command);

    let mut child = command.spawn()?;
    let child_pid = child
        .id()
        .ok_or_else(|| io::Error::other("Failed to get child PID"))?;
    let signal_guard = signal::install(child_pid)?;

    debug!("started {} pid={}", step.program, child_pid);

    let status = child.wait().await?;
    drop(signal_guard);

    let code = extract_exit_code(status);
    if code != 0 {
        debug!("{} exited with code {}", step.program, code);
    }
    Ok(code)
}

fn resolve_program(name: &str) -> Result<PathBuf, MaintenanceError> {
    which::which(name).map_err(|_| MaintenanceError::ToolNotFound(name.to_string()))
}

/// Child gets its own process group so terminal signals travel through the
/// signal guard, plus a parent-death SIGTERM on Linux so an orphaned refresh
/// does not outlive us.
#[cfg(unix)]
fn isolate_child(command: &mut Command) {
    unsafe {
        command.pre_exec(|| {
            if libc::setpgid(0, 0) != 0 {
                return Err(io::Error::last_os_error());
            }
            #[cfg(target_os = "linux")]
            {
                if libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM) != 0 {
                    return Err(io::Error::last_os_error());
                }
            }
            Ok(())
        });
    }
}

#[cfg(not(unix))]
fn isolate_child(_command: &mut Command) {}

fn extract_exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
