//! Relays terminal signals to the supervised child.
//!
//! Children run in their own process group, so a terminal SIGINT only reaches
//! the parent; the installed handler forwards it to whichever child is
//! currently registered.

use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Once;

static CHILD_PID: AtomicU32 = AtomicU32::new(0);

pub struct SignalGuard;

impl Drop for SignalGuard {
    fn drop(&mut self) {
        CHILD_PID.store(0, Ordering::SeqCst);
    }
}

/// Registers `child_pid` as the forwarding target and installs the handlers on
/// first use. The guard deregisters the pid when dropped.
pub fn install(child_pid: u32) -> io::Result<SignalGuard> {
    CHILD_PID.store(child_pid, Ordering::SeqCst);

    static INIT: Once = Once::new();
    INIT.call_once(|| unsafe {
        setup_signal_handlers();
    });

    Ok(SignalGuard)
}

extern "C" fn forward_signal(signum: libc::c_int) {
    if matches!(signum, libc::SIGINT | libc::SIGTERM) {
        let pid = CHILD_PID.load(Ordering::SeqCst);
        if pid != 0 {
            // kill(2) is async-signal-safe
            unsafe {
                libc::kill(pid as libc::pid_t, signum);
            }
        }
    }
}

unsafe fn setup_signal_handlers() {
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();

        // SA_RESTART so the parent's blocking wait is not interrupted
        action.sa_flags = libc::SA_RESTART;
        action.sa_sigaction = forward_signal as usize;

        let mut empty_set: libc::sigset_t = std::mem::zeroed();
        libc::sigemptyset(&mut empty_set as *mut libc::sigset_t);
        action.sa_mask = empty_set;

        libc::sigaction(libc::SIGINT, &action, std::ptr::null_mut());
        libc::sigaction(libc::SIGTERM, &action, std::ptr::null_mut());
    }
}
