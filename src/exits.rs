//! Exit handling: signal handlers and process hardening.

const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h\r\n";

/// Signal handler for SIGINT/SIGTERM/SIGHUP - restore colors, exit 130
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
        libc::_exit(130)
    }
}

/// Install signal handlers. Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated secrets out of core dumps and ptrace.
#[cfg(target_os = "linux")]
pub fn harden() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}
