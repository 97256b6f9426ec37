use std::sync::atomic::{AtomicBool, Ordering};

static QUIT_REQUESTED: AtomicBool = AtomicBool::new(false);

pub fn should_quit() -> bool {
    QUIT_REQUESTED.load(Ordering::SeqCst)
}

pub fn request_quit() {
    QUIT_REQUESTED.store(true, Ordering::SeqCst);
}

#[cfg(unix)]
pub fn install() {
    use std::os::raw::c_int;
    const SIGINT: c_int = 2;
    const SIGTERM: c_int = 15;

    extern "C" fn handler(_sig: c_int) {
        // Set a flag only; do not perform IO in signal context
        request_quit();
    }

    extern "C" {
        fn signal(sig: c_int, handler: extern "C" fn(c_int)) -> usize;
    }

    unsafe {
        let _ = signal(SIGINT, handler);
        let _ = signal(SIGTERM, handler);
    }
}

#[cfg(not(unix))]
pub fn install() {
    #[cfg(target_os = "windows")]
    unsafe {
        type HandlerRoutine = extern "system" fn(u32) -> i32;
        extern "system" {
            fn SetConsoleCtrlHandler(handler: Option<HandlerRoutine>, add: i32) -> i32;
        }
        extern "system" fn handler(_ctrl_type: u32) -> i32 {
            request_quit();
            1
        }
        let _ = SetConsoleCtrlHandler(Some(handler), 1);
    }
}
