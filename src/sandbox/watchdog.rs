//! Time budget and heap limit enforcement for one isolate

use std::ffi::c_void;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use deno_core::{v8, JsRuntime};

/// Terminates the isolate from outside once the budget has elapsed.
///
/// The budget is wall-clock time measured from [`Watchdog::arm`]. Dropping
/// the watchdog cancels it and joins its thread, so the `IsolateHandle` it
/// holds never outlives the owning context.
pub struct Watchdog {
    fired: Arc<AtomicBool>,
    cancel: Option<mpsc::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Watchdog {
    /// Start the countdown
    pub fn arm(handle: v8::IsolateHandle, budget: Duration) -> std::io::Result<Self> {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let thread = std::thread::Builder::new()
            .name("judge-watchdog".to_string())
            .spawn(move || {
                if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(budget) {
                    flag.store(true, Ordering::SeqCst);
                    handle.terminate_execution();
                    tracing::debug!(budget_ms = budget.as_millis() as u64, "Watchdog terminated isolate");
                }
            })?;

        Ok(Self {
            fired,
            cancel: Some(cancel_tx),
            thread: Some(thread),
        })
    }

    /// Whether the budget ran out
    pub fn fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Stop the countdown and wait for the watchdog thread to exit
    pub fn disarm(&mut self) {
        // Dropping the sender wakes the thread with `Disconnected`.
        self.cancel.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("Watchdog thread panicked");
            }
        }
    }
}

impl Drop for Watchdog {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// State for the near-heap-limit callback
struct HeapLimitState {
    handle: v8::IsolateHandle,
    triggered: AtomicBool,
}

/// V8 near-heap-limit callback. Terminates execution and grants 1 MB of
/// headroom so the termination can unwind instead of aborting the process.
extern "C" fn near_heap_limit_callback(
    data: *mut c_void,
    current_heap_limit: usize,
    _initial_heap_limit: usize,
) -> usize {
    // SAFETY: `data` points at the `HeapLimitState` boxed by `HeapGuard`,
    // which is declared after the runtime in `ExecutionContext` and so is
    // dropped only once the isolate is gone. Only atomics are touched.
    let state = unsafe { &*(data as *const HeapLimitState) };
    if !state.triggered.swap(true, Ordering::SeqCst) {
        state.handle.terminate_execution();
    }
    current_heap_limit + 1024 * 1024
}

/// Owns the callback state registered with the isolate
pub struct HeapGuard {
    state: Box<HeapLimitState>,
}

impl HeapGuard {
    /// Register the near-heap-limit callback on `runtime`
    pub fn install(runtime: &mut JsRuntime) -> Self {
        let state = Box::new(HeapLimitState {
            handle: runtime.v8_isolate().thread_safe_handle(),
            triggered: AtomicBool::new(false),
        });
        runtime.v8_isolate().add_near_heap_limit_callback(
            near_heap_limit_callback,
            &*state as *const HeapLimitState as *mut c_void,
        );
        Self { state }
    }

    /// Whether the heap limit was reached
    pub fn triggered(&self) -> bool {
        self.state.triggered.load(Ordering::SeqCst)
    }
}
