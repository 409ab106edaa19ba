// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use agency::{AgencyError, Context, Pipe, PipeOption};
use parking_lot::Mutex;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Agency error: {0}")]
  Agency(String), // Stored as String for Eq comparison

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<AgencyError> for TestError {
  fn from(err: AgencyError) -> Self {
    TestError::Agency(err.to_string())
  }
}

/// Ordered record of which handlers / interceptors ran.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn new_call_log() -> CallLog {
  Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<String> {
  log.lock().clone()
}

// --- Common Pipe Creators ---

/// Integer pipe that records `name` and applies `f`.
pub fn recording_pipe(name: &'static str, log: CallLog, f: fn(i64) -> i64) -> Pipe<i64, TestError> {
  Pipe::new(move |_ctx: Context, input: i64, _options: Vec<PipeOption>| {
    let log = log.clone();
    async move {
      log.lock().push(name.to_string());
      tracing::debug!(target: "test_handlers", step = %name, input, "executed");
      Ok::<_, TestError>(f(input))
    }
  })
}

pub fn failing_pipe(name: &'static str, log: CallLog, error_message: &'static str) -> Pipe<i64, TestError> {
  Pipe::new(move |_ctx: Context, _input: i64, _options: Vec<PipeOption>| {
    let log = log.clone();
    async move {
      log.lock().push(name.to_string());
      tracing::warn!(target: "test_handlers", step = %name, "failing with: '{}'", error_message);
      Err::<i64, _>(TestError::Handler(error_message.to_string()))
    }
  })
}

/// Pipe that counts its invocations and passes the input through.
pub fn counting_pipe(counter: Arc<AtomicUsize>) -> Pipe<i64, TestError> {
  Pipe::new(move |_ctx: Context, input: i64, _options: Vec<PipeOption>| {
    let counter = counter.clone();
    async move {
      counter.fetch_add(1, Ordering::SeqCst);
      Ok::<_, TestError>(input)
    }
  })
}

/// Interceptor that records `label:<value>` into `log`.
pub fn recording_interceptor(label: &'static str, log: CallLog) -> impl Fn(&i64, &[PipeOption]) + Send + Sync + 'static {
  move |msg: &i64, _options: &[PipeOption]| {
    log.lock().push(format!("{}:{}", label, msg));
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counters for checking execution counts ---
pub static HANDLER_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  HANDLER_EXEC_COUNTER.store(0, Ordering::SeqCst);
}
