use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::{Dispatch, Level};

use super::builder::{GlobalLogBuilder, OutputOpts};
use crate::errors::prelude::*;

/// Keeps the registered log, and with it the non-blocking writer guards, alive for the whole program.
static REGISTERED: Lazy<Mutex<Option<GlobalLog>>> = Lazy::new(Mutex::default);

/// Outputs the `tracing` events the calculator emits.
///
/// Operations log nothing until a [`GlobalLog`] is either registered for the process,
/// or made active around a closure with [`GlobalLog::with_tmp_global`]:
///
/// ```
/// use calcbazaar::{log::{GlobalLog, OutputOpts}, Calculator};
/// use tracing::Level;
///
/// let log = GlobalLog::builder()
///     .stdout(OutputOpts::default().level_from(Level::TRACE).pretty())
///     .build()
///     .unwrap();
/// let sum = log.with_tmp_global(|| Calculator::new().add(1, 2));
/// assert_eq!(sum, calcbazaar::Number::Int(3));
/// ```
pub struct GlobalLog {
    pub(crate) dispatch: Dispatch,

    #[cfg(not(target_arch = "wasm32"))]
    /// Stdout stops being written to once these drop.
    pub(crate) _guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
}

impl GlobalLog {
    /// Start configuring outputs.
    pub fn builder() -> GlobalLogBuilder {
        GlobalLogBuilder::default()
    }

    /// Register colored, pretty stdout logging of calculator events from `level_from` upwards.
    pub fn setup_quick_stdout_global_logging(level_from: Level) -> RResult<(), AnyErr> {
        GlobalLog::builder()
            .stdout(OutputOpts::default().level_from(level_from).pretty().with_color())
            .build()?
            .register_global()
    }

    /// Make this the process-wide log, only one can ever be registered.
    pub fn register_global(self) -> RResult<(), AnyErr> {
        let mut registered = REGISTERED.lock();
        if registered.is_some() {
            return Err(anyerr!("A GlobalLog is already registered."));
        }
        tracing::dispatcher::set_global_default(self.dispatch.clone()).change_context(AnyErr)?;
        registered.replace(self);
        Ok(())
    }

    /// Run `f` with this log active on the current thread, taking precedence over any registered log.
    pub fn with_tmp_global<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}
