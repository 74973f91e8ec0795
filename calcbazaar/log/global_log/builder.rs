use std::sync::Arc;

use tracing::Level;

use super::GlobalLog;
use crate::prelude::*;

/// Target prefix shared by every event the calculator emits.
pub(crate) const CALC_TARGET: &str = "calcbazaar";

/// Writes one fully formatted event.
pub(crate) type WriteFn = Arc<dyn Fn(&[u8]) + Send + Sync>;

/// Formatting and filtering for a single log output.
///
/// Defaults to INFO and up, compact, no color, no location or timestamp, calculator events only.
/// Calculator operations log at TRACE and rejected divisions at DEBUG, so lower the level to see them:
///
/// ```
/// use calcbazaar::log::OutputOpts;
/// use tracing::Level;
///
/// let opts = OutputOpts::default().level_from(Level::TRACE).with_loc();
/// ```
#[derive(Debug, Clone)]
pub struct OutputOpts {
    pub(crate) level_from: Level,
    pub(crate) pretty: bool,
    pub(crate) include_loc: bool,
    pub(crate) include_ts: bool,
    pub(crate) include_color: bool,
    pub(crate) calc_only: bool,
}

impl Default for OutputOpts {
    fn default() -> Self {
        Self {
            level_from: Level::INFO,
            pretty: false,
            include_loc: false,
            include_ts: false,
            include_color: false,
            calc_only: true,
        }
    }
}

impl OutputOpts {
    /// The least severe level to output, e.g. [`Level::TRACE`] to see every evaluated operation.
    pub fn level_from(mut self, level: Level) -> Self {
        self.level_from = level;
        self
    }

    /// Multi-line output, easier on the eyes.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Include the file and line the event came from.
    pub fn with_loc(mut self) -> Self {
        self.include_loc = true;
        self
    }

    /// Prefix events with a local `HH:MM:SS.mmm` timestamp.
    pub fn with_ts(mut self) -> Self {
        self.include_ts = true;
        self
    }

    /// Include ANSI color codes.
    pub fn with_color(mut self) -> Self {
        self.include_color = true;
        self
    }

    /// Also output events from other crates, each prefixed with its target.
    pub fn all_targets(mut self) -> Self {
        self.calc_only = false;
        self
    }
}

pub(crate) enum Output {
    Stdout(OutputOpts),
    Custom(OutputOpts, WriteFn),
}

/// Configures the outputs of a [`GlobalLog`].
#[derive(Default)]
pub struct GlobalLogBuilder {
    pub(crate) outputs: Vec<Output>,
}

impl GlobalLogBuilder {
    /// Write to stdout, non-blocking where threads are available.
    pub fn stdout(mut self, opts: OutputOpts) -> Self {
        self.outputs.push(Output::Stdout(opts));
        self
    }

    /// Hand each formatted event to `writer`, e.g. to collect them:
    ///
    /// `let log = String::from_utf8_lossy(log);`
    pub fn custom(
        mut self,
        opts: OutputOpts,
        writer: impl Fn(&[u8]) + Send + Sync + 'static,
    ) -> Self {
        self.outputs.push(Output::Custom(opts, Arc::new(writer)));
        self
    }

    /// Build the log, errors when no outputs were added.
    pub fn build(self) -> RResult<GlobalLog, AnyErr> {
        super::setup::build_global_log(self)
    }
}
