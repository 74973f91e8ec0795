mod global_log;

pub use global_log::{GlobalLog, GlobalLogBuilder, OutputOpts};
