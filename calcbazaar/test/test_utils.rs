use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    log::{GlobalLog, OutputOpts},
    prelude::*,
};

/// Run `f` with a temporary log writing to memory, returning its result and one trimmed string per event.
pub fn capture_logs<T>(
    opts: OutputOpts,
    f: impl FnOnce() -> T,
) -> RResult<(T, Vec<String>), AnyErr> {
    let logs = Arc::new(Mutex::new(Vec::new()));
    let sink = logs.clone();
    let log = GlobalLog::builder()
        .custom(opts, move |log| {
            sink.lock()
                .push(String::from_utf8_lossy(log).trim().to_string())
        })
        .build()?;
    let out = log.with_tmp_global(f);
    let captured = logs.lock().clone();
    Ok((out, captured))
}
