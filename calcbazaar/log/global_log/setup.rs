use tracing::{Dispatch, Metadata, Subscriber};
use tracing_subscriber::{
    filter::FilterFn, layer::SubscriberExt, registry::LookupSpan, Layer, Registry,
};

use super::{
    builder::{GlobalLogBuilder, Output, OutputOpts, WriteFn, CALC_TARGET},
    GlobalLog,
};
use crate::prelude::*;

/// Adapts a [`WriteFn`] to the writer tracing_subscriber expects.
#[derive(Clone)]
struct FnWriter(WriteFn);

impl std::io::Write for FnWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        (self.0)(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'writer> tracing_subscriber::fmt::MakeWriter<'writer> for FnWriter {
    type Writer = FnWriter;

    fn make_writer(&self) -> Self::Writer {
        self.clone()
    }
}

pub(crate) fn build_global_log(builder: GlobalLogBuilder) -> RResult<GlobalLog, AnyErr> {
    if builder.outputs.is_empty() {
        return Err(anyerr!("No outputs configured, add stdout() or custom() first."));
    }

    #[cfg(not(target_arch = "wasm32"))]
    let mut guards = vec![];

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> =
        Vec::with_capacity(builder.outputs.len());
    for output in builder.outputs {
        let layer = match output {
            Output::Stdout(opts) => {
                #[cfg(not(target_arch = "wasm32"))]
                let writer = {
                    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
                    guards.push(guard);
                    writer
                };
                #[cfg(target_arch = "wasm32")]
                let writer = std::io::stdout;

                fmt_layer(&opts, writer)?.with_filter(output_filter(&opts))
            }
            Output::Custom(opts, write) => {
                fmt_layer(&opts, FnWriter(write))?.with_filter(output_filter(&opts))
            }
        };
        layers.push(layer.boxed());
    }

    let dispatch = Dispatch::new(tracing_subscriber::registry().with(layers));
    Ok(GlobalLog {
        dispatch,
        #[cfg(not(target_arch = "wasm32"))]
        _guards: guards,
    })
}

fn output_filter(opts: &OutputOpts) -> FilterFn<impl Fn(&Metadata<'_>) -> bool> {
    let (level_from, calc_only) = (opts.level_from, opts.calc_only);
    FilterFn::new(move |metadata| {
        // TRACE compares greatest, so this keeps level_from and anything more severe:
        level_from >= *metadata.level()
            && (!calc_only || metadata.target().starts_with(CALC_TARGET))
    })
}

fn fmt_layer<S, W>(
    opts: &OutputOpts,
    writer: W,
) -> RResult<Box<dyn Layer<S> + Send + Sync + 'static>, AnyErr>
where
    S: Subscriber + Send + Sync + 'static,
    for<'a> S: LookupSpan<'a>,
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    // When every event is ours the target is noise:
    let base = tracing_subscriber::fmt::layer()
        .with_target(!opts.calc_only)
        .with_file(opts.include_loc)
        .with_line_number(opts.include_loc)
        .with_ansi(opts.include_color)
        .with_writer(writer);

    // Each of pretty/compact and the timer changes the layer's type:
    Ok(match (opts.include_ts, opts.pretty) {
        (true, pretty) => {
            let format =
                time::format_description::parse("[hour]:[minute]:[second].[subsecond digits:3]")
                    .change_context(AnyErr)?;
            let offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
            let timer = tracing_subscriber::fmt::time::OffsetTime::new(offset, format);
            if pretty {
                base.pretty().with_timer(timer).boxed()
            } else {
                base.compact().with_timer(timer).boxed()
            }
        }
        (false, true) => base.pretty().without_time().boxed(),
        (false, false) => base.compact().without_time().boxed(),
    })
}
