mod builder;
mod out;
mod setup;

pub use builder::{GlobalLogBuilder, OutputOpts};
pub use out::GlobalLog;
