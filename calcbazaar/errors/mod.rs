mod any;
mod calc_err;
mod macros;
mod result_ext;

/// Publicly exporting the error stack crate, to prevent every dependent depending on it too.
pub use error_stack;

pub use any::AnyErr;
pub use calc_err::CalcErr;

/// Shorthand for a [`Result`] with a [`error_stack::Report`] as the error variant
pub type RResult<T, C> = Result<T, error_stack::Report<C>>;

pub use result_ext::*;

/// Easily import all useful error items. Useful to put inside a crate prelude.
pub mod prelude {
    #[allow(unused_imports)]
    pub use error_stack::{Report, ResultExt};

    #[allow(unused_imports)]
    pub use super::{AnyErr, CalcErr, CalcResultExt, RResult};

    #[allow(unused_imports)]
    pub use crate::anyerr;
}
