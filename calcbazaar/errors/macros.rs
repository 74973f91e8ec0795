/// Build a [`error_stack::Report`] of [`crate::errors::AnyErr`], optionally with a (formatted) printable attachment.
#[macro_export]
macro_rules! anyerr {
    () => {{
        $crate::errors::error_stack::Report::new($crate::errors::AnyErr)
    }};

    ($str:expr) => {{
        $crate::errors::error_stack::Report::new($crate::errors::AnyErr).attach_printable($str)
    }};

    ($str:expr, $($arg:expr),*) => {{
        $crate::errors::error_stack::Report::new($crate::errors::AnyErr)
            .attach_printable(format!($str, $($arg),*))
    }};
}
