use std::borrow::Cow;

/// Errors raised by the flags slice.
#[folio_derive::folio_error]
pub enum FlagError {
    /// The registry declares dependencies on flags that do not exist.
    #[error("Flag dependency validation failed{}: {}", format_context(.context), .errors.join("; "))]
    Dependencies { errors: Vec<String>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal flags error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
