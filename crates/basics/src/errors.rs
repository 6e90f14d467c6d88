//! Error handling and exit codes.

use basics_core::constants::exit_codes;
use basics_core::session::SessionError;

/// Map a session error to its exit code.
pub fn handle_error(err: &SessionError) -> i32 {
    match err {
        SessionError::InvalidNumber { .. } | SessionError::MissingInput(_) => {
            exit_codes::ERROR_INPUT
        }
        SessionError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SessionError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
