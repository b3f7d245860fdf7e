//! Command-line interface for text-to-img
//!
//! The `text-to-img` binary parses [`cli::Args`] and hands them to
//! [`commands::render::run`]. Errors come back as values; only
//! [`exit_status`] decides how the process ends.

pub mod cli;
pub mod commands;

use ttimg_core::TtiError;

/// Process exit status for invalid options
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Process exit status for failures after validation
pub const EXIT_FAILURE: u8 = 1;

/// Map an error to the process exit status.
pub fn exit_status(error: &TtiError) -> u8 {
    if error.is_validation() {
        EXIT_INVALID_INPUT
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttimg_core::{RenderError, ValidationError};

    #[test]
    fn test_exit_status() {
        let err = TtiError::from(ValidationError::InvalidColor("#HHHHHH".into()));
        assert_eq!(exit_status(&err), 2);
        let err = TtiError::from(RenderError::EmptyImage("   ".into()));
        assert_eq!(exit_status(&err), 1);
    }
}
