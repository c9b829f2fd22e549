//! Error kinds surfaced by the pipeline.
//!
//! Every error is detected and returned from the innermost call site;
//! there is no retry and no partial result on failure.

use thiserror::Error;

/// Errors the pipeline can report.
///
/// These correspond to the five negative error codes of the C ABI this
/// crate's contract is modeled on: `NoMem = -1`, `Overflow = -2`,
/// `InvalidUtf8 = -3`, `NotAssigned = -4`, `InvalidOpts = -5`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Allocation failed in an owning entry point (`map`/NFD/NFC/NFKD/NFKC).
    #[error("memory allocation failed")]
    NoMem,
    /// The result would exceed the range of the crate's size type.
    #[error("output length overflowed")]
    Overflow,
    /// The input byte sequence is not valid UTF-8 (overlong encoding,
    /// surrogate half, out-of-range scalar, or truncated sequence).
    #[error("invalid UTF-8 in input")]
    InvalidUtf8,
    /// `REJECTNA` was set and an unassigned codepoint was encountered.
    #[error("unassigned codepoint rejected")]
    NotAssigned,
    /// The requested option combination is inconsistent (e.g.
    /// `STRIPMARK` without `COMPOSE`/`DECOMPOSE`, or `COMPOSE` and
    /// `DECOMPOSE` together).
    #[error("inconsistent option combination")]
    InvalidOpts,
}

impl Error {
    /// The numeric error code this crate's C-style ABI contract uses.
    pub fn code(self) -> i32 {
        match self {
            Error::NoMem => -1,
            Error::Overflow => -2,
            Error::InvalidUtf8 => -3,
            Error::NotAssigned => -4,
            Error::InvalidOpts => -5,
        }
    }
}

/// A static human-readable message for an error code, mirroring the C
/// ABI's `errmsg(code)` convenience.
pub fn errmsg(err: Error) -> &'static str {
    match err {
        Error::NoMem => "memory could not be allocated",
        Error::Overflow => "result too large",
        Error::InvalidUtf8 => "invalid UTF-8 encountered while decoding",
        Error::NotAssigned => "unassigned codepoint",
        Error::InvalidOpts => "invalid option combination",
    }
}

/// This crate's `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_spec_layout() {
        assert_eq!(Error::NoMem.code(), -1);
        assert_eq!(Error::Overflow.code(), -2);
        assert_eq!(Error::InvalidUtf8.code(), -3);
        assert_eq!(Error::NotAssigned.code(), -4);
        assert_eq!(Error::InvalidOpts.code(), -5);
    }

    #[test]
    fn errmsg_is_nonempty() {
        for e in [
            Error::NoMem,
            Error::Overflow,
            Error::InvalidUtf8,
            Error::NotAssigned,
            Error::InvalidOpts,
        ] {
            assert!(!errmsg(e).is_empty());
        }
    }
}
