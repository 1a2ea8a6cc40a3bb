//! Size specifier parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SizeSpecError {
    #[error("Invalid size specifier '{0}': expected <width>x<height> with positive integers")]
    Malformed(String),
}

/// Requested output dimensions, parsed from a `<width>x<height>` specifier.
///
/// Parsing is strict: both sides must be plain positive decimal integers.
/// Malformed input is an error here, never a zero dimension handed to the
/// resampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSpec {
    pub width: u32,
    pub height: u32,
}

impl SizeSpec {
    pub fn parse(spec: &str) -> Result<Self, SizeSpecError> {
        let malformed = || SizeSpecError::Malformed(spec.to_string());

        let (w, h) = spec.split_once('x').ok_or_else(malformed)?;
        if w.is_empty()
            || h.is_empty()
            || !w.bytes().all(|b| b.is_ascii_digit())
            || !h.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let width: u32 = w.parse().map_err(|_| malformed())?;
        let height: u32 = h.parse().map_err(|_| malformed())?;
        if width == 0 || height == 0 {
            return Err(malformed());
        }

        Ok(SizeSpec { width, height })
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
