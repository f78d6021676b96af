//! GL version string parsing
//!
//! `GL_VERSION` looks like `<major>.<minor>[.<release>] [vendor info]`.
//! Parsing never fails: an unreadable major becomes 0, which callers treat
//! as a legacy context.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlVersion {
    /// 0 when the string could not be parsed.
    pub major: u32,
    pub minor: Option<u32>,
}

impl GlVersion {
    pub const UNKNOWN: GlVersion = GlVersion {
        major: 0,
        minor: None,
    };

    pub fn parse(version: &str) -> Self {
        let Some((head, tail)) = version.split_once('.') else {
            return Self::UNKNOWN;
        };
        let Ok(major) = head.trim().parse::<u32>() else {
            return Self::UNKNOWN;
        };

        let digits = tail.split(|c: char| !c.is_ascii_digit()).next().unwrap_or("");
        let minor = digits.parse::<u32>().ok();
        Self { major, minor }
    }

    /// Contexts from 3.0 on enumerate extensions by index.
    pub fn has_indexed_extensions(&self) -> bool {
        self.major >= 3
    }

    pub fn is_known(&self) -> bool {
        self.major != 0
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.minor {
            Some(minor) => write!(f, "{}.{}", self.major, minor),
            None => write!(f, "{}", self.major),
        }
    }
}
