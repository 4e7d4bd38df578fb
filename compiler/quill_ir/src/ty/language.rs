//! Language tags on text types.

use std::fmt;

/// A language tag: an ISO 639 code with an optional region, `en` or `es-MX`.
///
/// Any identifier is accepted here; well-formedness and whether the
/// language is known are conflicts, reported by the type checker.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct Language {
    code: String,
    region: Option<String>,
}

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Language {
            code: code.into(),
            region: None,
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Two or three lowercase ASCII letters.
    pub fn has_wellformed_code(&self) -> bool {
        (2..=3).contains(&self.code.len()) && self.code.bytes().all(|b| b.is_ascii_lowercase())
    }

    /// Absent, two uppercase ASCII letters, or three digits.
    pub fn has_wellformed_region(&self) -> bool {
        match &self.region {
            None => true,
            Some(region) => {
                (region.len() == 2 && region.bytes().all(|b| b.is_ascii_uppercase()))
                    || (region.len() == 3 && region.bytes().all(|b| b.is_ascii_digit()))
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)?;
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}
