//! Ordered locale preferences with English fallback.

use smallvec::SmallVec;

use crate::keys::TextKey;
use crate::tables::{AVAILABLE, ENGLISH};
use crate::Locale;

/// The user's locale preferences, most preferred first.
///
/// English is always the last entry, so every lookup succeeds.
#[derive(Clone, Debug)]
pub struct Locales {
    preferred: SmallVec<[&'static Locale; 2]>,
}

impl Locales {
    /// Build a preference list from language codes.
    ///
    /// Unknown codes are skipped and duplicates collapse to their first
    /// position.
    pub fn new(codes: &[&str]) -> Self {
        let mut preferred: SmallVec<[&'static Locale; 2]> = SmallVec::new();
        for code in codes {
            let code = code.trim();
            let Some(locale) = AVAILABLE.iter().copied().find(|l| l.code == code) else {
                continue;
            };
            if !preferred.iter().any(|l| l.code == locale.code) {
                preferred.push(locale);
            }
        }
        if !preferred.iter().any(|l| l.code == ENGLISH.code) {
            preferred.push(&ENGLISH);
        }
        Locales { preferred }
    }

    /// Parse a comma-separated preference string, e.g. `"es,en"`.
    pub fn from_preference(preference: &str) -> Self {
        let codes: Vec<&str> = preference.split(',').filter(|c| !c.trim().is_empty()).collect();
        Self::new(&codes)
    }

    /// English only.
    pub fn english() -> Self {
        Self::new(&[])
    }

    /// The most preferred locale.
    pub fn primary(&self) -> &'static Locale {
        self.preferred.first().copied().unwrap_or(&ENGLISH)
    }

    /// Codes in preference order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.preferred.iter().map(|l| l.code)
    }

    /// Resolve a key against the preference list.
    pub fn get<K: TextKey>(&self, key: K) -> &'static K::Texts {
        self.preferred
            .iter()
            .find_map(|locale| key.lookup(*locale))
            .or_else(|| key.lookup(&ENGLISH))
            .unwrap_or_else(|| K::missing())
    }

    /// Fill a template from one of this locale's texts.
    pub fn concretize(&self, template: &str, args: &[&str]) -> String {
        crate::concretize(template, args)
    }
}

impl Default for Locales {
    fn default() -> Self {
        Self::english()
    }
}
