//! The read-only environment of type operations.

use rustc_hash::FxHashSet;

/// ISO 639-1 codes known without configuration.
pub const KNOWN_LANGUAGES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da",
    "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj",
    "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
    "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi",
    "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti",
    "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo",
    "wa", "wo", "xh", "yi", "yo", "za", "zh", "zu",
];

/// Settings shared by generalization, conflict checking and
/// assignability. Built once, then only read.
#[derive(Clone, Debug)]
pub struct Context {
    languages: FxHashSet<String>,
    source_name: String,
}

impl Context {
    pub fn new() -> Self {
        Context {
            languages: KNOWN_LANGUAGES.iter().map(|code| (*code).to_string()).collect(),
            source_name: String::from("<input>"),
        }
    }

    /// Add language codes to the known set.
    #[must_use]
    pub fn with_languages<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Name of the source under check, used in diagnostics.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    pub fn knows_language(&self, code: &str) -> bool {
        self.languages.contains(code)
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
