//! Visual identities of node kinds, for editors and other tooling.

/// Tooling identifier for a node's visual representation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Glyph {
    Placeholder,
    Boolean,
    None,
    Number,
    Text,
    List,
    Set,
    Map,
    Union,
    Language,
    Unit,
    Program,
}

impl Glyph {
    /// Short symbol shown where a node is listed, as in debug outlines.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Placeholder => "_",
            Glyph::Boolean => "?",
            Glyph::None => "ø",
            Glyph::Number => "#",
            Glyph::Text => "''",
            Glyph::List => "[]",
            Glyph::Set => "{}",
            Glyph::Map => "{:}",
            Glyph::Union => "|",
            Glyph::Language => "/",
            Glyph::Unit => "m",
            Glyph::Program => "¶",
        }
    }
}
