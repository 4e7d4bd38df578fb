//! Grammar productions, as `impl Parser` blocks.

mod ty;
