//! Units of measure on number types.

use std::collections::BTreeMap;
use std::fmt;

/// A product of named dimensions with non-zero integer exponents.
///
/// Dimensions are kept sorted, so two units with the same exponents are
/// equal and render identically regardless of how they were written.
/// There is no empty unit: a unitless number has `unit: None`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct Unit {
    dimensions: BTreeMap<String, i32>,
}

impl Unit {
    /// `name^1`
    pub fn named(name: impl Into<String>) -> Self {
        let mut dimensions = BTreeMap::new();
        dimensions.insert(name.into(), 1);
        Unit { dimensions }
    }

    /// Multiply out `dimensions`, summing repeated names. Returns `None`
    /// when every exponent cancels.
    pub fn from_dimensions<S, I>(dimensions: I) -> Option<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, i32)>,
    {
        let mut product: BTreeMap<String, i32> = BTreeMap::new();
        for (name, exponent) in dimensions {
            let entry = product.entry(name.into()).or_insert(0);
            *entry = entry.saturating_add(exponent);
        }
        product.retain(|_, exponent| *exponent != 0);
        (!product.is_empty()).then_some(Unit {
            dimensions: product,
        })
    }

    /// Dimensions in canonical (alphabetical) order.
    pub fn dimensions(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.dimensions
            .iter()
            .map(|(name, exponent)| (name.as_str(), *exponent))
    }
}

fn write_factors<'a>(
    f: &mut fmt::Formatter<'_>,
    factors: impl Iterator<Item = (&'a str, i32)>,
) -> fmt::Result {
    for (i, (name, exponent)) in factors.enumerate() {
        if i > 0 {
            f.write_str("·")?;
        }
        f.write_str(name)?;
        if exponent != 1 {
            write!(f, "^{exponent}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_positive = self.dimensions.values().any(|&e| e > 0);
        // `i32::MIN` has no positive counterpart to put under a slash.
        let has_min = self.dimensions.values().any(|&e| e == i32::MIN);
        if !has_positive || has_min {
            // `s^-1`
            return write_factors(f, self.dimensions());
        }
        write_factors(f, self.dimensions().filter(|&(_, e)| e > 0))?;
        if self.dimensions.values().any(|&e| e < 0) {
            f.write_str("/")?;
            write_factors(
                f,
                self.dimensions()
                    .filter(|&(_, e)| e < 0)
                    .map(|(name, e)| (name, e.saturating_neg())),
            )?;
        }
        Ok(())
    }
}
