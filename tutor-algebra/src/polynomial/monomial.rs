use std::{cmp::Ordering, collections::BTreeMap, fmt};

/// A product of symbols raised to positive integer powers, such as `x^2*y`. The empty product is
/// the constant monomial `1`.
///
/// Symbols with an exponent of zero are never stored, so two monomials are equal exactly when
/// they describe the same product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Monomial(BTreeMap<String, u32>);

impl Monomial {
    /// The constant monomial `1`.
    pub fn one() -> Self {
        Self::default()
    }

    /// A single symbol raised to the first power.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self(BTreeMap::from([(name.into(), 1)]))
    }

    /// Returns true if the monomial contains no symbols.
    pub fn is_constant(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the total degree of the monomial, i.e. the sum of its exponents.
    pub fn degree(&self) -> u32 {
        self.0.values().sum()
    }

    /// Returns the exponent of the given symbol, which is zero if the symbol does not appear.
    pub fn exponent(&self, symbol: &str) -> u32 {
        self.0.get(symbol).copied().unwrap_or(0)
    }

    /// Returns the symbols in this monomial, in alphabetical order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of distinct symbols in this monomial.
    pub fn symbol_count(&self) -> usize {
        self.0.len()
    }

    /// Divides this monomial by another, returning [`None`] if the result would need a negative
    /// exponent.
    pub fn checked_div(&self, divisor: &Monomial) -> Option<Monomial> {
        let mut quotient = self.0.clone();
        for (symbol, &exp) in &divisor.0 {
            let remaining = quotient.get(symbol).copied().unwrap_or(0).checked_sub(exp)?;
            if remaining == 0 {
                quotient.remove(symbol);
            } else {
                quotient.insert(symbol.clone(), remaining);
            }
        }
        Some(Monomial(quotient))
    }

    /// Orders monomials for display: higher total degree first, then by the exponents of the
    /// symbols in alphabetical order, higher exponents first. This prints `x^2 + 2*x*y + y^2`
    /// rather than `2*x*y + x^2 + y^2`.
    pub fn display_cmp(&self, other: &Monomial) -> Ordering {
        other.degree().cmp(&self.degree()).then_with(|| {
            let mut symbols = self.symbols().chain(other.symbols()).collect::<Vec<_>>();
            symbols.sort_unstable();
            symbols.dedup();
            symbols
                .into_iter()
                .map(|symbol| other.exponent(symbol).cmp(&self.exponent(symbol)))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl<'a> std::ops::Mul<&'a Monomial> for &'a Monomial {
    type Output = Monomial;

    fn mul(self, rhs: &'a Monomial) -> Monomial {
        let mut product = self.0.clone();
        for (symbol, &exp) in &rhs.0 {
            *product.entry(symbol.clone()).or_insert(0) += exp;
        }
        Monomial(product)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_constant() {
            return write!(f, "1");
        }

        for (i, (symbol, exp)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            write!(f, "{}", symbol)?;
            if *exp > 1 {
                write!(f, "^{}", exp)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_and_divide() {
        let xy = &Monomial::symbol("x") * &Monomial::symbol("y");
        let x2y = &xy * &Monomial::symbol("x");
        assert_eq!(x2y.to_string(), "x^2*y");
        assert_eq!(x2y.degree(), 3);
        assert_eq!(x2y.symbol_count(), 2);

        assert_eq!(x2y.checked_div(&xy), Some(Monomial::symbol("x")));
        assert_eq!(x2y.checked_div(&x2y), Some(Monomial::one()));
        assert_eq!(xy.checked_div(&x2y), None);
    }

    #[test]
    fn display_order() {
        let x2 = &Monomial::symbol("x") * &Monomial::symbol("x");
        let xy = &Monomial::symbol("x") * &Monomial::symbol("y");
        let y2 = &Monomial::symbol("y") * &Monomial::symbol("y");

        let mut monomials = vec![y2.clone(), Monomial::one(), xy.clone(), x2.clone()];
        monomials.sort_by(Monomial::display_cmp);
        assert_eq!(monomials, vec![x2, xy, y2, Monomial::one()]);
    }
}
