//! Named single-argument functions that can be called from an expression, such as `sin(x)`.

use levenshtein::levenshtein;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A built-in real function of one argument. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Ln,
    Log10,
    Exp,
}

/// Every name a built-in function can be called by. `lg` and `log` both refer to the base-10
/// logarithm.
const NAMES: &[(&str, Builtin)] = &[
    ("sin", Builtin::Sin),
    ("cos", Builtin::Cos),
    ("tan", Builtin::Tan),
    ("arcsin", Builtin::Asin),
    ("arccos", Builtin::Acos),
    ("arctan", Builtin::Atan),
    ("sqrt", Builtin::Sqrt),
    ("ln", Builtin::Ln),
    ("lg", Builtin::Log10),
    ("log", Builtin::Log10),
    ("exp", Builtin::Exp),
];

impl Builtin {
    /// Looks up a built-in function by name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Builtin> {
        NAMES.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
    }

    /// Returns the canonical name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "arcsin",
            Self::Acos => "arccos",
            Self::Atan => "arctan",
            Self::Sqrt => "sqrt",
            Self::Ln => "ln",
            Self::Log10 => "log",
            Self::Exp => "exp",
        }
    }

    /// Evaluates the function at `x`. Inputs outside the domain of the function produce NaN.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sqrt => x.sqrt(),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Exp => x.exp(),
        }
    }

    /// Returns the names of all built-in functions with a name similar to the given name.
    pub fn similar_names(name: &str) -> Vec<&'static str> {
        NAMES
            .iter()
            .filter(|(n, _)| levenshtein(n, name) < 2)
            .map(|(n, _)| *n)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(Builtin::from_name("lg"), Some(Builtin::Log10));
        assert_eq!(Builtin::from_name("log"), Some(Builtin::Log10));
        assert_eq!(Builtin::from_name("arctan"), Some(Builtin::Atan));
        assert_eq!(Builtin::from_name("Sin"), None);
    }

    #[test]
    fn evaluate() {
        assert_eq!(Builtin::Sqrt.eval(4.0), 2.0);
        assert_float_absolute_eq!(Builtin::Log10.eval(1000.0), 3.0, 1e-12);
        assert!(Builtin::Ln.eval(-1.0).is_nan());
    }

    #[test]
    fn suggestions() {
        assert_eq!(Builtin::similar_names("sine"), vec!["sin"]);
        assert_eq!(Builtin::similar_names("sqr"), vec!["sqrt"]);
        assert!(Builtin::similar_names("foobar").is_empty());
    }
}
