use std::{fmt::{self, Display, Formatter}, ops::{Add, Mul, Neg, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial in one variable, stored as a vector of coefficients in **descending** order of
/// power.
///
/// For a vector of length `n`, the coefficient at index `i` belongs to the power `n - 1 - i`. For
/// example, `[1.0, 3.0, 2.0]` represents `x^2 + 3x + 2`.
///
/// The vector always holds at least one coefficient. Arithmetic on polynomials is exact in the
/// sense that it only ever combines coefficients; no term is approximated or dropped. Leading zero
/// coefficients are kept as they are.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in descending order of power. An empty vector is
    /// treated as the zero polynomial `[0]`.
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            Self { coeffs: vec![0.0] }
        } else {
            Self { coeffs }
        }
    }

    /// The constant polynomial `c`.
    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    /// The polynomial `x`.
    pub fn identity() -> Self {
        Self { coeffs: vec![1.0, 0.0] }
    }

    /// The coefficients, in descending order of power.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// The nominal degree of the polynomial, which is one less than the number of coefficients.
    /// Leading zero coefficients are counted.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the single coefficient of a degree-0 polynomial.
    pub fn as_constant(&self) -> Option<f64> {
        match self.coeffs.as_slice() {
            [c] => Some(*c),
            _ => None,
        }
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Differentiates the polynomial with the power rule.
    ///
    /// The coefficient at index `i` becomes `coeff[i] * (degree - i)` and the constant term is
    /// dropped. A constant differentiates to `[0]`.
    pub fn derivative(&self) -> Polynomial {
        let degree = self.degree();
        if degree == 0 {
            return Polynomial::constant(0.0);
        }

        let coeffs = self.coeffs[..degree]
            .iter()
            .enumerate()
            .map(|(i, c)| c * (degree - i) as f64)
            .collect();
        Polynomial { coeffs }
    }

    /// Raises the polynomial to a non-negative integer power by repeated multiplication.
    ///
    /// This costs `O(exponent * degree^2)`; callers are expected to bound the exponent.
    pub fn pow(&self, exponent: u32) -> Polynomial {
        (0..exponent).fold(Polynomial::constant(1.0), |acc, _| &acc * self)
    }

    /// Left-pads the shorter of the two coefficient vectors with zeros so that both have the same
    /// length, then combines them elementwise.
    fn zip_aligned(&self, rhs: &Polynomial, f: impl Fn(f64, f64) -> f64) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let (pad_lhs, pad_rhs) = (len - self.coeffs.len(), len - rhs.coeffs.len());
        let lhs = std::iter::repeat(0.0).take(pad_lhs).chain(self.coeffs.iter().copied());
        let rhs = std::iter::repeat(0.0).take(pad_rhs).chain(rhs.coeffs.iter().copied());
        Polynomial {
            coeffs: lhs.zip(rhs).map(|(a, b)| f(a, b)).collect(),
        }
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.zip_aligned(rhs, |a, b| a + b)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.zip_aligned(rhs, |a, b| a - b)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    /// Multiplies two polynomials by convolving their coefficients.
    ///
    /// `a[i]` belongs to `x^(deg_a - i)` and `b[j]` to `x^(deg_b - j)`, so their product belongs
    /// to `x^(deg_a + deg_b - (i + j))`, which is index `i + j` of the result.
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut coeffs = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial { coeffs }
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }
}

macro_rules! forward_owned_ops {
    ($($trait:ident $method:ident),* $(,)?) => {
        $(
            impl $trait for Polynomial {
                type Output = Polynomial;

                fn $method(self, rhs: Polynomial) -> Polynomial {
                    (&self).$method(&rhs)
                }
            }
        )*
    };
}

forward_owned_ops!(Add add, Sub sub, Mul mul);

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

/// Formats the polynomial as a sum of terms in descending order of power, such as
/// `x^2 + 3x + 2` or `-0.5x - 1`. Zero terms are skipped, and the zero polynomial is written as
/// `0`.
impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut wrote_any = false;

        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }

            let power = degree - i;
            if wrote_any {
                write!(f, "{}", if c > 0.0 { " + " } else { " - " })?;
            } else if c < 0.0 {
                write!(f, "-")?;
            }
            wrote_any = true;

            // a coefficient of one is implied in front of `x`
            let magnitude = c.abs();
            if magnitude != 1.0 || power == 0 {
                write!(f, "{}", magnitude)?;
            }

            match power {
                0 => (),
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
        }

        if !wrote_any {
            write!(f, "0")?;
        }
        Ok(())
    }
}
