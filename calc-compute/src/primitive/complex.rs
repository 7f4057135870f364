use std::{fmt::{self, Display, Formatter}, ops::{Add, Mul, Neg, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parts with a magnitude below this threshold are omitted from the canonical form.
const DISPLAY_EPSILON: f64 = 1e-12;

/// A complex number `re + im i`.
///
/// Complex numbers are plain values; every operation returns a new number.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// The imaginary unit.
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    /// Creates a new complex number.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Creates a complex number with no imaginary part.
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Creates a complex number with no real part.
    pub const fn imag(im: f64) -> Self {
        Self { re: 0.0, im }
    }

    /// The real part.
    pub fn re(&self) -> f64 {
        self.re
    }

    /// The imaginary part.
    pub fn im(&self) -> f64 {
        self.im
    }

    /// `(a + bi) / (c + di) = ((a + bi)(c - di)) / (c^2 + d^2)`
    ///
    /// Returns [`None`] if the squared modulus of `rhs` is exactly zero.
    pub fn checked_div(self, rhs: Complex) -> Option<Complex> {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        if denom == 0.0 {
            return None;
        }

        Some(Complex {
            re: (self.re * rhs.re + self.im * rhs.im) / denom,
            im: (self.im * rhs.re - self.re * rhs.im) / denom,
        })
    }

    /// The complex conjugate, `a - bi`.
    pub fn conj(self) -> Complex {
        Complex { re: self.re, im: -self.im }
    }

    /// The modulus `|a + bi|`, computed without intermediate overflow.
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Returns true if both parts are within `epsilon` of the parts of `other`.
    pub fn approx_eq(self, other: Complex, epsilon: f64) -> bool {
        (self.re - other.re).abs() <= epsilon && (self.im - other.im).abs() <= epsilon
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::real(re)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex { re: self.re + rhs.re, im: self.im + rhs.im }
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex { re: self.re - rhs.re, im: self.im - rhs.im }
    }
}

impl Mul for Complex {
    type Output = Complex;

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
    fn mul(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex { re: -self.re, im: -self.im }
    }
}

/// Formats the number in its canonical form, with exactly three decimal digits per part:
///
/// - `3.000` if the imaginary part is negligible,
/// - `-2.000i` if the real part is negligible,
/// - `3.000 + 4.000i` / `3.000 - 4.000i` otherwise.
///
/// The canonical form can be parsed back by the complex expression grammar.
impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.im.abs() < DISPLAY_EPSILON {
            return write!(f, "{:.3}", self.re);
        }

        if self.re.abs() < DISPLAY_EPSILON {
            let sign = if self.im < 0.0 { "-" } else { "" };
            return write!(f, "{}{:.3}i", sign, self.im.abs());
        }

        let sign = if self.im < 0.0 { '-' } else { '+' };
        write!(f, "{:.3} {} {:.3}i", self.re, sign, self.im.abs())
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, -2.0);

        assert_eq!(a + b, Complex::new(4.0, 2.0));
        assert_eq!(a - b, Complex::new(2.0, 6.0));
        assert_eq!(a * b, Complex::new(11.0, -2.0));
        assert_eq!(-a, Complex::new(-3.0, -4.0));
    }

    #[test]
    fn division() {
        let a = Complex::new(11.0, -2.0);
        let b = Complex::new(1.0, -2.0);
        let q = a.checked_div(b).unwrap();
        assert_float_absolute_eq!(q.re(), 3.0, 1e-12);
        assert_float_absolute_eq!(q.im(), 4.0, 1e-12);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(Complex::new(1.0, 1.0).checked_div(Complex::default()), None);
    }

    #[test]
    fn conj_abs() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.conj(), Complex::new(3.0, -4.0));
        assert_eq!(z.abs(), 5.0);
        assert_eq!(Complex::new(1e300, 1e300).abs().is_finite(), true);
    }

    #[test]
    fn canonical_form() {
        assert_eq!(Complex::new(3.0, 4.0).to_string(), "3.000 + 4.000i");
        assert_eq!(Complex::new(3.0, -4.0).to_string(), "3.000 - 4.000i");
        assert_eq!(Complex::new(0.0, -2.0).to_string(), "-2.000i");
        assert_eq!(Complex::new(0.0, 0.5).to_string(), "0.500i");
        assert_eq!(Complex::new(5.0, 0.0).to_string(), "5.000");
        assert_eq!(Complex::new(-1.25, 1e-13).to_string(), "-1.250");
        assert_eq!(Complex::default().to_string(), "0.000");
    }
}
