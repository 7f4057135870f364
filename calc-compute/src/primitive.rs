//! Numeric primitives: [`Complex`] numbers and [`Polynomial`]s with exact coefficient arithmetic.

pub mod complex;
pub mod polynomial;

pub use complex::Complex;
pub use polynomial::Polynomial;

/// Creates a [`Complex`] number with the given real and imaginary parts.
pub fn complex(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

/// Creates a [`Polynomial`] from the given coefficients, in descending order of power.
pub fn poly<const N: usize>(coeffs: [f64; N]) -> Polynomial {
    Polynomial::new(coeffs.to_vec())
}
