/// A pair of `(x, y)` values in **graph** units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GraphPoint<T>(pub T, pub T);

impl<T> GraphPoint<T>
where
    T: Into<f64> + Copy,
{
    /// Returns true if both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.0.into().is_finite() && self.1.into().is_finite()
    }
}
