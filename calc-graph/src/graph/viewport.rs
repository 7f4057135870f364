use calc_error::Error;
use super::error::InvalidRange;

/// The visible region of a graph, in graph units.
///
/// The bounds of each axis always satisfy `min < max`, and are finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

/// The default viewport shows `[-10, 10]` on both axes.
impl Default for Viewport {
    fn default() -> Viewport {
        Viewport {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

/// Checks that `min..max` is a usable range for the given axis.
fn validate(axis: char, min: f64, max: f64) -> Result<(), Error> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(Error::new(Vec::new(), InvalidRange { axis, min, max }))
    }
}

impl Viewport {
    /// Creates a viewport from the given `(min, max)` ranges.
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Result<Viewport, Error> {
        validate('x', x.0, x.1)?;
        validate('y', y.0, y.1)?;
        Ok(Viewport { x_min: x.0, x_max: x.1, y_min: y.0, y_max: y.1 })
    }

    /// The `(min, max)` range of the x-axis.
    pub fn x_range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// The `(min, max)` range of the y-axis.
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Sets the range of the x-axis. The viewport is left unchanged if the range is empty,
    /// inverted, or not finite.
    pub fn set_x_range(&mut self, min: f64, max: f64) -> Result<(), Error> {
        validate('x', min, max)?;
        self.x_min = min;
        self.x_max = max;
        Ok(())
    }

    /// Sets the range of the y-axis. The viewport is left unchanged if the range is empty,
    /// inverted, or not finite.
    pub fn set_y_range(&mut self, min: f64, max: f64) -> Result<(), Error> {
        validate('y', min, max)?;
        self.y_min = min;
        self.y_max = max;
        Ok(())
    }
}
