//! The graph model.
//!
//! A [`GraphModel`] is built from one compiled function. Its derivative is computed once, when
//! the model is created: exactly with the power rule if the function is a polynomial, and as a
//! central difference otherwise. The derivative is therefore always available, whether or not it
//! is shown.
//!
//! ```
//! use calc_graph::{Curve, GraphModel};
//!
//! let mut graph = GraphModel::parse("x^2 + 3x + 2").unwrap();
//! assert_eq!(graph.curve(Curve::Derivative).eval(1.0), 5.0);
//!
//! graph.set_x_range(-1.0, 1.0).unwrap();
//! let plot = graph.plot();
//! assert_eq!(plot.function.len(), 512);
//! assert!(plot.derivative.is_none());
//! ```

pub mod error;
mod opts;
mod point;
mod sample;
mod viewport;

use calc_compute::function::RealFunction;
use calc_error::Error;
use log::debug;
pub use opts::GraphOptions;
pub use point::GraphPoint;
pub use sample::sample;
pub use viewport::Viewport;

/// One of the two curves of a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    /// The function itself.
    Function,

    /// The derivative of the function.
    Derivative,
}

/// The points to draw for a graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Plot {
    /// The points of the function.
    pub function: Vec<GraphPoint<f64>>,

    /// The points of the derivative, if it is shown.
    pub derivative: Option<Vec<GraphPoint<f64>>>,
}

/// A function of `x`, its derivative, and the region of the plane to show them in.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphModel {
    /// The function to graph.
    function: RealFunction,

    /// The derivative of [`GraphModel::function`].
    derivative: RealFunction,

    /// Whether the derivative is plotted.
    show_derivative: bool,

    /// The visible region.
    viewport: Viewport,

    /// The number of points to sample each curve at.
    samples: usize,
}

impl GraphModel {
    /// Creates a graph of the given function with the default options.
    pub fn new(function: RealFunction) -> GraphModel {
        GraphModel::with_options(function, GraphOptions::default())
    }

    /// Creates a graph of the given function with the given options.
    pub fn with_options(function: RealFunction, options: GraphOptions) -> GraphModel {
        let derivative = function.derivative();
        debug!(
            "created graph with {} derivative",
            if derivative.is_polynomial() { "exact" } else { "numeric" },
        );

        GraphModel {
            function,
            derivative,
            show_derivative: options.show_derivative,
            viewport: options.viewport,
            samples: options.samples,
        }
    }

    /// Compiles the given text as a function of `x` and creates a graph of it with the default
    /// options.
    pub fn parse(input: &str) -> Result<GraphModel, Error> {
        calc_parser::function::parse(input).map(GraphModel::new)
    }

    /// The function being graphed.
    pub fn function(&self) -> &RealFunction {
        &self.function
    }

    /// The derivative of the function being graphed.
    pub fn derivative(&self) -> &RealFunction {
        &self.derivative
    }

    /// Returns the function or its derivative.
    pub fn curve(&self, curve: Curve) -> &RealFunction {
        match curve {
            Curve::Function => &self.function,
            Curve::Derivative => &self.derivative,
        }
    }

    /// Whether the derivative is plotted.
    pub fn show_derivative(&self) -> bool {
        self.show_derivative
    }

    /// Sets whether the derivative is plotted.
    pub fn set_show_derivative(&mut self, show_derivative: bool) {
        self.show_derivative = show_derivative;
    }

    /// The visible region of the graph.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Sets the range of the x-axis. See [`Viewport::set_x_range`].
    pub fn set_x_range(&mut self, min: f64, max: f64) -> Result<(), Error> {
        self.viewport.set_x_range(min, max)
    }

    /// Sets the range of the y-axis. See [`Viewport::set_y_range`].
    pub fn set_y_range(&mut self, min: f64, max: f64) -> Result<(), Error> {
        self.viewport.set_y_range(min, max)
    }

    /// Samples one curve across the x-range of the viewport.
    pub fn sample(&self, curve: Curve, samples: usize) -> Vec<GraphPoint<f64>> {
        sample(self.curve(curve), self.viewport.x_range(), samples)
    }

    /// Samples the function, and the derivative if it is shown, across the x-range of the
    /// viewport. Both curves are sampled in parallel.
    pub fn plot(&self) -> Plot {
        let (function, derivative) = rayon::join(
            || self.sample(Curve::Function, self.samples),
            || self.show_derivative.then(|| self.sample(Curve::Derivative, self.samples)),
        );
        Plot { function, derivative }
    }
}
