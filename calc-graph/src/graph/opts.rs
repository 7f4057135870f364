use super::viewport::Viewport;

/// Options to use when creating a graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphOptions {
    /// The initial viewport of the graph.
    ///
    /// The default value is `[-10, 10]` on both axes.
    pub viewport: Viewport,

    /// The number of evenly spaced points to sample each curve at when plotting.
    ///
    /// The default value is `512`.
    pub samples: usize,

    /// Whether the derivative is plotted alongside the function.
    ///
    /// The default value is `false`.
    pub show_derivative: bool,
}

/// The default options for a graph. Returns a [`GraphOptions`] with the following values:
///
/// - [`viewport`](GraphOptions::viewport): `[-10, 10] × [-10, 10]`
/// - [`samples`](GraphOptions::samples): `512`
/// - [`show_derivative`](GraphOptions::show_derivative): `false`
impl Default for GraphOptions {
    fn default() -> GraphOptions {
        GraphOptions {
            viewport: Viewport::default(),
            samples: 512,
            show_derivative: false,
        }
    }
}

impl GraphOptions {
    /// Set the initial viewport. Returns an updated [`GraphOptions`] for chaining.
    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the number of samples per curve. Returns an updated [`GraphOptions`] for chaining.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set whether the derivative is plotted. Returns an updated [`GraphOptions`] for chaining.
    pub fn show_derivative(mut self, show_derivative: bool) -> Self {
        self.show_derivative = show_derivative;
        self
    }
}
