use calc_compute::function::RealFunction;
use calc_graph::{Curve, GraphModel, GraphOptions};
use crate::{assemble::assemble, error::Error};
use log::debug;
use std::{fmt, str::FromStr};

const HELP: &str = "\
commands:
  :mode arith|complex|graph   switch the grammar used for input
  :x <min> <max>              set the x-range of the graph
  :y <min> <max>              set the y-range of the graph
  :derivative on|off          plot the derivative alongside the function
  :at <x>                     evaluate the graphed function and its derivative at x
  :help                       show this message";

/// The grammar that lines of input are parsed with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Real arithmetic, such as `3 + 4 * (2 - 1)`.
    #[default]
    Arith,

    /// Complex arithmetic, such as `conj(3 + 4i) * i`.
    Complex,

    /// Functions of `x` to graph, such as `x^2 + 3x + 2`.
    Graph,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arith" => Ok(Mode::Arith),
            "complex" => Ok(Mode::Complex),
            "graph" => Ok(Mode::Graph),
            _ => Err(Error::command(format!("unknown mode `{}`", s))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Arith => write!(f, "arith"),
            Mode::Complex => write!(f, "complex"),
            Mode::Graph => write!(f, "graph"),
        }
    }
}

/// Parses a number argument of a command.
fn number_arg(arg: Option<&str>) -> Result<f64, Error> {
    let arg = arg.ok_or_else(|| Error::command("missing number"))?;
    arg.parse().map_err(|_| Error::command(format!("`{}` is not a number", arg)))
}

/// Describes a function in a line of output.
fn describe(name: &str, function: &RealFunction) -> String {
    match function.as_polynomial() {
        Some(poly) => format!("{} = {}", name, poly),
        None => format!("{} is evaluated numerically", name),
    }
}

/// The state of an interactive session.
#[derive(Debug, Default)]
pub struct Repl {
    /// The current input mode.
    mode: Mode,

    /// The result of the last successful calculation in [`Mode::Arith`].
    ans: Option<f64>,

    /// Options applied to every new graph.
    graph_options: GraphOptions,

    /// The last function that was graphed.
    graph: Option<GraphModel>,
}

impl Repl {
    /// Creates a session in [`Mode::Arith`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The prompt to show before reading a line.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.mode)
    }

    /// Handles one line of input, returning the text to print, if any.
    pub fn handle(&mut self, line: &str) -> Result<Option<String>, Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        match line.strip_prefix(':') {
            Some(command) => self.command(command),
            None => self.evaluate(line).map(Some),
        }
    }

    /// Evaluates an expression in the current mode.
    fn evaluate(&mut self, line: &str) -> Result<String, Error> {
        match self.mode {
            Mode::Arith => {
                let source = assemble(line, self.ans);
                let value = calc_parser::arith::parse(&source)
                    .and_then(|expr| expr.eval())
                    .map_err(|error| Error::Expr { source, error })?;

                if value.is_finite() {
                    self.ans = Some(value);
                }
                Ok(format!("{}", value))
            },
            Mode::Complex => calc_parser::complex::parse(line)
                .map(|z| z.to_string())
                .map_err(|error| Error::Expr { source: line.to_string(), error }),
            Mode::Graph => {
                let function = calc_parser::function::parse(line)
                    .map_err(|error| Error::Expr { source: line.to_string(), error })?;
                let graph = GraphModel::with_options(function, self.graph_options);
                let output = self.describe_graph(&graph);
                self.graph = Some(graph);
                Ok(output)
            },
        }
    }

    /// Summarizes a graph: its curves, and the points plotted for them.
    fn describe_graph(&self, graph: &GraphModel) -> String {
        let plot = graph.plot();
        let (x_min, x_max) = graph.viewport().x_range();

        let mut lines = vec![
            describe("f(x)", graph.function()),
            describe("f'(x)", graph.derivative()),
            format!("plotted {} points of f for x in [{}, {}]", plot.function.len(), x_min, x_max),
        ];
        if let Some(derivative) = plot.derivative {
            lines.push(format!("plotted {} points of f'", derivative.len()));
        }
        lines.join("\n")
    }

    /// Runs a `:` command.
    fn command(&mut self, command: &str) -> Result<Option<String>, Error> {
        let mut args = command.split_whitespace();
        let name = args.next().unwrap_or_default();
        debug!("running command `{}`", name);

        match name {
            "mode" => {
                let mode = args.next().ok_or_else(|| Error::command("missing mode"))?;
                self.mode = mode.parse()?;
                Ok(None)
            },
            "x" | "y" => {
                let min = number_arg(args.next())?;
                let max = number_arg(args.next())?;
                let viewport = &mut self.graph_options.viewport;
                let result = if name == "x" {
                    viewport.set_x_range(min, max)
                } else {
                    viewport.set_y_range(min, max)
                };
                result.map_err(|error| Error::Expr { source: command.to_string(), error })?;

                if let Some(graph) = &mut self.graph {
                    let _ = if name == "x" {
                        graph.set_x_range(min, max)
                    } else {
                        graph.set_y_range(min, max)
                    };
                }
                Ok(self.graph.as_ref().map(|graph| self.describe_graph(graph)))
            },
            "derivative" => {
                let show = match args.next() {
                    Some("on") => true,
                    Some("off") => false,
                    _ => return Err(Error::command("expected `on` or `off`")),
                };
                self.graph_options.show_derivative = show;
                if let Some(graph) = &mut self.graph {
                    graph.set_show_derivative(show);
                }
                Ok(self.graph.as_ref().map(|graph| self.describe_graph(graph)))
            },
            "at" => {
                let x = number_arg(args.next())?;
                let graph = self.graph.as_ref().ok_or_else(|| Error::command("nothing is graphed"))?;
                Ok(Some(format!(
                    "f({x}) = {}\nf'({x}) = {}",
                    graph.curve(Curve::Function).eval(x),
                    graph.curve(Curve::Derivative).eval(x),
                )))
            },
            "help" => Ok(Some(HELP.to_string())),
            _ => Err(Error::command(format!("unknown command `:{}`", name))),
        }
    }
}
