//! Toy calculator built from a declarative schema.
//!
//! The CLI shape and all help text are declared in YAML; the configurator
//! supplies the argument vocabulary and the handler registry binds one
//! function per terminal command. Try:
//!
//! ```text
//! calc prod 3 4
//! calc neg 2
//! calc reduce_to --offset 1 --scale 2 sum 3 4
//! ```

use std::process::ExitCode;

use argtree_builder::{
    BuildError, Configurator, DispatchError, HandlerRegistry, build_tree, register_fn,
};
use argtree_core::{ArgSpec, HelpCatalog, SchemaNode, ValueType};
use clap::ArgMatches;
use thiserror::Error;

const CLI_SCHEMA: &str = "\
calc:
  prod: [left, right]
  neg: [operand]
  reduce_to:
    __cur__: [offset, scale]
    sum: [numeric_args]
    max: [numeric_args]
    mean: [numeric_args]
";

const HELP_CATALOG: &str = "\
program: An example program for argtree. Implements some math ops
args:
  left: Left operand
  right: Right operand
  operand: Single operand
  offset: Numerical offset for output
  scale: Numerical multiplier for output
  numeric_args: Any number of numerical arguments
commands:
  prod: Product of two numbers
  neg: Negate a number
  reduce_to: Reduce numbers to a single value
  sum: Reduce numbers to their sum
  max: Reduce numbers to their max
  mean: Reduce numbers to their mean
";

struct CalcConfigurator;

impl Configurator for CalcConfigurator {
    fn arg_spec(&self, name: &str) -> Option<ArgSpec> {
        match name {
            "left" => Some(ArgSpec::positional("left", ValueType::Number)),
            "right" => Some(ArgSpec::positional("right", ValueType::Number)),
            "operand" => Some(ArgSpec::positional("operand", ValueType::Number)),
            "offset" => {
                Some(ArgSpec::option(Some('o'), "offset", ValueType::Number).with_default("0"))
            }
            "scale" => {
                Some(ArgSpec::option(Some('s'), "scale", ValueType::Number).with_default("1"))
            }
            "numeric_args" => {
                Some(ArgSpec::positional("numeric_args", ValueType::Number).variadic())
            }
            _ => None,
        }
    }
}

fn number(matches: &ArgMatches, name: &str) -> f64 {
    matches.get_one::<f64>(name).copied().unwrap_or_default()
}

fn numeric_args(matches: &ArgMatches) -> Vec<f64> {
    matches
        .get_many::<f64>("numeric_args")
        .into_iter()
        .flatten()
        .copied()
        .collect()
}

/// Applies the shared `offset`/`scale` arguments of `reduce_to`.
fn adjusted(matches: &ArgMatches, value: f64) -> f64 {
    (value + number(matches, "offset")) * number(matches, "scale")
}

fn prod(matches: &ArgMatches) {
    println!("{}", number(matches, "left") * number(matches, "right"));
}

fn neg(matches: &ArgMatches) {
    println!("{}", -number(matches, "operand"));
}

fn reduce_sum(matches: &ArgMatches) {
    let total: f64 = numeric_args(matches).iter().sum();
    println!("{}", adjusted(matches, total));
}

fn reduce_max(matches: &ArgMatches) {
    let max = numeric_args(matches)
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max);
    println!("{}", adjusted(matches, max));
}

fn reduce_mean(matches: &ArgMatches) {
    let values = numeric_args(matches);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    println!("{}", adjusted(matches, mean));
}

#[derive(Debug, Error)]
enum CalcError {
    #[error("invalid embedded declaration: {0}")]
    Declaration(#[from] serde_yaml::Error),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

fn register_handlers(handlers: &mut HandlerRegistry) -> Result<(), BuildError> {
    register_fn!(handlers, prod)?;
    register_fn!(handlers, neg)?;
    handlers.register("reduce_to.sum", reduce_sum)?;
    handlers.register("reduce_to.max", reduce_max)?;
    handlers.register("reduce_to.mean", reduce_mean)?;
    Ok(())
}

fn run() -> Result<(), CalcError> {
    let schema: SchemaNode = serde_yaml::from_str(CLI_SCHEMA)?;
    let catalog: HelpCatalog = serde_yaml::from_str(HELP_CATALOG)?;

    let mut handlers = HandlerRegistry::new();
    register_handlers(&mut handlers)?;

    let tree = build_tree(&schema, &catalog, &CalcConfigurator, &handlers)?;
    tree.dispatch(std::env::args())?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CalcError::Dispatch(DispatchError::Parse(err))) => err.exit(),
        Err(err) => {
            eprintln!("calc: {err}");
            ExitCode::FAILURE
        }
    }
}
