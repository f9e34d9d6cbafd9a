//! Optimize command implementation for the Loadsmith CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info};
use loadsmith_core::{OptimizeRequest, OptimizeResponse, Optimizer};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_COMPACT, ARG_MAX_ORDERS, ARG_OPTIMIZE_REQUEST, CliError, ENV_OPTIMIZE_REQUEST};

/// Largest number of orders accepted per request unless configured otherwise.
///
/// Enumeration cost doubles with every order in a group, so the cap keeps
/// the worst case bounded.
pub const DEFAULT_MAX_ORDERS: usize = 25;

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Select the highest-paying set of compatible orders that fits \
                 the truck's weight and volume limits and shares a loading \
                 window. The request is a JSON document with a `truck` and \
                 its candidate `orders`; the chosen plan is written to stdout \
                 as JSON.",
    about = "Optimize a truck load"
)]
#[ortho_config(prefix = "LOADSMITH")]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON file containing an optimize request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Largest number of orders accepted in one request.
    #[arg(long = ARG_MAX_ORDERS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_orders: Option<usize>,
    /// Write the response on a single line instead of pretty-printing it.
    #[arg(long = ARG_COMPACT)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) compact: bool,
}

impl OptimizeArgs {
    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptimizeConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Largest accepted order count, at least one.
    pub(crate) max_orders: usize,
    /// Emit single-line JSON.
    pub(crate) compact: bool,
}

impl OptimizeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_OPTIMIZE_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Reject requests offering more orders than the configured cap.
    pub(crate) const fn check_order_count(&self, count: usize) -> Result<(), CliError> {
        if count > self.max_orders {
            Err(CliError::TooManyOrders {
                count,
                max: self.max_orders,
            })
        } else {
            Ok(())
        }
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_OPTIMIZE_REQUEST,
            env: ENV_OPTIMIZE_REQUEST,
        })?;
        let max_orders = args.max_orders.unwrap_or(DEFAULT_MAX_ORDERS);
        if max_orders == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_MAX_ORDERS,
                reason: "must be at least 1",
            });
        }
        Ok(Self {
            request_path,
            max_orders,
            compact: args.compact,
        })
    }
}

/// Builds an optimizer instance for the current optimize invocation.
pub(crate) trait OptimizerBuilder {
    fn build(&self, config: &OptimizeConfig) -> Result<Box<dyn Optimizer>, CliError>;
}

pub(crate) struct DefaultOptimizerBuilder;

impl OptimizerBuilder for DefaultOptimizerBuilder {
    #[cfg(feature = "solver-exhaustive")]
    fn build(&self, _config: &OptimizeConfig) -> Result<Box<dyn Optimizer>, CliError> {
        Ok(Box::new(
            loadsmith_solver_exhaustive::ExhaustiveOptimizer::new(),
        ))
    }

    #[cfg(not(feature = "solver-exhaustive"))]
    fn build(&self, _config: &OptimizeConfig) -> Result<Box<dyn Optimizer>, CliError> {
        Err(CliError::MissingFeature {
            feature: "solver-exhaustive",
            action: "optimize",
        })
    }
}

pub(crate) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultOptimizerBuilder;
    run_optimize_with(args, &builder, &mut stdout)
}

pub(crate) fn run_optimize_with(
    args: OptimizeArgs,
    builder: &dyn OptimizerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_optimize_config(args)?;
    let response = execute_optimize(&config, builder)?;
    write_optimize_response(writer, &response, config.compact)
}

fn resolve_optimize_config(args: OptimizeArgs) -> Result<OptimizeConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_optimize(
    config: &OptimizeConfig,
    builder: &dyn OptimizerBuilder,
) -> Result<OptimizeResponse, CliError> {
    let request = load_optimize_request(&config.request_path)?;
    request
        .validate_detailed()
        .map_err(|source| CliError::InvalidOptimizeRequest {
            path: config.request_path.clone(),
            source,
        })?;
    config.check_order_count(request.orders.len())?;
    debug!(
        "optimizing {} orders for vehicle {} from {}",
        request.orders.len(),
        request.vehicle.id,
        config.request_path
    );
    let optimizer = builder.build(config)?;
    let response = optimizer
        .optimize(&request)
        .map_err(|source| CliError::Optimize { source })?;
    info!(
        "selected {} orders paying {} cents",
        response.plan.selected_order_ids.len(),
        response.plan.total_payout_cents
    );
    Ok(response)
}

/// Loads a JSON-encoded [`OptimizeRequest`] from disk.
pub(crate) fn load_optimize_request(path: &Utf8Path) -> Result<OptimizeRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenOptimizeRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseOptimizeRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_optimize_response(
    writer: &mut dyn Write,
    response: &OptimizeResponse,
    compact: bool,
) -> Result<(), CliError> {
    let payload = if compact {
        serde_json::to_string(response)
    } else {
        serde_json::to_string_pretty(response)
    }
    .map_err(CliError::SerializeOptimizeResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOptimizeOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteOptimizeOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
