// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sample_app_infra::app::{compose, DeploymentPlan};
use sample_app_infra::config::{load_config, load_zone_context, StackConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sample-app-infra")]
#[command(version)]
#[command(about = "Synthesize the sample app deployment plan", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the deployment plan and write it to the output directory
    Synth {
        #[command(flatten)]
        inputs: Inputs,

        /// Output directory for manifest.json and stack templates
        #[arg(short, long, default_value = "cdk.out")]
        out: PathBuf,
    },
    /// Print the stack deployment order
    Order {
        #[command(flatten)]
        inputs: Inputs,
    },
}

#[derive(clap::Args, Debug)]
struct Inputs {
    /// YAML config file; the process environment is used when omitted
    #[arg(short, long, env = "SAMPLE_APP_CONFIG")]
    config: Option<PathBuf>,

    /// YAML file listing the hosted zones that already exist
    #[arg(short, long, env = "SAMPLE_APP_ZONES", default_value = "configs/hosted-zones.yaml")]
    zones: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Synth { inputs, out } => {
            let plan = synthesize(&inputs)?;
            let manifest = plan
                .write_to(&out)
                .with_context(|| format!("writing plan to {}", out.display()))?;
            print_plan(&plan);
            println!("manifest: {}", manifest.display());
        }
        Commands::Order { inputs } => {
            let plan = synthesize(&inputs)?;
            for (level, stacks) in plan.levels.iter().enumerate() {
                println!("{level}: {}", stacks.join(", "));
            }
        }
    }

    Ok(())
}

fn synthesize(inputs: &Inputs) -> Result<DeploymentPlan> {
    let config = load_stack_config(inputs.config.as_deref())?;
    let zones = load_zone_context(&inputs.zones)?;
    let app = compose(&config, &zones)?;
    Ok(app.synth()?)
}

fn load_stack_config(path: Option<&Path>) -> Result<StackConfig> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => StackConfig::from_env().context("reading configuration from the environment"),
    }
}

fn print_plan(plan: &DeploymentPlan) {
    for (position, artifact) in plan.artifacts.iter().enumerate() {
        let depends_on = if artifact.dependencies.is_empty() {
            String::from("-")
        } else {
            artifact.dependencies.join(", ")
        };
        println!(
            "{}. {} ({}) {}/{} depends on: {}",
            position + 1,
            artifact.id,
            artifact.stack_name,
            artifact.environment.account,
            artifact.environment.region,
            depends_on
        );
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= 2),
        )
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_synth() {
        let cli = Cli::try_parse_from([
            "sample-app-infra",
            "synth",
            "--config",
            "c.yaml",
            "--zones",
            "z.yaml",
            "--out",
            "dist",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Synth { inputs, out } => {
                assert_eq!(inputs.config, Some(PathBuf::from("c.yaml")));
                assert_eq!(inputs.zones, PathBuf::from("z.yaml"));
                assert_eq!(out, PathBuf::from("dist"));
            }
            other => panic!("expected synth, got {other:?}"),
        }
    }

    #[test]
    fn test_synth_output_defaults_to_cdk_out() {
        let cli = Cli::try_parse_from(["sample-app-infra", "synth", "-z", "z.yaml"]).unwrap();

        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Synth { out, .. } => assert_eq!(out, PathBuf::from("cdk.out")),
            other => panic!("expected synth, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_order_with_global_verbosity() {
        let cli =
            Cli::try_parse_from(["sample-app-infra", "-v", "order", "--zones", "z.yaml"]).unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Order { inputs } => assert_eq!(inputs.zones, PathBuf::from("z.yaml")),
            other => panic!("expected order, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["sample-app-infra", "deploy"]).is_err());
        assert!(Cli::try_parse_from(["sample-app-infra"]).is_err());
    }

    #[test]
    fn test_synthesize_checked_in_configs() {
        let inputs = Inputs {
            config: Some(PathBuf::from("configs/sample-app.yaml")),
            zones: PathBuf::from("configs/hosted-zones.yaml"),
        };

        let plan = synthesize(&inputs).unwrap();

        assert_eq!(plan.levels.len(), 2);
        assert_eq!(plan.order.last().map(String::as_str), Some("SampleAppWebStack"));
    }

    #[test]
    fn test_synthesize_reports_missing_zone_file() {
        let inputs = Inputs {
            config: Some(PathBuf::from("configs/sample-app.yaml")),
            zones: PathBuf::from("configs/absent.yaml"),
        };

        assert!(synthesize(&inputs).is_err());
    }
}
