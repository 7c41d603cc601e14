use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::math::IntegrationMethod;

#[derive(Debug, Parser)]
#[command(
    name = "aquifer-outlook",
    version,
    about = "Groundwater mass-balance trend and storage projection"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Output directory for report, table and charts")]
    pub out: PathBuf,

    #[arg(long, help = "JSON config overlaying the built-in dataset")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false, help = "Write SVG charts")]
    pub plots: bool,

    #[arg(long, value_enum, help = "Override the configured integrator")]
    pub integrator: Option<IntegratorArg>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "JSON config overlaying the built-in dataset")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show(ConfigShowArgs),
}

#[derive(Debug, Args)]
pub struct ConfigShowArgs {
    #[arg(long, help = "Optional JSON config to overlay on the built-in dataset")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IntegratorArg {
    ClosedForm,
    AdaptiveSimpson,
}

impl From<IntegratorArg> for IntegrationMethod {
    fn from(arg: IntegratorArg) -> Self {
        match arg {
            IntegratorArg::ClosedForm => IntegrationMethod::ClosedForm,
            IntegratorArg::AdaptiveSimpson => IntegrationMethod::AdaptiveSimpson,
        }
    }
}
