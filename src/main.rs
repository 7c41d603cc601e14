use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use aquifer_outlook::cli::{Cli, Commands, ConfigCommand};
use aquifer_outlook::config;
use aquifer_outlook::ctx::Ctx;
use aquifer_outlook::io;
use aquifer_outlook::pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let mut ctx = Ctx::new(args.out, args.config, args.json, args.tsv, args.plots);
            ctx.integrator_override = args.integrator.map(Into::into);
            Pipeline::full().run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let mut ctx = Ctx::new(PathBuf::from("."), args.config, false, false, false);
            Pipeline::validation().run(&mut ctx)?;
            print_validate_summary(&ctx);
        }
        Commands::Config(args) => match args.command {
            ConfigCommand::Show(show) => {
                let cfg = config::load_effective(show.config.as_deref())?;
                cfg.validate()?;
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("aquifer-outlook validate ok");
    if let Some(series) = &ctx.series {
        println!("years: {}", series.len());
    }
    println!("scenarios: {}", ctx.scenarios.len());
    print_warnings(ctx);
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
