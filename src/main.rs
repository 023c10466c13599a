//! sitenav - check, export and query a documentation site's navigation.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use sitenav::config::resolve_config_path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    sitenav::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name } => cli::init::new_declaration(name.as_deref(), &cli.config),
        Commands::Check => {
            let path = resolve_config_path(&cli.config);
            let handle = cli::common::load_handle(&path)?;
            cli::check::report_summary(&path, &handle.current());
            Ok(())
        }
        Commands::Export { args } => {
            let handle = cli::common::load_handle(&resolve_config_path(&cli.config))?;
            cli::export::export_plain(&handle.current(), args)
        }
        Commands::Resolve { path } => {
            let handle = cli::common::load_handle(&resolve_config_path(&cli.config))?;
            println!("{}", cli::resolve::describe(&handle.current().resolve(path), path));
            Ok(())
        }
    }
}
