//! Newsmap - News and Video sitemap generator.

mod cli;

use anyhow::{Result, anyhow};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use newsmap::config::{SitemapsConfig, find_config_file};
use newsmap::sitemap::{Assembler, REGISTRY};
use newsmap::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config_path = find_config_file(&cli.config)
        .ok_or_else(|| anyhow!("config file `{}` not found", cli.config.display()))?;
    let config = SitemapsConfig::from_path(&config_path)?;
    debug!("config"; "loaded {}", config.config_path.display());

    cli::common::register_sources(&config, &REGISTRY)?;

    let site = config.site();
    let assembler = Assembler::global(&site);
    let publication = config.publication();

    match &cli.command {
        Commands::Build { output, minify } => {
            let output_dir = match output {
                Some(dir) => dir.clone(),
                None => config.output_dir(),
            };
            let minify = *minify || config.build.minify;
            cli::build::build_sitemaps(&assembler, &publication, &output_dir, minify)?;
        }
        Commands::Index => println!("{}", cli::render::index_document(&assembler)),
        Commands::Render { name, page, json } => {
            let document =
                cli::render::page_document(&assembler, &publication, name, *page, *json)?;
            println!("{document}");
        }
    }

    Ok(())
}
