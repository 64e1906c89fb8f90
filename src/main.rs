//! Command line entry point for regenerating manifests and resolving icon URLs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use token_icons::{AddressMap, GalleryConfig, GlobalManifestMode, IconResolver, ManifestBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "token-icons")]
#[command(about = "Build and query token icon manifests", long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Regenerate per-network and global manifests
  Generate {
    /// Project directory containing the icon tree
    #[arg(short, long, default_value = ".")]
    project: PathBuf,

    /// Configuration file (defaults to token-icons.config.json in the project)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shape of the global manifest
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Pretty-print written manifests
    #[arg(long)]
    pretty: bool,

    /// Sort networks and assets by directory name
    #[arg(long)]
    sorted: bool,
  },

  /// Print the icon URL for an address
  Resolve {
    /// Address to resolve
    address: String,

    /// Global manifest to look the address up in
    #[arg(short, long)]
    map: PathBuf,

    /// Project directory used to discover the URL template
    #[arg(short, long, default_value = ".")]
    project: PathBuf,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
  Full,
  Index,
}

impl From<ModeArg> for GlobalManifestMode {
  fn from(value: ModeArg) -> Self {
    match value {
      ModeArg::Full => GlobalManifestMode::Full,
      ModeArg::Index => GlobalManifestMode::Index,
    }
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into()))
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();

  match cli.command {
    Commands::Generate {
      project,
      config,
      mode,
      pretty,
      sorted,
    } => {
      let mut config = load_config(&project, config.as_deref())?;
      if let Some(mode) = mode {
        config.global_manifest_mode = mode.into();
      }
      config.pretty |= pretty;
      config.sort_entries |= sorted;

      let summary = ManifestBuilder::from_config(&config, &project)
        .generate(&config.global_manifest_file(&project))
        .context("manifest generation failed")?;
      for path in &summary.written {
        println!("{}", path.display());
      }
    }
    Commands::Resolve {
      address,
      map,
      project,
    } => {
      let config = GalleryConfig::discover(&project);
      let map = AddressMap::load(&map)?;
      let resolver = IconResolver::new(map, config.url_template);
      match resolver.resolve(&address)? {
        Some(url) => println!("{url}"),
        None => println!("not found"),
      }
    }
  }

  Ok(())
}

fn load_config(project: &Path, explicit: Option<&Path>) -> Result<GalleryConfig> {
  match explicit {
    Some(path) => GalleryConfig::from_path(path),
    None => Ok(GalleryConfig::discover(project)),
  }
}
