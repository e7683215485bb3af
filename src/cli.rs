//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

use acis_manifest::defaults::{DEFAULT_MANIFEST_FILENAME, MANIFEST_FILE_ENV};
use acis_manifest::locate::find_manifest;
use acis_manifest::manifest::Manifest;

use crate::commands;

/// Manage the observation manifest (YAML format)
#[derive(Parser, Debug)]
#[command(name = "acis-manifest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (default: show)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Manifest file; searched for upward from --directory if it does not
    /// exist as given
    #[arg(
        short = 'F',
        long,
        global = true,
        value_name = "FILE",
        default_value = DEFAULT_MANIFEST_FILENAME,
        env = MANIFEST_FILE_ENV
    )]
    file: PathBuf,

    /// Be brief: print bare values without labels or messages
    #[arg(short, long, global = true)]
    brief: bool,

    /// From where to find the manifest file
    #[arg(short = 'C', long, global = true, value_name = "DIR", default_value = ".")]
    directory: PathBuf,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show manifest contents
    Show,
    /// Get an item from the manifest
    Get(commands::get::GetArgs),
    /// Get the path to a file item from the manifest
    Getpath(commands::getpath::GetpathArgs),
    /// Set (add or update) an item in the manifest
    Set(commands::set::SetArgs),
    /// Set a file item to the paths of the given files, relative to the manifest
    Setpath(commands::setpath::SetpathArgs),
    /// Add a new item to the manifest
    Add(commands::add::AddArgs),
    /// Update an existing item in the manifest
    Update(commands::update::UpdateArgs),
    /// Delete an item from the manifest
    Delete(commands::delete::DeleteArgs),
    /// Collect items from several manifests into CSV or JSON
    Collect(commands::collect::CollectArgs),
    /// Register generated products (and the manifest directory) in the manifest
    Register(commands::register::RegisterArgs),
    /// Show the object name and observation ID of the manifest's directory
    Obsinfo,
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Global options shared by the subcommands.
#[derive(Debug)]
pub struct Context {
    pub brief: bool,
    file: PathBuf,
    directory: PathBuf,
}

impl Context {
    /// Path of the manifest file: `--file` itself if it exists, otherwise the
    /// result of searching upward from `--directory`.
    pub fn manifest_path(&self) -> Result<PathBuf> {
        if self.file.exists() {
            return Ok(self.file.clone());
        }
        let filename = self.file.to_string_lossy();
        Ok(find_manifest(&filename, &self.directory)?)
    }

    /// Locate and load the manifest.
    pub fn manifest(&self) -> Result<Manifest> {
        let path = self.manifest_path()?;
        Manifest::load(&path).with_context(|| format!("failed to load {}", path.display()))
    }

    /// Where a new manifest is created when none can be found.
    pub fn new_manifest_path(&self) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            self.directory.join(&self.file)
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());
        // a logger may already be installed when embedded in tests
        let _ = env_logger::Builder::from_env(env).try_init();

        let ctx = Context {
            brief: self.brief,
            file: self.file,
            directory: self.directory,
        };

        match self.command.unwrap_or(Commands::Show) {
            Commands::Show => commands::show::execute(&ctx),
            Commands::Get(args) => commands::get::execute(args, &ctx),
            Commands::Getpath(args) => commands::getpath::execute(args, &ctx),
            Commands::Set(args) => commands::set::execute(args, &ctx),
            Commands::Setpath(args) => commands::setpath::execute(args, &ctx),
            Commands::Add(args) => commands::add::execute(args, &ctx),
            Commands::Update(args) => commands::update::execute(args, &ctx),
            Commands::Delete(args) => commands::delete::execute(args, &ctx),
            Commands::Collect(args) => commands::collect::execute(args, &ctx),
            Commands::Register(args) => commands::register::execute(args, &ctx),
            Commands::Obsinfo => commands::obsinfo::execute(&ctx),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
