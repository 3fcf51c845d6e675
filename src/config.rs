//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::context::LinkContext;
use crate::store::MemoryStore;

/// Input path that reads Govspeak from stdin.
const STDIN_PATH: &str = "-";

/// Command line configuration for govspeak-render.
#[derive(Debug, Clone, Parser)]
#[command(name = "govspeak-render", version, about, long_about = None)]
pub struct Config {
    /// Govspeak file to render, "-" for stdin
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// JSON fixture with documents and supporting pages
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Host the admin request is served from, without port
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Path prefix all routes are mounted under (e.g. /government)
    #[arg(long)]
    pub router_prefix: Option<String>,

    /// Public host serving an admin host's content, as ADMIN=PUBLIC
    #[arg(long = "public-host", value_name = "ADMIN=PUBLIC")]
    pub public_hosts: Vec<String>,

    /// Annotate internal links with the editorial state of their target
    #[arg(long)]
    pub admin: bool,

    /// Print headings of this level instead of rendering
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub headers: Option<u8>,

    /// Wrap output in a standalone preview page
    #[arg(long)]
    pub standalone: bool,

    /// Output file, stdout when absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input or store file does not exist, or a public
    /// host mapping is malformed.
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() && !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if let Some(store) = &self.store
            && !store.exists()
        {
            bail!("Store fixture does not exist: {}", store.display());
        }

        self.public_host_pairs()?;

        Ok(())
    }

    /// Whether Govspeak is read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN_PATH)
    }

    /// Parses `--public-host` values into (admin host, public host) pairs.
    ///
    /// # Errors
    ///
    /// Returns error if a value is not of the form `ADMIN=PUBLIC`.
    pub fn public_host_pairs(&self) -> Result<Vec<(String, String)>> {
        self.public_hosts
            .iter()
            .map(|mapping| match mapping.split_once('=') {
                Some((admin, public)) if !admin.trim().is_empty() && !public.trim().is_empty() => {
                    Ok((admin.trim().to_string(), public.trim().to_string()))
                }
                _ => bail!("Public host mapping must be ADMIN=PUBLIC: {}", mapping),
            })
            .collect()
    }

    /// Builds the link context for the configured request.
    ///
    /// # Errors
    ///
    /// Returns error if a public host mapping is malformed.
    pub fn link_context(&self) -> Result<LinkContext> {
        let mut context = LinkContext::new(&self.host);
        if let Some(prefix) = &self.router_prefix {
            context = context.with_router_prefix(prefix);
        }
        for (admin, public) in self.public_host_pairs()? {
            context = context.with_public_host(admin, public);
        }
        Ok(context)
    }

    /// Loads the content store, empty when no fixture is configured.
    ///
    /// # Errors
    ///
    /// Returns error if the fixture cannot be read or parsed.
    pub fn load_store(&self) -> Result<MemoryStore> {
        match &self.store {
            Some(path) => MemoryStore::load(path),
            None => Ok(MemoryStore::new()),
        }
    }

    /// Reads the Govspeak input.
    ///
    /// # Errors
    ///
    /// Returns error if the input cannot be read.
    pub fn read_input(&self) -> Result<String> {
        if self.reads_stdin() {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read govspeak from stdin")?;
            return Ok(content);
        }

        std::fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read govspeak file: {}", self.input.display()))
    }

    /// Returns page title for standalone output.
    pub fn title(&self) -> String {
        if self.reads_stdin() {
            return "stdin".to_string();
        }

        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .map(String::from)
            .unwrap_or_else(|| self.input.display().to_string())
    }

    /// Default log filter for the configured verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            _ => "debug",
        }
    }
}
