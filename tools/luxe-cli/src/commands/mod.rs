//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod render;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Storefront path, e.g. `/category/men`.
    #[arg(default_value = "/")]
    pub path: String,

    /// Products to put in the cart first (repeatable).
    #[arg(short, long = "add", value_name = "PRODUCT_ID")]
    pub add: Vec<String>,

    /// Print only the page fragment, without header and document.
    #[arg(long)]
    pub fragment: bool,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list the products of this category.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Script file, one command per line. `-` reads stdin.
    pub script: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a default luxe.toml
    Init {
        /// Output path.
        #[arg(default_value = "luxe.toml")]
        path: String,

        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },

    /// Check the configuration for errors
    Validate,
}
