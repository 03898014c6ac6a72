//! Utils

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the store demos
#[derive(Debug, Parser)]
pub struct DemoStoreArgs {
    /// Catalog fixture file to stock the store with (defaults to the seed catalog)
    #[clap(short, long)]
    pub catalog: Option<PathBuf>,

    /// Payment method to confirm the purchase with
    #[clap(short, long, default_value = "Visa")]
    pub payment_method: String,
}
