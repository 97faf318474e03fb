//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct StorefrontDemoArgs {
    /// Radius filter in kilometers
    #[clap(short, long)]
    pub radius: Option<f64>,

    /// Search query to run against the catalog
    #[clap(short, long)]
    pub query: Option<String>,

    /// Delivery address used at checkout
    #[clap(short, long, default_value = "Shivaji Park, Mumbai")]
    pub address: String,
}
