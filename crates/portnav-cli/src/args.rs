use clap::{Parser, Subcommand};

/// CLI arguments for portnav-cli
#[derive(Debug, Parser)]
#[command(
    name = "portnav",
    version,
    about = "CLI for querying the portnav-core airport/cruise-terminal resolution engine"
)]
pub struct CliArgs {
    /// Path to a custom places JSON dataset (default: the bundled catalog)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// Resolve an origin query to airport candidates
    Origins {
        /// Free text: a country, an airport name, a nickname ("인천", "일본")
        query: String,
    },

    /// Resolve a destination query to port/terminal candidates
    Destinations {
        /// Free text: a country, a terminal name, or a generic phrase ("터미널")
        query: String,

        /// Origin hint used for country inference (e.g. the chosen airport)
        #[arg(long = "from")]
        origin_hint: Option<String>,
    },

    /// Looser supplementary suggestions ("you might also mean")
    Related {
        /// Free-text query
        query: Option<String>,

        /// Country hint (name, alias or code)
        #[arg(long)]
        country: Option<String>,

        /// City hint
        #[arg(long)]
        city: Option<String>,

        /// Result cap
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Map a nearby-category phrase to its canonical search keyword
    Nearby {
        /// Free text, e.g. "근처 맛집"
        text: String,
    },

    /// Build navigation URLs for an origin/destination pair
    Route {
        /// Origin label or place name
        from: String,
        /// Destination label or place name
        to: String,
    },
}
