use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Track product prices through the price tracker API")]
#[command(version)]
pub struct Cli {
    /// Products collection URL (overrides PRICE_TRACKER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Reveal product cards one after another
    #[arg(long, global = true)]
    pub animate: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all tracked products with their current price
    List,

    /// Add a product to track, then show the updated list
    Add {
        /// Product name
        #[arg(long, default_value = "")]
        name: String,

        /// Product page URL
        #[arg(long, default_value = "")]
        url: String,

        /// Current price
        #[arg(long, default_value = "")]
        price: String,
    },

    /// Show the list and keep prompting for new products
    Interactive,

    /// Show everything the backend knows about one product
    Show {
        /// Product ID
        id: i64,
    },

    /// Analyze the price history of a product
    Analyze {
        /// Product ID
        id: i64,
    },

    /// Predict whether the price of a product page will drop
    Predict {
        /// Product page URL
        url: String,
    },
}
