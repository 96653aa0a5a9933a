use clap::{Parser, Subcommand};

/// NutriMenu — a menu planning CLI that maximizes nutritional value under
/// glycemic-load and price budgets.
#[derive(Parser, Debug)]
#[command(name = "nutri_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "food_catalog.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the menu with the highest nutritional value within the limits.
    Optimize {
        /// Maximum total glycemic load. Prompted for when omitted.
        #[arg(long)]
        gl_limit: Option<f64>,

        /// Maximum total price. Prompted for when omitted.
        #[arg(long)]
        budget: Option<u32>,
    },

    /// Add a food item to the catalog interactively.
    Add,

    /// Remove food items from the catalog.
    Remove {
        /// Names to remove; a picker opens when omitted.
        names: Vec<String>,
    },

    /// List the catalog with computed glycemic loads.
    List,

    /// Write a starter catalog.
    Init {
        /// Overwrite an existing catalog file without asking.
        #[arg(long)]
        force: bool,
    },

    /// Export the catalog to a CSV file.
    Export {
        /// Destination path.
        path: String,
    },

    /// Import catalog entries from a CSV file, replacing the catalog.
    Import {
        /// Source path.
        path: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Optimize {
            gl_limit: None,
            budget: None,
        }
    }
}
