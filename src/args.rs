use clap::{Parser, Subcommand};
use stockpad::model::SortField;

#[derive(Parser, Debug)]
#[command(name = "stockpad")]
#[command(about = "Local-first product inventory for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product
    #[command(alias = "a")]
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Unit price, greater than 0
        #[arg(long)]
        price: Option<String>,

        /// Units on hand, 0 or greater
        #[arg(long)]
        quantity: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// List products
    #[command(alias = "ls")]
    List {
        /// Filter by substring of name, category or description
        #[arg(short, long)]
        search: Option<String>,

        /// Sort field: name, category, price or quantity
        #[arg(long, default_value = "name")]
        sort: SortField,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Replace a product's fields (omitted flags keep current values)
    #[command(alias = "up")]
    Update {
        /// Row number from plain `stockpad list`
        number: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        quantity: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Row number from plain `stockpad list`
        number: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Summary statistics
    Stats,

    /// Stock levels and category distribution charts
    Chart,
}
