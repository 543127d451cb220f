use clap::{Parser, Subcommand};

use crate::domain::{SortDirection, SortField};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Start with an empty contact list instead of the seed contacts
    #[arg(long, env = "NO_SEED", default_value_t = false)]
    pub no_seed: bool,

    /// With no subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display the first contact
    First,

    /// Display the last contact
    Last,

    /// List contacts
    List {
        /// Sort ordering (default is insertion order)
        #[arg(long)]
        sort: Option<SortField>,

        /// Sort direction, used with --sort
        #[arg(long, default_value = "asc")]
        direction: SortDirection,

        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,
    },

    /// Sort contacts by a field and display the result
    Sort {
        /// Field to sort by (name, phone, email)
        #[arg(long)]
        by: SortField,

        /// Sort direction
        #[arg(long, default_value = "asc")]
        direction: SortDirection,
    },
}
