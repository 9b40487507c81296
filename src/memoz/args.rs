use clap::{Parser, Subcommand};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "memoz")]
#[command(version = VERSION)]
#[command(about = "A sticky-note memo board for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stick a new memo on the board
    #[command(alias = "a")]
    Add {
        /// Memo text
        text: String,

        /// Category label (e.g. 할일 or todo); defaults to the configured one
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List memos as cards (the default)
    #[command(alias = "ls")]
    List {
        /// Only show memos whose text contains this term
        #[arg(short, long)]
        search: Option<String>,

        /// Only show memos in this category (전체/all shows everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Rewrite the text of a memo
    #[command(alias = "e")]
    Edit {
        /// Position of the memo (as shown by list)
        position: usize,

        /// New memo text
        text: String,
    },

    /// Take a memo off the board
    #[command(alias = "rm")]
    Delete {
        /// Position of the memo (as shown by list)
        position: usize,
    },

    /// Move a memo to a new position
    #[command(alias = "mv")]
    Move {
        /// Current position of the memo
        from: usize,

        /// Position to move it to
        to: usize,
    },

    /// Print the available category labels
    Categories,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-category)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
