use clap::{ArgAction, Parser, Subcommand};
use foco::listing::SortOrder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "foco", bin_name = "foco", version)]
#[command(about = "A local document store for focused writing sessions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Store directory (defaults to $FOCO_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new, empty document
    #[command(alias = "n")]
    Create {
        /// Name words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// List documents
    #[command(alias = "ls")]
    List {
        /// Sort order: name, edited, working-time, words, favorites
        #[arg(short, long, value_parser = parse_sort)]
        sort: Option<SortOrder>,

        /// Only show documents whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Only show favorites
        #[arg(long)]
        favorites: bool,
    },

    /// Print one or more documents
    #[command(alias = "v")]
    View {
        /// Document ids or ranges (e.g. 3 or 2-5)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Store new text for a document, recording time spent writing
    Save {
        id: String,

        /// Read the text from this file instead of stdin
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Minutes spent on this session
        #[arg(short, long, default_value_t = 0)]
        minutes: u64,
    },

    /// Rename a document
    Rename {
        id: String,

        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Toggle the favorite flag
    #[command(alias = "fav")]
    Favorite {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Change a document cover
    Cover {
        #[command(subcommand)]
        action: CoverCommands,
    },

    /// Delete documents permanently
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Import text files or directories as documents
    Import {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Show or change configuration
    Config {
        /// default-sort, edition-time-pattern or import-extensions
        key: Option<String>,

        value: Option<String>,
    },

    /// Create the store directory
    Init,
}

#[derive(Subcommand, Debug)]
pub enum CoverCommands {
    /// Use a solid color (#RRGGBB, #AARRGGBB or a name like teal)
    Color { id: String, color: String },

    /// Use an image file (copied into the store)
    Image { id: String, path: PathBuf },

    /// Remove the cover
    Clear { id: String },
}

fn parse_sort(s: &str) -> Result<SortOrder, String> {
    s.parse().map_err(|e: foco::error::FocoError| e.to_string())
}
