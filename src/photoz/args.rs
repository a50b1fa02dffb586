use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "photoz")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "A small, bounded photo catalog grouped into albums", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding photos.json and config.json
    #[arg(long, global = true, env = "PHOTOZ_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a photo to the catalog
    #[command(alias = "a")]
    Add {
        /// Album the photo belongs to
        album: i32,

        /// Photo id, unique within the album
        photo: i32,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        url: Option<String>,

        /// Capture moment (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Remove a photo
    #[command(alias = "rm")]
    Remove { album: i32, photo: i32 },

    /// Change the url of a photo
    #[command(alias = "u")]
    Update {
        album: i32,
        photo: i32,

        /// New url (omit together with --clear to drop the url)
        #[arg(required_unless_present = "clear")]
        url: Option<String>,

        /// Remove the url instead of replacing it
        #[arg(long, conflicts_with = "url")]
        clear: bool,
    },

    /// Show a single photo
    #[command(alias = "v")]
    Get { album: i32, photo: i32 },

    /// List every photo in an album
    Album { album: i32 },

    /// List photos taken between two dates, both days included
    Between {
        /// First day (YYYY-MM-DD)
        from: String,

        /// Last day (YYYY-MM-DD)
        to: String,
    },

    /// List all photos
    #[command(alias = "ls")]
    List,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., capacity)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
