use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "festperfect")]
#[command(version, about = "Plan your festival day: priorities, conflicts, shareable plans")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a festperfect directory here
    Init {
        /// Seed the built-in demo festival
        #[arg(long)]
        demo: bool,
    },

    /// Import a festival (or extracted lineup) from a JSON file
    Import {
        /// Path to the JSON file
        path: PathBuf,

        /// Treat the file as a best-effort extracted lineup rather than a
        /// full festival
        #[arg(long)]
        lineup: bool,

        /// Festival name to use when a lineup file carries none
        #[arg(long)]
        name: Option<String>,

        /// ISO date (YYYY-MM-DD) to use when a lineup file carries none
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the day's schedule by stage, with conflicts flagged
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the read-only plan as markdown
    Plan,

    /// Cycle an artist slot's priority (maybe -> must -> skip), or set it
    Priority {
        /// Slot id, id prefix, or artist name
        slot: String,

        /// Set a priority directly instead of cycling (must, maybe, skip)
        #[arg(long)]
        set: Option<String>,
    },

    /// List must-see picks that clash with each other
    Conflicts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the emergency contact embedded in the wallpaper QR card
    Contact {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Alternate contact (email or phone)
        #[arg(long)]
        alternate: Option<String>,
    },

    /// Create or view shared read-only plans
    Share(ShareCommand),

    /// Render the lock-screen wallpaper payload
    Wallpaper {
        /// Device preset name
        #[arg(long, default_value = "iphone-14-pro")]
        device: String,

        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// List device presets and exit
        #[arg(long)]
        list: bool,
    },

    /// Check the stored festival for data problems
    Validate,

    /// Delete the stored festival
    Clear {
        /// Actually delete (required)
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct ShareCommand {
    #[command(subcommand)]
    pub action: ShareAction,
}

#[derive(Subcommand, Debug)]
pub enum ShareAction {
    /// Freeze the current festival and print its share token
    Create,

    /// Print a shared plan by token
    Show {
        /// The share token
        share_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
