use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linkbook", bin_name = "linkbook", version)]
#[command(
    about = "Record links by category and author, and keep quick notes",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the link and note documents [env: LINKBOOK_HOME]
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a link; missing fields are prompted for
    #[command(alias = "a")]
    Add {
        /// Main category (e.g. Courses)
        main: Option<String>,

        /// Sub category (e.g. Marketing)
        sub: Option<String>,

        /// Author
        author: Option<String>,

        /// The link to record
        link: Option<String>,
    },

    /// List main categories
    Mains,

    /// List the sub categories of a main category
    Subs { main: String },

    /// List the authors of a sub category
    Authors { main: String, sub: String },

    /// Show an author's links
    #[command(alias = "q")]
    Links {
        main: String,
        sub: String,
        author: String,
    },

    /// Show every category, author and link
    #[command(alias = "ls")]
    Tree,

    /// Delete an author and all of their links
    #[command(name = "rm-author", alias = "delete-author")]
    RmAuthor {
        main: String,
        sub: String,
        author: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage notes
    #[command(alias = "n")]
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },

    /// Create the data files if they are missing
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (categories-file, notes-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Save a new note
    Add {
        /// Note text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List notes, numbered from 1
    #[command(alias = "ls")]
    List,

    /// Delete a note by its number in `note list`
    #[command(alias = "delete")]
    Rm { number: usize },
}
