use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeRecorder
#[derive(Parser)]
#[command(
    name = "rtimerecorder",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal stopwatch: time an activity with start/pause/stop and append it to a CSV file",
    long_about = None
)]
pub struct Cli {
    /// Use an alternative configuration file
    #[arg(global = true, long = "config", value_name = "PATH")]
    pub config: Option<String>,

    /// Print diagnostic logs to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Without a subcommand an interactive session is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive timing session (default)
    Session {
        /// CSV file to record into; stop and reload use it right away
        #[arg(long, value_name = "CSV")]
        file: Option<String>,
    },

    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
