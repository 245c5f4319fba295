use clap::Subcommand;

/// Assistant chat session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Create a session.
    New {
        /// Session title (defaults to "New Chat").
        #[arg(long)]
        title: Option<String>,
    },
    /// List sessions, newest first.
    List,
    /// Delete a session.
    Delete {
        /// Session id.
        id: String,
    },
}
