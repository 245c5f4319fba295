use clap::{Args, Subcommand};

use crate::cli::subcommands::SessionCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check a sentence and record the result in history.
    Check(CheckArgs),
    /// Stats, recent activity, and tips.
    Dashboard,
    /// Current statistics snapshot.
    Stats,
    /// Grammar-check history, newest first.
    History(HistoryArgs),
    /// Built-in grammar tips.
    Tips,
    /// Ask the writing assistant.
    Chat(ChatArgs),
    /// Get improvement suggestions for a text.
    Suggest(SuggestArgs),
    /// Assistant chat sessions.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Run the assistant API server.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Sentence to check.
    pub text: String,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Delete all history and reset statistics.
    #[arg(long)]
    pub clear: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Message to send.
    pub message: String,
    /// Session to record the exchange in.
    #[arg(long)]
    pub session: Option<String>,
    /// Extra context for the assistant (for example, the text under discussion).
    #[arg(long)]
    pub context: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SuggestArgs {
    /// Text to analyze.
    pub text: String,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override the configured bind address.
    #[arg(long)]
    pub bind: Option<String>,
}
