use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the member backend
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    pub base_url: String,

    /// Path of the members collection
    #[arg(long, default_value = "/admin/members")]
    pub members_path: String,

    /// Request timeout in milliseconds (no timeout unless given)
    #[arg(long)]
    pub request_timeout_ms: Option<u64>,

    /// Session file holding tokens and preferences
    #[arg(long, default_value = "./member-admin-session.json")]
    pub session_file: PathBuf,

    /// Reject saves without a phone number
    #[arg(long)]
    pub require_phone: bool,

    /// Ignore HTTP(S)_PROXY environment variables
    #[arg(long)]
    pub no_proxy: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all members
    List,

    /// Show one member's details
    Show {
        /// Member resource URL (absolute or relative to the base URL)
        url: String,
    },

    /// Edit fields of a member and save
    Edit {
        /// Member resource URL
        url: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Phone number; pass an empty string to clear it
        #[arg(long)]
        phone: Option<String>,

        /// ADMIN or USER
        #[arg(long)]
        role: Option<String>,
    },

    /// Delete a member after confirmation
    Delete {
        /// Member resource URL
        url: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Light/dark theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Stored authentication session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum SessionAction {
    /// Print stored keys, tokens masked
    Show,
    /// Store tokens issued by the authentication service
    Login {
        #[arg(long)]
        access_token: String,

        #[arg(long)]
        refresh_token: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        role: Option<String>,
    },
    /// Forget stored tokens
    Logout,
}
