//! Command-line interface definition for Gradpath
//!
//! This module defines the CLI structure using clap's derive API. Each
//! subcommand maps onto one screen of the counselling client.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::TokenStoreKind;

/// Gradpath - study-abroad counselling from the terminal
///
/// Sign in, build your profile, shortlist and lock universities, and talk to
/// the AI counsellor.
#[derive(Parser, Debug, Clone)]
#[command(name = "gradpath")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Also append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Override where the session token is kept
    #[arg(long, global = true, value_enum)]
    pub token_store: Option<TokenStoreKind>,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Gradpath
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create an account and start onboarding
    Signup {
        /// Full name
        #[arg(long)]
        name: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "GRADPATH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log in with email and password
    Login {
        /// Email address (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "GRADPATH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show the logged-in user
    Whoami,

    /// View or edit the onboarding profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Show the dashboard
    Dashboard {
        /// Keep refreshing until Ctrl-C
        #[arg(short, long)]
        watch: bool,

        /// Refresh interval in seconds (defaults to the configured value)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Search, shortlist and lock universities
    Universities {
        #[command(subcommand)]
        command: UniversityCommand,
    },

    /// Manage the to-do list
    Todos {
        #[command(subcommand)]
        command: TodoCommand,
    },

    /// Talk to the AI counsellor
    Chat {
        /// Send one message and print the reply; omit for an interactive session
        message: Option<String>,

        /// Print the conversation so far instead of sending anything
        #[arg(long, conflicts_with = "message")]
        history: bool,
    },

    /// Application guidance for locked universities
    Applications {
        /// Show to-dos for this locked university (defaults to the first)
        #[arg(short, long)]
        university: Option<String>,
    },
}

/// Profile subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ProfileCommand {
    /// Print the profile
    Show,

    /// Update selected fields
    Update(ProfileArgs),

    /// Mark onboarding as complete
    Complete,
}

/// Profile fields; only the ones given are sent
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub education_level: Option<String>,

    #[arg(long)]
    pub degree_major: Option<String>,

    #[arg(long)]
    pub graduation_year: Option<i32>,

    #[arg(long)]
    pub gpa: Option<String>,

    #[arg(long)]
    pub intended_degree: Option<String>,

    #[arg(long)]
    pub field_of_study: Option<String>,

    #[arg(long)]
    pub intake_year: Option<i32>,

    /// Preferred countries, comma separated
    #[arg(long, value_delimiter = ',')]
    pub countries: Option<Vec<String>>,

    #[arg(long)]
    pub budget_min: Option<i64>,

    #[arg(long)]
    pub budget_max: Option<i64>,

    #[arg(long)]
    pub funding_plan: Option<String>,

    /// Exam status as NAME=STATUS, repeatable (e.g. IELTS=completed)
    #[arg(long = "exam")]
    pub exams: Vec<String>,

    #[arg(long)]
    pub sop_status: Option<String>,
}

/// University subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum UniversityCommand {
    /// Search the university directory
    Search {
        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },

    /// List the shortlist
    Shortlist {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show every detail of one shortlist entry
    Show { id: String },

    /// Add a university to the shortlist
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        country: String,

        #[arg(long)]
        domain: Option<String>,

        #[arg(long)]
        web_page: Option<String>,

        /// dream, target or safe
        #[arg(long)]
        category: Option<String>,
    },

    /// Remove a shortlist entry
    Remove { id: String },

    /// Lock a shortlist entry
    Lock { id: String },

    /// Unlock a shortlist entry
    Unlock {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Dream, target and safe recommendations
    Recommendations,
}

/// To-do subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TodoCommand {
    /// List to-dos
    List,

    /// Add a to-do
    Add {
        title: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Tie the to-do to a shortlist entry
        #[arg(long)]
        shortlist: Option<String>,
    },

    /// Mark a to-do as done
    Done { id: String },

    /// Mark a to-do as not done
    Undone { id: String },

    /// Delete a to-do
    Delete { id: String },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            json_logs: false,
            log_file: None,
            api_url: None,
            token_store: None,
            json: false,
            command: Commands::Whoami,
        }
    }
}
