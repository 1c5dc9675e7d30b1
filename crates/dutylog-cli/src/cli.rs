use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use dutylog_core::VERSION;

/// DutyLog - a duty logbook for railway loco crew
#[derive(Parser)]
#[command(name = "dutylog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the duty log data
    #[arg(short, long, global = true, env = "DUTYLOG_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `profile show` command
#[derive(Args)]
pub struct ProfileShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `profile set` command
#[derive(Args)]
pub struct ProfileSetArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Crew ID
    #[arg(long)]
    pub crew_id: Option<String>,

    /// Designation (ALP, LP, Guard, CLI)
    #[arg(long)]
    pub designation: Option<String>,

    /// Mobile number
    #[arg(long)]
    pub mobile: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Profile photo (jpg, png, gif, webp, bmp)
    #[arg(long, value_name = "PATH")]
    pub photo: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the saved profile
    Show(ProfileShowArgs),

    /// Create or replace the profile
    Set(ProfileSetArgs),
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Duty type (working, spare, rest, leave)
    #[arg(value_name = "TYPE")]
    pub duty_type: String,

    /// Set a field (repeatable), e.g. --set train-number=12952
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Record ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Set a field (repeatable), e.g. --set sign-off=14:30
    #[arg(short, long = "set", value_name = "KEY=VALUE", required = true)]
    pub set: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Record ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Record ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Filter by duty type
    #[arg(long = "type", value_name = "TYPE")]
    pub duty_type: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Search text (date, train, loco, pilot, guard, section or type)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `dashboard` command
#[derive(Args)]
pub struct DashboardArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Date range preset (last7, month, last-month)
    #[arg(long, value_name = "RANGE")]
    pub range: Option<String>,

    /// Start date (YYYY-MM-DD); switches the range to custom
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD); switches the range to custom
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Include only these duty types (repeatable; default: all)
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Hand the file to the configured share command
    #[arg(long)]
    pub share: bool,

    /// Download directory (overrides config)
    #[arg(long, value_name = "DIR")]
    pub out: Option<String>,

    /// Show what would be exported without writing a file
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `backup` command
#[derive(Args)]
pub struct BackupArgs {
    /// Hand the file to the configured share command
    #[arg(long)]
    pub share: bool,

    /// Download directory (overrides config)
    #[arg(long, value_name = "DIR")]
    pub out: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `fields` command
#[derive(Args)]
pub struct FieldsArgs {
    /// Duty type (working, spare, rest, leave)
    #[arg(value_name = "TYPE")]
    pub duty_type: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

/// Arguments for the `config init` command
#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Time zone to record (e.g. Asia/Kolkata)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Share command to record (e.g. termux-share)
    #[arg(long)]
    pub share_command: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a starter config file
    Init(ConfigInitArgs),

    /// Print the config file path
    Path,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or set the crew profile
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Log a new duty
    Add(AddArgs),

    /// Edit an existing duty (replaces it in place)
    Edit(EditArgs),

    /// Delete a duty
    Delete(DeleteArgs),

    /// Show a duty by ID
    Show(ShowArgs),

    /// List duties, newest first
    List(ListArgs),

    /// Profile summary and the most recent duties
    Dashboard(DashboardArgs),

    /// Search duties by free text
    Search(SearchArgs),

    /// Export duties to a spreadsheet
    Export(ExportArgs),

    /// Export every duty to a spreadsheet
    Backup(BackupArgs),

    /// List the field names accepted by --set for a duty type
    Fields(FieldsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}
