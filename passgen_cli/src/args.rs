use clap::{Args, Parser};

#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "passgen",
    author,
    version,
    about = "Generate secure passwords with customizable options",
    after_help = "Examples:\n  \
        passgen                  Generate a 12-character password\n  \
        passgen -l 16            Generate a 16-character password\n  \
        passgen -c 5             Generate 5 passwords\n  \
        passgen --no-symbols     Generate without symbols\n  \
        passgen -e \"0O1l\"        Exclude confusing characters"
)]
pub struct Cli {
    /// Password length [default: 12]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub length: Option<u16>,

    /// Number of passwords to generate [default: 1]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub count: Option<u16>,

    #[command(flatten)]
    pub classes: Classes,

    /// Characters to exclude from password
    #[arg(short, long, value_names(["CHARS"]))]
    pub exclude: Option<String>,

    /// Check the strength of a given password
    #[arg(long, value_names(["PASSWORD"]))]
    pub check: Option<String>,

    /// Only output the password(s), no additional text
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the estimated entropy of the generated passwords
    #[arg(long, conflicts_with_all = ["check", "quiet"])]
    pub entropy: bool,

    /// Store the resolved options as defaults for later runs
    #[arg(long, conflicts_with = "check")]
    pub save_defaults: bool,

    /// Ignore stored defaults and start from all character sets enabled
    #[arg(long, conflicts_with = "check")]
    pub reset_defaults: bool,
}

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct Classes {
    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,
}
