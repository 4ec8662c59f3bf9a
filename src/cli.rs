use clap::Parser;

/// Command line arguments for the vanguardd server binary.
#[derive(Debug, Parser)]
#[command(name = "vanguardd", version, about = "Vanguard Protocol - agent action auditor")]
pub struct Cli {
    /// Path to a TOML configuration file (default: vanguard.toml if present)
    #[arg(long)]
    pub config: Option<String>,

    /// Override the configured bind address
    #[arg(long)]
    pub bind: Option<String>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}
