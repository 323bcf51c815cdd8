use clap::{Parser, ValueEnum};

/// How show-details, list and help output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Standard, // Plain text in the menu's own wording
    Json,  // Pretty-printed JSON for programmatic consumption
    Table, // ASCII table for aligned columnar display
}

/// Interactive employee registry.
#[derive(Debug, Parser)]
#[command(name = "staff-registry", version)]
pub struct CommandLine {
    /// Output format for details, listings and help
    #[arg(long, value_enum, default_value_t = OutputFormat::Standard)]
    pub format: OutputFormat,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn repl_config(&self) -> ReplConfig {
        ReplConfig {
            format: self.format,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReplConfig {
    pub format: OutputFormat, // Rendering of details, listings and help
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            format: OutputFormat::Standard,
        }
    }
}
