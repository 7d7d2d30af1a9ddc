//! CLI 模块

use clap::{Parser, ValueEnum};

use crate::model::Filter;

#[derive(Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "A minimal to-do list for the terminal")]
pub struct Cli {
    /// Filter shown at startup
    #[arg(short, long, value_enum, default_value_t = FilterArg::All)]
    pub filter: FilterArg,

    /// Color theme for this run (overrides the configured one)
    #[arg(short, long)]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Filter::All,
            FilterArg::Active => Filter::Active,
            FilterArg::Completed => Filter::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tally"]);
        assert_eq!(cli.filter, FilterArg::All);
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_filter_arg() {
        let cli = Cli::parse_from(["tally", "--filter", "active"]);
        assert_eq!(Filter::from(cli.filter), Filter::Active);
    }
}
