//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ThemeName;

#[derive(Debug, Parser)]
#[command(name = "keycalc", version, about = "Keyboard and mouse driven terminal calculator")]
pub struct Cli {
    /// Replay a key string instead of starting the UI (e.g. "3+4=").
    /// Besides calculator keys, `C` clears and `<` deletes.
    #[arg(short, long, value_name = "KEYS", allow_hyphen_values = true)]
    pub keys: Option<String>,

    /// Print the final calculator state as JSON
    #[arg(long, requires = "keys")]
    pub json: bool,

    /// Use this config file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured color theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_with_leading_minus() {
        let cli = Cli::try_parse_from(["keycalc", "--keys", "-5="]).unwrap();
        assert_eq!(cli.keys.as_deref(), Some("-5="));
    }

    #[test]
    fn json_requires_keys() {
        assert!(Cli::try_parse_from(["keycalc", "--json"]).is_err());
    }

    #[test]
    fn theme_is_a_value_enum() {
        let cli = Cli::try_parse_from(["keycalc", "--theme", "light"]).unwrap();
        assert_eq!(cli.theme, Some(ThemeName::Light));
        assert!(Cli::try_parse_from(["keycalc", "--theme", "sepia"]).is_err());
    }
}
