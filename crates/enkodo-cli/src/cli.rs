use std::path::PathBuf;

use clap::{
    ArgAction,
    Parser,
};

/// Generate enkodo Marshal / Unmarshal impls for the Rust source files under a path.
///
/// Every top-level struct with at least one `#[enkodo]` field gets impls written to
/// `<file>_enkodo.rs` next to its source, ready to be pulled in with `include!`.
#[derive(Parser, Debug)]
#[command(
    name = "enkodo",
    version,
    after_help = "Examples:\n  enkodo ./src\n  enkodo ./src/models.rs -\n  enkodo ./src --suffix _wire --keep-going"
)]
pub struct Cli {
    /// Directory to scan recursively, or a single source file
    pub path: PathBuf,

    /// Pass `-` to write generated code to stdout instead of artifact files
    #[arg(value_parser = ["-"], hide_possible_values = true)]
    pub dash: Option<String>,

    /// Write generated code to stdout instead of artifact files
    #[arg(long)]
    pub stdout: bool,

    /// File stem suffix for generated artifacts [default: _enkodo]
    #[arg(long)]
    pub suffix: Option<String>,

    /// Config file [default: <PATH>/enkodo.toml, when present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep generating the remaining files when one fails; still exits non-zero
    #[arg(long)]
    pub keep_going: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn to_stdout(&self) -> bool {
        self.stdout || self.dash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn the_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn a_trailing_dash_selects_stdout() {
        let cli = Cli::try_parse_from(["enkodo", "./src", "-"]).unwrap();
        assert!(cli.to_stdout());

        let cli = Cli::try_parse_from(["enkodo", "./src", "--stdout"]).unwrap();
        assert!(cli.to_stdout());

        let cli = Cli::try_parse_from(["enkodo", "./src", "-vv"]).unwrap();
        assert!(!cli.to_stdout());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn a_path_is_required() {
        assert!(Cli::try_parse_from(["enkodo"]).is_err());
        assert!(Cli::try_parse_from(["enkodo", "./src", "out"]).is_err());
    }
}
