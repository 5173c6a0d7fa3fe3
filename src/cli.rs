use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Collect third-party license texts into HTML report fragments
#[derive(Parser, Debug)]
#[command(name = "thirdparty-licenses")]
#[command(version)]
#[command(
    about = "Collect third-party license texts of Go modules and npm packages into HTML fragments",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./thirdparty-licenses.config.yml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report Go module dependencies (`go list -m all`)
    Modules {
        /// Go module directory, or a file with captured `go list -m all` output
        #[arg(value_name = "GO_PATH")]
        path: PathBuf,

        #[command(flatten)]
        report: ReportOptions,
    },

    /// Report npm package dependencies (`license-checker --json`)
    Packages {
        /// UI project directory, or a file with captured `license-checker --json` output
        #[arg(value_name = "JS_PATH")]
        path: PathBuf,

        #[command(flatten)]
        report: ReportOptions,
    },

    /// Report both `<ROOT>/core` modules and `<ROOT>/ui` packages
    All {
        /// Project root containing the `core` and `ui` directories
        #[arg(value_name = "ROOT", default_value = ".")]
        root: PathBuf,

        #[command(flatten)]
        report: ReportOptions,
    },

    /// Replace a placeholder in OUTPUT with the contents of INPUT
    Substitute {
        /// File with the generated report fragments
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Template document, rewritten in place
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Marker string to replace
        #[arg(value_name = "PLACEHOLDER")]
        placeholder: String,
    },
}

/// Options shared by the report subcommands
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ReportOptions {
    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Package key prefix of the project's own packages, excluded from the report
    #[arg(long, value_name = "PREFIX")]
    pub own_prefix: Option<String>,

    /// Year substituted into license templates
    #[arg(long, value_name = "YEAR")]
    pub year: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("thirdparty-licenses").chain(args.iter().copied()))
    }

    #[test]
    fn test_modules_command() {
        let args = parse(&["modules", "core"]).unwrap();
        match args.command {
            Command::Modules { path, report } => {
                assert_eq!(path, PathBuf::from("core"));
                assert!(report.output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_packages_command_with_options() {
        let args = parse(&[
            "packages",
            "ui",
            "--output",
            "ui.html",
            "--own-prefix",
            "my-ui",
            "--year",
            "2021",
            "-vv",
        ])
        .unwrap();
        match args.command {
            Command::Packages { path, report } => {
                assert_eq!(path, PathBuf::from("ui"));
                assert_eq!(report.output, Some(PathBuf::from("ui.html")));
                assert_eq!(report.own_prefix.as_deref(), Some("my-ui"));
                assert_eq!(report.year.as_deref(), Some("2021"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_all_defaults_to_current_directory() {
        let args = parse(&["all"]).unwrap();
        match args.command {
            Command::All { root, .. } => assert_eq!(root, PathBuf::from(".")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_substitute_command() {
        let args = parse(&[
            "--config",
            "custom.yml",
            "substitute",
            "ui.html",
            "ThirdPartyLicenses.html",
            "<!-- UI -->",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        match args.command {
            Command::Substitute {
                input,
                output,
                placeholder,
            } => {
                assert_eq!(input, PathBuf::from("ui.html"));
                assert_eq!(output, PathBuf::from("ThirdPartyLicenses.html"));
                assert_eq!(placeholder, "<!-- UI -->");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_substitute_requires_three_arguments() {
        assert!(parse(&["substitute", "ui.html", "out.html"]).is_err());
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_modules_requires_path() {
        assert!(parse(&["modules"]).is_err());
    }
}
