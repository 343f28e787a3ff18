use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `folio` binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio - portfolio content query service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max entries per list in the output
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Content directory (overrides content.dir)
    #[arg(short, long, global = true)]
    pub content: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            content: self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["folio", "--format", "table", "--limit", "3", "--verbose", "stats"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(3));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "check", "--format", "raw", "--quiet", "--content", "site/data"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert_eq!(cli.global_flags().content.as_deref(), Some(Path::new("site/data")));
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["folio", "--format", "xml", "check"]).is_err());
    }

    #[test]
    fn serve_overrides_and_query_arguments() {
        let cli = Cli::try_parse_from(["folio", "serve", "--port", "0", "--host", "0.0.0.0"])
            .expect("cli should parse");
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, Some(0));
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));

        let cli = Cli::try_parse_from([
            "folio",
            "query",
            "{ tags { name } }",
            "--variables",
            "{}",
            "--operation-name",
            "Tags",
        ])
        .expect("cli should parse");
        let Commands::Query(args) = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.document, "{ tags { name } }");
        assert_eq!(args.operation_name.as_deref(), Some("Tags"));
    }

    #[test]
    fn schema_name_and_out_dir_conflict() {
        assert!(Cli::try_parse_from(["folio", "schema", "projects", "--out-dir", "out"]).is_err());
    }
}
