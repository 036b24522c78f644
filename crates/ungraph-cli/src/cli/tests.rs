#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;
use clap::Parser;

use super::*;

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for name in ["print", "reach", "path", "version"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe the global flags.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for flag in ["--format", "--help"] {
        assert!(help.contains(flag), "root help should mention flag '{flag}'");
    }
}

#[test]
fn test_dash_parses_as_stdin() {
    let cli = Cli::parse_from(["ungraph", "print", "-"]);
    match cli.command {
        Command::Print {
            file: PathOrStdin::Stdin,
        } => {}
        _ => panic!("expected Print with stdin source"),
    }
}

#[test]
fn test_path_subcommand_parses_vertices_and_flags() {
    let cli = Cli::parse_from(["ungraph", "path", "tiny.graph", "0", "5", "--iterative"]);
    match cli.command {
        Command::Path {
            file: PathOrStdin::Path(p),
            source,
            target,
            iterative,
        } => {
            assert_eq!(p, std::path::PathBuf::from("tiny.graph"));
            assert_eq!(source, 0);
            assert_eq!(target, 5);
            assert!(iterative);
        }
        _ => panic!("expected Path command"),
    }
}

#[test]
fn test_reach_defaults_to_recursive() {
    let cli = Cli::parse_from(["ungraph", "reach", "g.graph", "3"]);
    match cli.command {
        Command::Reach {
            source, iterative, ..
        } => {
            assert_eq!(source, 3);
            assert!(!iterative);
        }
        _ => panic!("expected Reach command"),
    }
}

#[test]
fn test_non_numeric_vertex_is_a_parse_error() {
    let result = Cli::try_parse_from(["ungraph", "reach", "g.graph", "zero"]);
    assert!(result.is_err());
}

#[test]
fn test_json_format_flag() {
    let cli = Cli::parse_from(["ungraph", "--format", "json", "print", "g.graph"]);
    assert!(matches!(cli.format, OutputFormat::Json));
}
