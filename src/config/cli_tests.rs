//! Tests for CLI argument parsing.

use super::cli::{Cli, Command, OutputFormatArg};

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args_reads_stdin() {
        let cli = Cli::parse_from_iter(["cfgscan"]);

        assert!(cli.input.is_none());
        assert!(cli.command.is_none());
        assert!(cli.format.is_none());
    }

    #[test]
    fn parse_input_path() {
        let cli = Cli::parse_from_iter(["cfgscan", "router.cfg"]);

        assert_eq!(cli.input.as_ref().unwrap().to_str(), Some("router.cfg"));
    }

    #[test]
    fn parse_all_formats() {
        let text = Cli::parse_from_iter(["cfgscan", "--format", "text"]);
        assert_eq!(text.format, Some(OutputFormatArg::Text));

        let json = Cli::parse_from_iter(["cfgscan", "--format", "json"]);
        assert_eq!(json.format, Some(OutputFormatArg::Json));
    }

    #[test]
    fn parse_template_option() {
        let cli = Cli::parse_from_iter(["cfgscan", "--template", "{{address}}/{{netmask}}"]);

        assert_eq!(cli.template.as_deref(), Some("{{address}}/{{netmask}}"));
    }

    #[test]
    fn parse_selection_flags() {
        let secondary = Cli::parse_from_iter(["cfgscan", "--secondary-only"]);
        assert!(secondary.secondary_only);
        assert!(!secondary.primary_only);

        let primary = Cli::parse_from_iter(["cfgscan", "--primary-only"]);
        assert!(primary.primary_only);
        assert!(!primary.secondary_only);
    }

    #[test]
    fn parse_misc_options() {
        let cli = Cli::parse_from_iter([
            "cfgscan",
            "running-config.txt",
            "--count",
            "--config",
            "/path/to/cfgscan.toml",
            "--verbose",
        ]);

        assert!(cli.count);
        assert_eq!(
            cli.config.as_ref().unwrap().to_str(),
            Some("/path/to/cfgscan.toml")
        );
        assert!(cli.verbose);
    }

    #[test]
    fn flags_default_to_off() {
        let cli = Cli::parse_from_iter(["cfgscan"]);

        assert!(!cli.secondary_only);
        assert!(!cli.primary_only);
        assert!(!cli.count);
        assert!(!cli.verbose);
    }
}

mod subcommands {
    use super::*;

    #[test]
    fn parse_init_with_default_output() {
        let cli = Cli::parse_from_iter(["cfgscan", "init"]);

        assert!(cli.is_init());
        let Some(Command::Init { output }) = cli.command else {
            panic!("expected init subcommand");
        };
        assert_eq!(output.to_str(), Some("cfgscan.toml"));
    }

    #[test]
    fn parse_init_with_explicit_output() {
        let cli = Cli::parse_from_iter(["cfgscan", "init", "--output", "custom.toml"]);

        let Some(Command::Init { output }) = cli.command else {
            panic!("expected init subcommand");
        };
        assert_eq!(output.to_str(), Some("custom.toml"));
    }

    #[test]
    fn is_init_false_without_subcommand() {
        let cli = Cli::parse_from_iter(["cfgscan", "router.cfg"]);

        assert!(!cli.is_init());
    }
}

mod conversions {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn format_arg_converts_to_output_format() {
        assert_eq!(OutputFormat::from(OutputFormatArg::Text), OutputFormat::Text);
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
    }
}
