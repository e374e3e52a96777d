//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.output.format.is_none());
        assert!(config.output.template.is_none());
        assert!(!config.scan.secondary_only);
        assert!(!config.scan.primary_only);
    }

    #[test]
    fn parse_output_section() {
        let toml = r#"
            [output]
            format = "json"
            template = '{{address}}/{{netmask}}'
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.output.format.as_deref(), Some("json"));
        assert_eq!(
            config.output.template.as_deref(),
            Some("{{address}}/{{netmask}}")
        );
    }

    #[test]
    fn parse_scan_section() {
        let toml = r"
            [scan]
            secondary_only = true
        ";

        let config = TomlConfig::parse(toml).unwrap();

        assert!(config.scan.secondary_only);
        assert!(!config.scan.primary_only);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let toml = r#"
            [output]
            format = "text"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert!(!config.scan.secondary_only);
        assert!(!config.scan.primary_only);
    }

    #[test]
    fn reject_invalid_toml_syntax() {
        assert!(TomlConfig::parse("[output\nformat = ").is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            [output]
            fromat = "text"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn reject_unknown_sections() {
        let toml = r"
            [render]
            color = true
        ";

        assert!(TomlConfig::parse(toml).is_err());
    }
}

mod template_generation {
    use super::*;

    #[test]
    fn default_template_is_parseable() {
        let template = default_config_template();

        let config = TomlConfig::parse(&template).unwrap();

        // All meaningful values in the template are commented out
        assert!(config.output.format.is_none());
        assert!(config.output.template.is_none());
        assert!(!config.scan.secondary_only);
    }

    #[test]
    fn default_template_documents_all_fields() {
        let template = default_config_template();

        assert!(template.contains("[output]"));
        assert!(template.contains("[scan]"));
        assert!(template.contains("format"));
        assert!(template.contains("template"));
        assert!(template.contains("secondary_only"));
        assert!(template.contains("primary_only"));
    }
}
