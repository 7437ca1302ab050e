//! Tests for the config module

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    use crate::config::{load, Config, ConfigV1};
    use crate::error::Error;

    #[test]
    fn defaults_match_the_shipped_template() {
        let config = ConfigV1::default();
        assert_eq!(config.template_dir, PathBuf::from("template/add"));
        assert_eq!(config.template_token, "add_example");
        assert_eq!(config.header_guard_suffix, "_H");
        assert_eq!(config.domains, ["math", "conversion"]);
        assert_eq!(config.doc_extensions, [".md"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let Config::V1(config) = Config::load_config(tmp.path()).unwrap();
        assert_eq!(config.template_token, "add_example");
        assert_eq!(config.template_root(), tmp.path().join("template/add"));
    }

    #[test]
    fn loads_yaml_with_partial_keys() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("opgen.yaml"),
            "schemaVersion: v1\ndomains: [math, nn, vision]\n",
        )
        .unwrap();

        let Config::V1(config) = Config::load_config(tmp.path()).unwrap();
        assert_eq!(config.domains, ["math", "nn", "vision"]);
        assert_eq!(config.template_token, "add_example");
        assert_eq!(config.base_dir, tmp.path());
    }

    #[test]
    fn json_is_preferred_over_yaml() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("opgen.json"),
            r#"{"schemaVersion": "v1", "template_token": "xxxx"}"#,
        )
        .unwrap();
        fs::write(tmp.path().join("opgen.yaml"), "schemaVersion: v1\ntemplate_token: yyyy\n")
            .unwrap();

        let Config::V1(config) = Config::load_config(tmp.path()).unwrap();
        assert_eq!(config.template_token, "xxxx");
    }

    #[test]
    fn relative_template_dir_is_resolved_against_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("settings.yml");
        fs::write(&config_path, "schemaVersion: v1\ntemplate_dir: templates/elementwise\n")
            .unwrap();

        let config = load(Some(&config_path)).unwrap();
        assert_eq!(config.template_root(), tmp.path().join("templates/elementwise"));
    }

    #[test]
    fn absolute_template_dir_is_kept() {
        let tmp = TempDir::new().unwrap();
        let config = ConfigV1 {
            template_dir: tmp.path().join("tpl"),
            base_dir: PathBuf::from("/elsewhere"),
            ..ConfigV1::default()
        };
        assert_eq!(config.template_root(), tmp.path().join("tpl"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load(Some(&tmp.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_token_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("opgen.json");
        fs::write(&config_path, r#"{"schemaVersion": "v1", "template_token": "AddExample"}"#)
            .unwrap();

        let err = load(Some(&config_path)).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation(_)));
    }

    #[test]
    fn empty_domain_list_is_rejected() {
        let config = ConfigV1 { domains: vec![], ..ConfigV1::default() };
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("opgen.json");
        fs::write(&config_path, "{ not json").unwrap();

        let err = load(Some(&config_path)).unwrap_err();
        assert!(matches!(err, Error::JsonParseError(_)));
    }
}
