#[cfg(test)]
mod tests {
    use crate::Utils::config::{ConfigError, EngineConfig, LogSettings};
    use crate::Utils::logger::{default_log_file_name, init_logger};
    use crate::symbolic::symbolic_engine::Expr;
    use crate::symbolic::symbolic_engine_print::RenderSettings;
    use approx::assert_relative_eq;
    use log::LevelFilter;
    use std::io::Write;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.render, RenderSettings::default());
        assert_eq!(config.log.level, LevelFilter::Info);
        assert!(config.log.console);
        assert_eq!(config.log.file, None);
    }

    #[test]
    fn test_full_document() {
        let text = r#"
            [render]
            integer_tolerance = 1e-3
            decimals = 5

            [log]
            level = "debug"
            console = false
            file = "engine.log"
        "#;
        let config = EngineConfig::from_toml_str(text).unwrap();
        assert_relative_eq!(config.render.integer_tolerance, 1e-3);
        assert_eq!(config.render.decimals, 5);
        assert_eq!(
            config.log,
            LogSettings {
                level: LevelFilter::Debug,
                console: false,
                file: Some("engine.log".to_string()),
            }
        );
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = EngineConfig::from_toml_str("[render]\ndecimals = 1\n").unwrap();
        assert_eq!(config.render.decimals, 1);
        assert_relative_eq!(config.render.integer_tolerance, 1e-7);
        assert_eq!(config.log, LogSettings::default());
    }

    #[test]
    fn test_integer_tolerance_accepts_integers() {
        let config = EngineConfig::from_toml_str("[render]\ninteger_tolerance = 0\n").unwrap();
        assert_eq!(config.render.integer_tolerance, 0.0);
    }

    #[test]
    fn test_auto_log_file_name() {
        let config = EngineConfig::from_toml_str("[log]\nfile = \"auto\"\n").unwrap();
        let file = config.log.file.unwrap();
        assert!(file.starts_with("diff_tree_"));
        assert!(file.ends_with(".log"));
        assert!(default_log_file_name().starts_with("diff_tree_"));
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            ("[render]\ninteger_tolerance = -1.0\n", "render.integer_tolerance"),
            ("[render]\ninteger_tolerance = \"small\"\n", "render.integer_tolerance"),
            ("[render]\ndecimals = -2\n", "render.decimals"),
            ("[render]\ndecimals = 40\n", "render.decimals"),
            ("[render]\ndecimals = 2.5\n", "render.decimals"),
            ("[log]\nlevel = \"loud\"\n", "log.level"),
            ("[log]\nconsole = \"yes\"\n", "log.console"),
            ("[log]\nfile = 3\n", "log.file"),
            ("render = 1\n", "render"),
        ];
        for (text, expected_key) in cases {
            match EngineConfig::from_toml_str(text) {
                Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, expected_key),
                other => panic!("{:?} should be rejected, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_malformed_toml() {
        let err = EngineConfig::from_toml_str("[render\ndecimals = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("malformed TOML"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\ndecimals = 2").unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.render.decimals, 2);

        let x = Expr::var('x', 0.0);
        assert_eq!((0.25 * x).print_value_with(&config.render), "(0.25)*(x)");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = EngineConfig::from_file(&missing).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_logger_without_sinks_is_not_installed() {
        let off = LogSettings {
            level: LevelFilter::Off,
            ..LogSettings::default()
        };
        assert!(!init_logger(&off));
        let nowhere = LogSettings {
            console: false,
            file: None,
            ..LogSettings::default()
        };
        assert!(!init_logger(&nowhere));
    }

    #[test]
    fn test_logger_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.log");
        let settings = LogSettings {
            level: LevelFilter::Info,
            console: false,
            file: Some(path.to_string_lossy().into_owned()),
        };
        // another test in this process may already own the global logger
        if init_logger(&settings) {
            let written = std::fs::read_to_string(&path).unwrap();
            assert!(written.contains("logger initialized"));
        }
        assert!(path.exists());
    }
}
