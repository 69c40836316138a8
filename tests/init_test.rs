use std::fs;
use tempfile::TempDir;

use hytale_manifest::cmds::init::{run, InitArgs};
use hytale_manifest::errors::HytaleError;
use hytale_manifest::types::PluginToml;

    #[test]
    fn test_init_basic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_str().unwrap().to_string();

        let args = InitArgs {
            path: path.clone(),
            group: Some("io.example".to_string()),
            name: Some("Test Plugin".to_string()),
            plugin_version: Some("2.0.0".to_string()),
            main: Some("io.example.TestPlugin".to_string()),
            force: false,
        };

        let result = run(args);
        assert!(result.is_ok());

        // Check if plugin.toml was created
        let plugin_toml_path = temp_dir.path().join("plugin.toml");
        assert!(plugin_toml_path.exists());

        // Check content
        let content = fs::read_to_string(&plugin_toml_path).unwrap();
        assert!(content.contains("group = \"io.example\""));
        assert!(content.contains("name = \"Test Plugin\""));
        assert!(content.contains("version = \"2.0.0\""));
        assert!(content.contains("main = \"io.example.TestPlugin\""));
        assert!(content.contains("server_version = \"*\""));
    }

    #[test]
    fn test_init_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("cool-plugin");
        fs::create_dir(&project).unwrap();

        let args = InitArgs {
            path: project.to_str().unwrap().to_string(),
            ..Default::default()
        };
        run(args).unwrap();

        let pt = PluginToml::load_from_dir(&project).unwrap();
        assert_eq!(pt.project.name.as_deref(), Some("cool-plugin"));
        assert_eq!(pt.project.group.as_deref(), Some("com.example"));
        assert_eq!(pt.project.version.as_deref(), Some("1.0.0"));
        assert_eq!(pt.manifest.main.as_deref(), Some("com.example.Main"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_str().unwrap().to_string();
        fs::write(temp_dir.path().join("plugin.toml"), "# keep me\n").unwrap();

        let args = InitArgs {
            path: path.clone(),
            ..Default::default()
        };
        let result = run(args);
        assert!(matches!(result, Err(HytaleError::AlreadyExists(_))));
        assert_eq!(fs::read_to_string(temp_dir.path().join("plugin.toml")).unwrap(), "# keep me\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_str().unwrap().to_string();
        fs::write(temp_dir.path().join("plugin.toml"), "# old\n").unwrap();

        let args = InitArgs {
            path,
            main: Some("a.Main".to_string()),
            force: true,
            ..Default::default()
        };
        run(args).unwrap();

        let pt = PluginToml::load_from_dir(temp_dir.path()).unwrap();
        assert_eq!(pt.manifest.main.as_deref(), Some("a.Main"));
    }
