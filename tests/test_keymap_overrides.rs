use crossterm::event::{KeyCode, KeyModifiers};
use dialogdemo::config::Config;
use dialogdemo::keymap::{Action, KeyBinding, KeymapPreset};
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'x' opens the alert instead of '2'
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::OpenAlert));
    // 'w' moves up instead of 'k'
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::MoveUp));

    config.save(&config_path).unwrap();
    let loaded = Config::load_or_create(&config_path).unwrap();

    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);
    assert!(loaded
        .keymap
        .overrides
        .iter()
        .any(|b| b.key == "x" && b.action == Action::OpenAlert));

    let action = loaded
        .keymap
        .get_action(KeyCode::Char('x'), KeyModifiers::NONE);
    assert_eq!(action, Some(Action::OpenAlert));

    // Preset bindings for overridden actions are gone
    let action = loaded
        .keymap
        .get_action(KeyCode::Char('2'), KeyModifiers::NONE);
    assert_eq!(action, None);
    let action = loaded
        .keymap
        .get_action(KeyCode::Char('k'), KeyModifiers::NONE);
    assert_eq!(action, None);

    // Untouched vim bindings still work
    let action = loaded
        .keymap
        .get_action(KeyCode::Char('j'), KeyModifiers::NONE);
    assert_eq!(action, Some(Action::MoveDown));
    let action = loaded
        .keymap
        .get_action(KeyCode::Char('4'), KeyModifiers::NONE);
    assert_eq!(action, Some(Action::OpenAuth));
}

#[test]
fn test_keymap_override_with_modifiers() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+o", Action::OpenImage));

    config.save(&config_path).unwrap();
    let loaded = Config::load_or_create(&config_path).unwrap();

    let action = loaded
        .keymap
        .get_action(KeyCode::Char('o'), KeyModifiers::CONTROL);
    assert_eq!(action, Some(Action::OpenImage));

    let action = loaded
        .keymap
        .get_action(KeyCode::Char('o'), KeyModifiers::NONE);
    assert_ne!(action, Some(Action::OpenImage));
}

#[test]
fn test_keymap_override_serialization_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.theme = "light".to_string();
    config.keymap.preset = KeymapPreset::Emacs;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f1", Action::Help));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("shift+tab", Action::PrevTab));

    config.save(&config_path).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("theme = \"light\""));
    assert!(content.contains("[keymap]"));
    assert!(content.contains("preset = \"emacs\""));
    assert!(content.contains("overrides"));
    assert!(content.contains("action = \"help\""));

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Emacs);

    let action = loaded.keymap.get_action(KeyCode::F(1), KeyModifiers::NONE);
    assert_eq!(action, Some(Action::Help));

    // Terminals report Shift+Tab as BackTab, often with SHIFT still set
    let action = loaded
        .keymap
        .get_action(KeyCode::BackTab, KeyModifiers::SHIFT);
    assert_eq!(action, Some(Action::PrevTab));
}

#[test]
fn test_hand_written_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
theme = "nocolor"

[keymap]
preset = "vim"

[[keymap.overrides]]
key = "a"
action = "open_auth"
"#,
    )
    .unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.theme, "nocolor");
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('a'), KeyModifiers::NONE),
        Some(Action::OpenAuth)
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('h'), KeyModifiers::NONE),
        Some(Action::MoveLeft)
    );
}
