use crossterm::event::{KeyCode, KeyModifiers};
use dialogdemo::keymap::{Action, KeyBinding, Keymap, KeymapPreset};

#[test]
fn test_override_shadows_preset_binding() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![KeyBinding::new("w", Action::MoveUp)],
    };

    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
    // Both vim and arrow bindings for MoveUp are shadowed
    assert_eq!(keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
    assert_eq!(keymap.get_action(KeyCode::Up, KeyModifiers::NONE), None);

    assert_eq!(
        keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_display_reflects_overrides() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![
            KeyBinding::new("w", Action::MoveLeft),
            KeyBinding::new("x", Action::Quit),
        ],
    };

    assert_eq!(keymap.get_key_display_for_action(Action::MoveLeft), "W");
    assert_eq!(keymap.get_key_display_for_action(Action::Quit), "X");
    assert_eq!(keymap.get_key_display_for_action(Action::Confirm), "Enter");

    let footer = keymap.footer_main();
    assert!(footer.contains("W/→: Select"), "footer: '{}'", footer);
    assert!(footer.contains("X: Quit"), "footer: '{}'", footer);
}

#[test]
fn test_help_lists_override_not_shadowed_key() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![KeyBinding::new("x", Action::OpenMinimal)],
    };
    let bindings = keymap.all_bindings();

    assert!(bindings
        .iter()
        .any(|b| b.key == "x" && b.action == Action::OpenMinimal));
    assert!(!bindings
        .iter()
        .any(|b| b.key == "1" && b.action == Action::OpenMinimal));
}

#[test]
fn test_footer_shortcuts_follow_overrides() {
    let keymap = Keymap::default();
    assert!(keymap.footer_main().contains("1/2/3/4: Shortcut"));

    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![KeyBinding::new("a", Action::OpenAuth)],
    };
    let footer = keymap.footer_main();
    assert!(footer.contains("1/2/3/A: Shortcut"), "footer: '{}'", footer);
}
