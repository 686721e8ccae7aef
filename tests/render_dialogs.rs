//! Rendering checks against ratatui's `TestBackend`.

use dialogdemo::app::App;
use dialogdemo::dialogs::DialogKind;
use dialogdemo::Config;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app_with(kind: Option<DialogKind>) -> App {
    let mut app = App::new(Config::default(), PathBuf::from("/tmp/config.toml"));
    if let Some(kind) = kind {
        app.controller_mut().toggle_dialog(kind);
    }
    app
}

#[test]
fn main_screen_shows_all_triggers() {
    let screen = render(&app_with(None));
    for label in [
        "Minimal Dialog",
        "Alert Dialog",
        "Dialog with Image",
        "Auth Dialog",
    ] {
        assert!(screen.contains(label), "missing trigger {:?}", label);
    }
    assert!(screen.contains("Quit"));
}

#[test]
fn alert_dialog_content() {
    let screen = render(&app_with(Some(DialogKind::Alert)));
    assert!(screen.contains("⊕ Example Icon"));
    assert!(screen.contains("Dialog Title"));
    assert!(screen.contains("Dialog Text"));
    assert!(screen.contains("Dismiss"));
    assert!(screen.contains("Confirm"));
}

#[test]
fn minimal_dialog_content() {
    let screen = render(&app_with(Some(DialogKind::Minimal)));
    assert!(screen.contains("This is a minimal dialog"));
}

#[test]
fn image_dialog_content() {
    let screen = render(&app_with(Some(DialogKind::Image)));
    assert!(screen.contains("This is a dialog with buttons and an image."));
    assert!(screen.contains("Example Image"));
    assert!(screen.contains("o  o"));
    assert!(screen.contains("Dismiss"));
    assert!(screen.contains("Confirm"));
}

#[test]
fn auth_dialog_content() {
    let screen = render(&app_with(Some(DialogKind::Auth)));
    assert!(screen.contains("Email"));
    assert!(screen.contains("Password"));
    assert!(screen.contains("name@example.com"));
    assert!(screen.contains("Cancel"));
    assert!(screen.contains("Sign in"));
    assert!(screen.contains("Sign up"));
}

#[test]
fn password_is_masked() {
    let mut app = app_with(Some(DialogKind::Auth));
    app.controller_mut()
        .auth_form_mut()
        .unwrap()
        .fill("anbo@zealand.dk", "secret12");

    let screen = render(&app);
    assert!(screen.contains("anbo@zealand.dk"));
    assert!(!screen.contains("secret12"));
    assert!(screen.contains("••••••••"));
}

#[test]
fn failed_sign_in_shows_status() {
    let mut app = app_with(Some(DialogKind::Auth));
    app.controller_mut().submit_sign_in("x@y.com", "bad");
    let screen = render(&app);
    assert!(screen.contains("Wrong email or password"));
}

#[test]
fn hidden_dialogs_are_not_drawn() {
    let screen = render(&app_with(None));
    assert!(!screen.contains("Dialog Title"));
    assert!(!screen.contains("This is a minimal dialog"));
    assert!(!screen.contains("Sign in"));
}
