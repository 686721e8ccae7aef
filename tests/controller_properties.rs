//! Behaviour of the screen controller as seen from the outside.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dialogdemo::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use dialogdemo::controller::SIGN_UP_NOT_IMPLEMENTED;
use dialogdemo::dialogs::{AuthFocus, DialogKind};
use dialogdemo::{Action, ControllerAction, KeyBinding, Keymap, KeymapPreset, ScreenController};

const ALL: [DialogKind; 4] = [
    DialogKind::Minimal,
    DialogKind::Alert,
    DialogKind::Image,
    DialogKind::Auth,
];

fn press(controller: &mut ScreenController, code: KeyCode) -> ControllerAction {
    controller.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &Keymap::default())
}

fn type_text(controller: &mut ScreenController, text: &str) {
    for c in text.chars() {
        press(controller, KeyCode::Char(c));
    }
}

#[test]
fn each_trigger_opens_only_its_own_dialog() {
    for (i, kind) in ALL.iter().enumerate() {
        let mut controller = ScreenController::new();
        let digit = char::from_digit(i as u32 + 1, 10).unwrap();
        press(&mut controller, KeyCode::Char(digit));

        for other in ALL {
            assert_eq!(
                controller.is_visible(other),
                other == *kind,
                "pressing {} should open only {}",
                digit,
                kind
            );
        }
    }
}

#[test]
fn enter_on_selected_trigger_opens_it() {
    let mut controller = ScreenController::new();
    press(&mut controller, KeyCode::Right);
    press(&mut controller, KeyCode::Right);
    press(&mut controller, KeyCode::Enter);
    assert!(controller.is_visible(DialogKind::Image));
    assert_eq!(controller.topmost(), Some(DialogKind::Image));
}

#[test]
fn escape_dismisses_every_dialog() {
    for kind in ALL {
        let mut controller = ScreenController::new();
        controller.toggle_dialog(kind);
        press(&mut controller, KeyCode::Esc);
        assert!(!controller.is_visible(kind), "{} still visible", kind);
    }
}

#[test]
fn dismiss_and_confirm_buttons_close_button_dialogs() {
    for kind in [DialogKind::Alert, DialogKind::Image] {
        // Confirm is focused first
        let mut controller = ScreenController::new();
        controller.toggle_dialog(kind);
        press(&mut controller, KeyCode::Enter);
        assert!(!controller.is_visible(kind));

        let mut controller = ScreenController::new();
        controller.toggle_dialog(kind);
        press(&mut controller, KeyCode::Left);
        press(&mut controller, KeyCode::Enter);
        assert!(!controller.is_visible(kind));
        assert_eq!(controller.status_message(), "");
    }
}

#[test]
fn cancel_discards_auth_form() {
    let mut controller = ScreenController::new();
    press(&mut controller, KeyCode::Char('4'));
    type_text(&mut controller, "someone@example.com");
    press(&mut controller, KeyCode::Esc);
    assert!(controller.auth_form().is_none());

    press(&mut controller, KeyCode::Char('4'));
    let form = controller.auth_form().unwrap();
    assert_eq!(form.email(), "");
    assert_eq!(form.password(), "");
}

#[test]
fn correct_credentials_close_auth_without_status() {
    let mut controller = ScreenController::new();
    controller.toggle_dialog(DialogKind::Auth);
    controller.submit_sign_in(DEMO_EMAIL, DEMO_PASSWORD);
    assert!(!controller.is_visible(DialogKind::Auth));
    assert_eq!(controller.status_message(), "");
}

#[test]
fn wrong_credentials_keep_auth_open_with_status() {
    let mut controller = ScreenController::new();
    controller.toggle_dialog(DialogKind::Auth);
    controller.auth_form_mut().unwrap().fill("x@y.com", "bad");
    controller.submit_sign_in("x@y.com", "bad");

    assert!(controller.is_visible(DialogKind::Auth));
    assert_eq!(controller.status_message(), "Wrong email or password");
    // Buffers survive a failed attempt
    assert_eq!(controller.auth_form().unwrap().email(), "x@y.com");
}

#[test]
fn credentials_are_compared_exactly() {
    let mut controller = ScreenController::new();
    controller.toggle_dialog(DialogKind::Auth);
    controller.submit_sign_in(" anbo@zealand.dk", DEMO_PASSWORD);
    assert!(controller.is_visible(DialogKind::Auth));
    controller.submit_sign_in("ANBO@zealand.dk", DEMO_PASSWORD);
    assert!(controller.is_visible(DialogKind::Auth));
    controller.submit_sign_in("", "");
    assert!(controller.is_visible(DialogKind::Auth));
}

#[test]
fn sign_up_closes_auth_and_reports_not_implemented() {
    let mut controller = ScreenController::new();
    controller.toggle_dialog(DialogKind::Auth);
    controller.submit_sign_up("new@user.com", "whatever");
    assert!(!controller.is_visible(DialogKind::Auth));
    assert_eq!(controller.status_message(), SIGN_UP_NOT_IMPLEMENTED);
}

#[test]
fn status_message_survives_reopening() {
    let mut controller = ScreenController::new();
    controller.toggle_dialog(DialogKind::Auth);
    controller.submit_sign_in("x@y.com", "bad");
    controller.close_dialog(DialogKind::Auth);
    controller.toggle_dialog(DialogKind::Auth);
    assert_eq!(controller.status_message(), "Wrong email or password");

    // Success later does not clear it
    controller.submit_sign_in(DEMO_EMAIL, DEMO_PASSWORD);
    assert_eq!(controller.status_message(), "Wrong email or password");
}

#[test]
fn close_on_closed_dialog_is_a_no_op() {
    let mut controller = ScreenController::new();
    let before = controller.visibility();
    for kind in ALL {
        controller.close_dialog(kind);
    }
    assert_eq!(controller.visibility(), before);
    assert_eq!(controller.status_message(), "");
}

#[test]
fn sign_in_through_the_keyboard() {
    let mut controller = ScreenController::new();
    press(&mut controller, KeyCode::Char('4'));
    type_text(&mut controller, DEMO_EMAIL);
    press(&mut controller, KeyCode::Enter);
    assert_eq!(
        controller.auth_form().map(|f| f.focus()),
        Some(AuthFocus::Password)
    );
    type_text(&mut controller, DEMO_PASSWORD);
    press(&mut controller, KeyCode::Enter);

    assert!(!controller.is_visible(DialogKind::Auth));
    assert_eq!(controller.status_message(), "");
}

#[test]
fn sign_up_button_through_the_keyboard() {
    let mut controller = ScreenController::new();
    press(&mut controller, KeyCode::Char('4'));
    // Email -> Password -> Cancel -> Sign in -> Sign up
    for _ in 0..4 {
        press(&mut controller, KeyCode::Tab);
    }
    press(&mut controller, KeyCode::Enter);

    assert!(!controller.is_visible(DialogKind::Auth));
    assert_eq!(controller.status_message(), SIGN_UP_NOT_IMPLEMENTED);
}

#[test]
fn typing_q_in_email_field_does_not_quit() {
    let mut controller = ScreenController::new();
    press(&mut controller, KeyCode::Char('4'));
    assert_eq!(
        press(&mut controller, KeyCode::Char('q')),
        ControllerAction::None
    );
    assert_eq!(controller.auth_form().unwrap().email(), "q");
}

#[test]
fn flags_are_independent() {
    let mut controller = ScreenController::new();
    for kind in ALL {
        controller.toggle_dialog(kind);
    }
    assert!(ALL.iter().all(|k| controller.is_visible(*k)));

    controller.close_dialog(DialogKind::Minimal);
    assert!(!controller.is_visible(DialogKind::Minimal));
    assert!(controller.is_visible(DialogKind::Alert));
    assert!(controller.is_visible(DialogKind::Image));
    assert!(controller.is_visible(DialogKind::Auth));
}

#[test]
fn letter_rebound_to_cancel_is_typed_into_auth_fields() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![KeyBinding::new("x", Action::Cancel)],
    };
    let mut controller = ScreenController::new();
    controller.toggle_dialog(DialogKind::Auth);

    for c in "ax".chars() {
        controller.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), &keymap);
    }
    assert!(controller.is_visible(DialogKind::Auth));
    assert_eq!(controller.auth_form().map(|f| f.email()), Some("ax"));

    // Tab to the password field and keep typing
    controller.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE), &keymap);
    controller.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), &keymap);
    assert_eq!(controller.auth_form().map(|f| f.password()), Some("x"));

    // Outside the fields the rebound key cancels
    controller.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE), &keymap);
    controller.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), &keymap);
    assert!(!controller.is_visible(DialogKind::Auth));
}
