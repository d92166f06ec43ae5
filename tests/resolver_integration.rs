//! Integration tests for command resolution
//!
//! Literal device scenarios plus property checks over arbitrary input:
//! - every string resolves (no panics, never an empty action list)
//! - resolution is deterministic
//! - surrounding whitespace and letter case do not change the outcome

use device_assistant::command::{Action, Intent, IntentResolver, LedState};
use proptest::prelude::*;

// ============================================================================
// Device scenarios
// ============================================================================

#[test]
fn test_scenario_table() {
    let cases: &[(&str, Intent, Vec<Action>)] = &[
        ("hello", Intent::Greeting, vec![Action::display("Czesc! 🤖")]),
        ("status", Intent::Status, vec![Action::display("Status: OK")]),
        (
            "led on",
            Intent::LedOn,
            vec![Action::led(LedState::On), Action::display("LED: ON")],
        ),
        (
            "wyłącz led",
            Intent::LedOff,
            vec![Action::led(LedState::Off), Action::display("LED: OFF")],
        ),
        ("xyzzy", Intent::Unknown, vec![Action::display("Nie rozumiem :(")]),
        ("", Intent::Unknown, vec![Action::display("Nie rozumiem :(")]),
    ];

    for (input, intent, actions) in cases {
        let resolution = IntentResolver::resolve(input);
        assert_eq!(resolution.intent, *intent, "input {:?}", input);
        assert_eq!(&resolution.actions, actions, "input {:?}", input);
    }
}

#[test]
fn test_every_led_phrase_variant() {
    for phrase in ["led on", "ledon", "włącz led", "wlacz led", "zalacz led", "załącz led"] {
        assert_eq!(IntentResolver::resolve(phrase).intent, Intent::LedOn, "{phrase}");
    }
    for phrase in ["led off", "ledoff", "wyłącz led", "wylacz led", "zgas led", "zgaś led"] {
        assert_eq!(IntentResolver::resolve(phrase).intent, Intent::LedOff, "{phrase}");
    }
}

#[test]
fn test_substring_versus_exact() {
    assert_eq!(
        IntentResolver::resolve("what is the status today").intent,
        Intent::Status
    );
    assert_eq!(IntentResolver::resolve("led on please").intent, Intent::Unknown);
}

#[test]
fn test_padding_and_case() {
    assert_eq!(
        IntentResolver::resolve("  HELLO  "),
        IntentResolver::resolve("hello")
    );
    assert_eq!(
        IntentResolver::resolve("\tWYŁĄCZ LED\n"),
        IntentResolver::resolve("wyłącz led")
    );
}

#[test]
fn test_fallback_reply_lists_commands() {
    let resolution = IntentResolver::resolve("zrób kawę");
    for hint in ["hello", "status", "led on", "led off"] {
        assert!(resolution.reply.contains(hint), "missing hint {hint}");
    }
}

#[test]
fn test_unusual_inputs_fall_back() {
    let long = "z".repeat(100_000);
    for input in ["   ", "こんにちは", "🤖🤖🤖", "\u{0}\u{7f}", long.as_str()] {
        assert_eq!(IntentResolver::resolve(input).intent, Intent::Unknown);
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_resolve_is_total(text in any::<String>()) {
        let resolution = IntentResolver::resolve(&text);
        prop_assert!(!resolution.reply.is_empty());
        prop_assert!(!resolution.actions.is_empty());
    }

    #[test]
    fn prop_resolve_is_deterministic(text in any::<String>()) {
        prop_assert_eq!(IntentResolver::resolve(&text), IntentResolver::resolve(&text));
    }

    #[test]
    fn prop_padding_is_ignored(
        text in "[a-z ]{0,24}",
        left in "[ \t\n]{0,4}",
        right in "[ \t\n]{0,4}",
    ) {
        let padded = format!("{left}{text}{right}");
        prop_assert_eq!(IntentResolver::resolve(&padded), IntentResolver::resolve(&text));
    }

    #[test]
    fn prop_ascii_case_is_ignored(text in "[a-zA-Z ]{0,24}") {
        prop_assert_eq!(
            IntentResolver::resolve(&text.to_uppercase()),
            IntentResolver::resolve(&text.to_lowercase())
        );
    }

    #[test]
    fn prop_greeting_anywhere_wins(prefix in "[a-z ]{0,12}", suffix in "[a-z ]{0,12}") {
        let text = format!("{prefix}hello{suffix}");
        prop_assert_eq!(IntentResolver::resolve(&text).intent, Intent::Greeting);
    }
}
