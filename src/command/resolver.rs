//! Intent resolution - converts raw device text into a reply and an action list

use crate::command::action::{Action, LedState};
use crate::command::intent::{classify, Intent};

const GREETING_REPLY: &str = "Cześć! Jestem gotowy 🤖";
const GREETING_CAPTION: &str = "Czesc! 🤖";

const STATUS_REPLY: &str = "System działa poprawnie ✅";
const STATUS_CAPTION: &str = "Status: OK";

const LED_ON_REPLY: &str = "Włączam LED ✅";
const LED_ON_CAPTION: &str = "LED: ON";

const LED_OFF_REPLY: &str = "Wyłączam LED ✅";
const LED_OFF_CAPTION: &str = "LED: OFF";

const UNKNOWN_REPLY: &str = "Nie rozumiem polecenia. Spróbuj: hello, status, led on, led off.";
const UNKNOWN_CAPTION: &str = "Nie rozumiem :(";

/// Result of resolving a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentResolution {
    /// Which rule matched
    pub intent: Intent,
    /// Human-readable reply
    pub reply: String,
    /// Actions for the device, executed in order
    pub actions: Vec<Action>,
}

impl IntentResolution {
    pub fn into_parts(self) -> (String, Vec<Action>) {
        (self.reply, self.actions)
    }
}

/// Stateless, total resolver: every input yields a well-formed resolution
pub struct IntentResolver;

impl IntentResolver {
    /// Resolve raw device text
    pub fn resolve(text: &str) -> IntentResolution {
        Self::respond(classify(text))
    }

    /// Canned reply and actions for an intent
    pub fn respond(intent: Intent) -> IntentResolution {
        let (reply, actions) = match intent {
            Intent::Greeting => (GREETING_REPLY, vec![Action::display(GREETING_CAPTION)]),
            Intent::Status => (STATUS_REPLY, vec![Action::display(STATUS_CAPTION)]),
            Intent::LedOn => (
                LED_ON_REPLY,
                vec![Action::led(LedState::On), Action::display(LED_ON_CAPTION)],
            ),
            Intent::LedOff => (
                LED_OFF_REPLY,
                vec![Action::led(LedState::Off), Action::display(LED_OFF_CAPTION)],
            ),
            Intent::Unknown => (UNKNOWN_REPLY, vec![Action::display(UNKNOWN_CAPTION)]),
        };

        IntentResolution {
            intent,
            reply: reply.to_string(),
            actions,
        }
    }
}
