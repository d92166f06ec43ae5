//! Classify free-text device commands into intents
//!
//! Matching is rule based: each intent owns a fixed phrase set together with
//! the policy used to compare it against the normalized input. Sets are tried
//! in [`INTENT_TABLE`] order and the first match wins.

/// Category of a device command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Say hello
    Greeting,
    /// Ask whether the system is healthy
    Status,
    /// Switch the LED on
    LedOn,
    /// Switch the LED off
    LedOff,
    /// Could not determine intent
    Unknown,
}

impl Intent {
    /// Name used in logs and CLI output
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Status => "status",
            Intent::LedOn => "led_on",
            Intent::LedOff => "led_off",
            Intent::Unknown => "unknown",
        }
    }
}

/// How a phrase set is compared against normalized input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Input contains any phrase as a substring
    Contains,
    /// Input equals one of the phrases
    Exact,
}

/// Fixed phrase set bound to an intent
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    pub intent: Intent,
    pub policy: MatchPolicy,
    pub phrases: &'static [&'static str],
}

impl KeywordSet {
    /// `normalized` must already be trimmed and lowercased
    pub fn matches(&self, normalized: &str) -> bool {
        match self.policy {
            MatchPolicy::Contains => self.phrases.iter().any(|p| normalized.contains(p)),
            MatchPolicy::Exact => self.phrases.iter().any(|p| normalized == *p),
        }
    }
}

pub const GREETING: KeywordSet = KeywordSet {
    intent: Intent::Greeting,
    policy: MatchPolicy::Contains,
    phrases: &["hello", "hej", "cześć", "czesc"],
};

pub const STATUS: KeywordSet = KeywordSet {
    intent: Intent::Status,
    policy: MatchPolicy::Contains,
    phrases: &["status"],
};

pub const LED_ON: KeywordSet = KeywordSet {
    intent: Intent::LedOn,
    policy: MatchPolicy::Exact,
    phrases: &[
        "led on",
        "ledon",
        "włącz led",
        "wlacz led",
        "zalacz led",
        "załącz led",
    ],
};

pub const LED_OFF: KeywordSet = KeywordSet {
    intent: Intent::LedOff,
    policy: MatchPolicy::Exact,
    phrases: &[
        "led off",
        "ledoff",
        "wyłącz led",
        "wylacz led",
        "zgas led",
        "zgaś led",
    ],
};

/// Evaluation order. Reordering changes behavior: "hello status" is a greeting.
pub const INTENT_TABLE: [KeywordSet; 4] = [GREETING, STATUS, LED_ON, LED_OFF];

/// Trim surrounding whitespace and lowercase
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classify raw device text; anything unmatched is [`Intent::Unknown`]
pub fn classify(raw: &str) -> Intent {
    let normalized = normalize(raw);
    INTENT_TABLE
        .iter()
        .find(|set| set.matches(&normalized))
        .map_or(Intent::Unknown, |set| set.intent)
}
