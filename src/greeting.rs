//! Greeting card content and typewriter reveal.
//!
//! The card shows a title built from the display name, a message revealed one
//! character at a time, and an optional blessing that the user can show and
//! hide. The animation engine does not depend on any of this; front-ends
//! drive a [`Card`] with the same frame delta they give the engine.

use serde::{Deserialize, Serialize};

use crate::resources::canvas::Color;
use crate::resources::palette::DEFAULT_ACCENT;

pub const DEFAULT_NAME: &str = "Loan";
pub const DEFAULT_MESSAGE: &str = "Chúc mừng sinh nhật!";
pub const DEFAULT_BLESSING: &str = "Chúc Loan ngày mai sinh nhật thật vui vẻ và ngập tràn hạnh phúc nha. \
Mong rằng trong tuổi mới, Loan sẽ nhận được thật nhiều yêu thương… và hy vọng một phần trong đó đến từ mình. \
Đừng buồn nữa nha cô gái! Người viết Thiện, kkk";

/// Seconds per character for the message.
pub const MESSAGE_INTERVAL: f32 = 0.045;
/// Seconds per character for the blessing.
pub const BLESSING_INTERVAL: f32 = 0.035;

/// Construction parameters for the greeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub name: String,
    pub message: String,
    pub blessing: String,
    pub accent: Vec<Color>,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            blessing: DEFAULT_BLESSING.to_string(),
            accent: DEFAULT_ACCENT.to_vec(),
        }
    }
}

/// Reveals a string one character per `interval` seconds.
///
/// Characters are counted as Unicode scalar values, so multi-byte text such
/// as Vietnamese diacritics is never cut mid-character.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    interval: f32,
    elapsed: f32,
    total: usize,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: f32) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            interval,
            elapsed: 0.0,
            total,
            shown: 0,
        }
    }

    /// Advance by `dt` seconds and return the number of visible characters.
    pub fn update(&mut self, dt: f32) -> usize {
        if self.is_done() {
            return self.shown;
        }
        self.elapsed += dt.max(0.0);
        self.shown = if self.interval <= 0.0 {
            self.total
        } else {
            ((self.elapsed / self.interval).floor() as usize).min(self.total)
        };
        self.shown
    }

    /// The currently revealed prefix.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Start over from an empty reveal.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.shown = 0;
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }
}

/// Greeting card state: title, typed message, optional typed blessing.
#[derive(Debug, Clone)]
pub struct Card {
    greeting: Greeting,
    message: Typewriter,
    blessing: Typewriter,
    blessing_visible: bool,
}

impl Card {
    pub fn new(greeting: Greeting) -> Self {
        let message = Typewriter::new(greeting.message.clone(), MESSAGE_INTERVAL);
        let blessing = Typewriter::new(greeting.blessing.clone(), BLESSING_INTERVAL);
        Self {
            greeting,
            message,
            blessing,
            blessing_visible: false,
        }
    }

    pub fn greeting(&self) -> &Greeting {
        &self.greeting
    }

    pub fn title(&self) -> String {
        format!("Happy Birthday, {}", self.greeting.name)
    }

    /// Advance both typewriters. The blessing only types while shown.
    pub fn update(&mut self, dt: f32) {
        self.message.update(dt);
        if self.blessing_visible {
            self.blessing.update(dt);
        }
    }

    pub fn message(&self) -> &str {
        self.message.visible()
    }

    /// Revealed blessing text, or `None` while hidden.
    pub fn blessing(&self) -> Option<&str> {
        self.blessing_visible.then(|| self.blessing.visible())
    }

    pub fn blessing_visible(&self) -> bool {
        self.blessing_visible
    }

    /// Show the blessing (typing it again from the start) or hide it.
    pub fn toggle_blessing(&mut self) {
        self.blessing_visible = !self.blessing_visible;
        self.blessing.reset();
    }
}
