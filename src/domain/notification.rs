//! Notification request value object and argument assembly

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use super::error::{NotifyError, ParseSoundError};

/// Named macOS system sounds accepted by terminal-notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    /// The user's default alert sound
    #[serde(rename = "default")]
    Default,
    Basso,
    Blow,
    Bottle,
    Frog,
    Funk,
    Glass,
    Hero,
    Morse,
    Ping,
    Pop,
    Purr,
    Sosumi,
    Submarine,
    Tink,
}

impl Sound {
    /// Get the value passed to terminal-notifier's `-sound` flag.
    ///
    /// The default sound is spelled `'default'`, quote marks included,
    /// which is the form the external tool expects.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "'default'",
            Self::Basso => "Basso",
            Self::Blow => "Blow",
            Self::Bottle => "Bottle",
            Self::Frog => "Frog",
            Self::Funk => "Funk",
            Self::Glass => "Glass",
            Self::Hero => "Hero",
            Self::Morse => "Morse",
            Self::Ping => "Ping",
            Self::Pop => "Pop",
            Self::Purr => "Purr",
            Self::Sosumi => "Sosumi",
            Self::Submarine => "Submarine",
            Self::Tink => "Tink",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sound {
    type Err = ParseSoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "basso" => Ok(Self::Basso),
            "blow" => Ok(Self::Blow),
            "bottle" => Ok(Self::Bottle),
            "frog" => Ok(Self::Frog),
            "funk" => Ok(Self::Funk),
            "glass" => Ok(Self::Glass),
            "hero" => Ok(Self::Hero),
            "morse" => Ok(Self::Morse),
            "ping" => Ok(Self::Ping),
            "pop" => Ok(Self::Pop),
            "purr" => Ok(Self::Purr),
            "sosumi" => Ok(Self::Sosumi),
            "submarine" => Ok(Self::Submarine),
            "tink" => Ok(Self::Tink),
            _ => Err(ParseSoundError {
                input: s.to_string(),
            }),
        }
    }
}

/// Value object describing a single desktop notification.
///
/// `message` is the only required field. Optional fields that are left
/// unset, or set to an empty string, contribute no arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    /// Notification body (required)
    pub message: String,
    /// Notification title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Notification subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// System sound played on delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<Sound>,
    /// URL to open, or bundle identifier to activate, on click
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Bundle identifier whose icon the notification is sent as
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    /// Grouping key for notification replacement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Path to an image shown in place of the application icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_icon: Option<String>,
    /// Path to an image attached to the notification body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_image: Option<String>,
}

impl Notification {
    /// Create a notification with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the delivery sound
    pub fn sound(mut self, sound: Sound) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Set the click target: a URL to open or a bundle id to activate
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the sending application's bundle identifier
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Set the grouping key
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the application icon image path
    pub fn app_icon(mut self, path: impl Into<String>) -> Self {
        self.app_icon = Some(path.into());
        self
    }

    /// Set the content image path
    pub fn content_image(mut self, path: impl Into<String>) -> Self {
        self.content_image = Some(path.into());
        self
    }

    /// Assemble the terminal-notifier argument list for this request.
    ///
    /// Arguments come out as flag/value pairs in a fixed order:
    /// `-message`, `-title`, `-subtitle`, `-sound`, `-group`, `-appIcon`,
    /// `-contentImage`, `-open`, `-activate`, `-sender`. Image paths are
    /// resolved to absolute form.
    ///
    /// A `link` that does not parse as a URL is dropped without error;
    /// that is a deliberate part of the contract, not an oversight. The
    /// `com.` bundle-id checks on `link` and `sender` are independent of
    /// URL parsing, so a link such as `com.example.app://profile` yields
    /// both `-open` and `-activate`.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::MissingMessage`] if `message` is empty.
    /// - [`NotifyError::PathNormalization`] if an image path cannot be
    ///   resolved to absolute form.
    /// - [`NotifyError::NothingToSend`] if no arguments were produced.
    pub fn to_args(&self) -> Result<Vec<String>, NotifyError> {
        let mut args: Vec<String> = Vec::new();

        if self.message.is_empty() {
            return Err(NotifyError::MissingMessage);
        }
        push_pair(&mut args, "-message", &self.message);

        if let Some(title) = set(&self.title) {
            push_pair(&mut args, "-title", title);
        }

        if let Some(subtitle) = set(&self.subtitle) {
            push_pair(&mut args, "-subtitle", subtitle);
        }

        if let Some(sound) = self.sound {
            push_pair(&mut args, "-sound", sound.as_str());
        }

        if let Some(group) = set(&self.group) {
            push_pair(&mut args, "-group", group);
        }

        if let Some(icon) = set(&self.app_icon) {
            push_pair(&mut args, "-appIcon", &normalize_image_path(icon)?);
        }

        if let Some(image) = set(&self.content_image) {
            push_pair(&mut args, "-contentImage", &normalize_image_path(image)?);
        }

        if let Some(link) = set(&self.link) {
            // An unparseable link is silently dropped by contract.
            if Url::parse(link).is_ok() {
                push_pair(&mut args, "-open", link);
            }

            if link.to_lowercase().starts_with("com.") {
                push_pair(&mut args, "-activate", link);
            }
        }

        if let Some(sender) = set(&self.sender) {
            if sender.to_lowercase().starts_with("com.") {
                push_pair(&mut args, "-sender", sender);
            }
        }

        if args.is_empty() {
            return Err(NotifyError::NothingToSend);
        }

        Ok(args)
    }
}

/// An optional field counts as set only when non-empty
fn set(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn push_pair(args: &mut Vec<String>, flag: &str, value: &str) {
    args.push(flag.to_string());
    args.push(value.to_string());
}

/// Resolve an image path to absolute form
fn normalize_image_path(image: &str) -> Result<String, NotifyError> {
    let path = std::path::absolute(image).map_err(|e| NotifyError::PathNormalization {
        path: image.to_string(),
        reason: e.to_string(),
    })?;
    Ok(path.to_string_lossy().into_owned())
}
