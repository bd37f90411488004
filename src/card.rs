//! Card data model and the submission layer that produces it.
//!
//! A submission is raw form input; `submit()` applies the blocking presence
//! checks and produces the immutable [`CardData`] record the renderer
//! consumes. A new submission replaces the record wholesale; nothing is
//! mutated in place and no history is kept.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::assets::Logo;
use crate::error::{Error, Result};

/// Known community role labels, published for listings and pickers.
/// Membership is deliberately not enforced at submission time.
pub const ROLE_CATALOG: &[&str] = &[
    "Mitosian",
    "Settler",
    "Guru",
    "Gakusei",
    "Daigakusei",
    "Sensei",
    "Emeritus Sensei",
    "Mitosis OG",
    "MORSE Genesis",
    "Intern Artist",
    "miArtist",
    "Intern Tuber",
    "miTuber",
    "Intern Analyst",
    "miAnalyst",
    "Intern Evangelist",
    "miEvangelist",
    "Intern Consultant",
    "miConsultant",
    "Mitosis Marketing Manager",
    "Co-Founder at Mitosis",
    "Co-Founder & CPO at Mitosis",
    "Bad Dev Mitosis",
    "Strategy Mitosis",
    "Mitosis Designer",
    "Mitosis Head of Community",
    "Mitosis Product",
    "Mitosis Community Lead",
    "Product Designer at Mitosis",
];

/// Color offered when "custom" is chosen without a value.
pub const DEFAULT_CUSTOM_COLOR: &str = "#666BFC";

/// Template preselected on a fresh form.
pub const DEFAULT_TEMPLATE: &str = "blue-waves";

/// Maximum roles accepted at submission time.
pub const MAX_ROLES: usize = 2;

/// The immutable record produced by a submission and consumed by the
/// renderer for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardData {
    /// Display name, non-empty.
    pub name: String,
    /// Discord handle, non-empty.
    pub username: String,
    /// Ordered role labels.
    pub roles: Vec<String>,
    /// Raw color choice: `"purple"`, `"white"`, or `#RRGGBB`. Stored
    /// verbatim; resolution is the renderer's job and is total.
    pub card_color: String,
    /// Profile picture as a `data:` URL, when one was uploaded.
    pub profile_picture: Option<String>,
    /// Twitter/X handle shown in the footer.
    pub twitter_handle: Option<String>,
    /// Template identifier; unknown values render an empty decoration.
    pub card_template: String,
    /// Logo variant stamped on the card.
    pub logo: Logo,
}

impl CardData {
    /// Handle shown in the footer: the explicit one when given, otherwise
    /// derived from the username by lower-casing and stripping whitespace.
    pub fn twitter_display(&self) -> String {
        match self.twitter_handle.as_deref() {
            Some(handle) if !handle.is_empty() => handle.to_string(),
            _ => derive_twitter_handle(&self.username),
        }
    }
}

/// Lower-case the username and strip all whitespace.
pub fn derive_twitter_handle(username: &str) -> String {
    username.to_lowercase().split_whitespace().collect()
}

/// Raw form input, typically deserialized from JSON or collected from CLI
/// flags. [`Submission::submit`] validates it into a [`CardData`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub name: String,
    pub username: String,
    pub roles: Vec<String>,
    /// `"purple"`, `"white"`, `"custom"`, or a `#RRGGBB` value.
    pub card_color: String,
    /// Value backing the `"custom"` choice.
    pub custom_color: Option<String>,
    pub card_template: String,
    pub logo: Logo,
    pub twitter_handle: String,
    /// Profile picture as a `data:` URL (see [`picture_data_url_from_file`]).
    pub profile_picture: Option<String>,
}

impl Submission {
    /// Apply the blocking presence checks and produce the card record.
    ///
    /// A failed check aborts the submission with no state change; the
    /// previous card, if any, stays current.
    pub fn submit(self) -> Result<CardData> {
        if self.name.trim().is_empty() {
            return Err(Error::Form("a name is required".into()));
        }
        if self.username.trim().is_empty() {
            return Err(Error::Form("a Discord username is required".into()));
        }
        if self.roles.is_empty() {
            return Err(Error::Form("select at least one role".into()));
        }
        if self.roles.len() > MAX_ROLES {
            return Err(Error::Form(format!("select up to {MAX_ROLES} roles")));
        }
        if self.profile_picture.is_none() {
            return Err(Error::Form("a profile picture is required".into()));
        }

        let card_color = match self.card_color.as_str() {
            "custom" => self
                .custom_color
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CUSTOM_COLOR.to_string()),
            "" => "purple".to_string(),
            other => other.to_string(),
        };

        let card_template = if self.card_template.is_empty() {
            DEFAULT_TEMPLATE.to_string()
        } else {
            self.card_template
        };

        let twitter_handle = if self.twitter_handle.trim().is_empty() {
            derive_twitter_handle(&self.username)
        } else {
            self.twitter_handle
        };

        log::debug!(
            "submission accepted for {:?} (color {:?}, template {:?}, logo {})",
            self.name,
            card_color,
            card_template,
            self.logo
        );

        Ok(CardData {
            name: self.name,
            username: self.username,
            roles: self.roles,
            card_color,
            profile_picture: self.profile_picture,
            twitter_handle: Some(twitter_handle),
            card_template,
            logo: self.logo,
        })
    }
}

/// Read an image file and package it as a `data:` URL, sniffing the MIME
/// type from magic bytes the way a browser file reader would.
pub fn picture_data_url_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| Error::Asset(format!("cannot read {}: {e}", path.display())))?;
    Ok(picture_data_url(&bytes))
}

/// Package raw image bytes as a `data:` URL.
pub fn picture_data_url(bytes: &[u8]) -> String {
    let mime = sniff_image_mime(bytes);
    format!("data:{mime};base64,{}", BASE64_STANDARD.encode(bytes))
}

fn sniff_image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ if bytes.starts_with(b"<svg") || bytes.starts_with(b"<?xml") => "image/svg+xml",
        _ => {
            log::warn!("unrecognized image format; embedding as opaque bytes");
            "application/octet-stream"
        }
    }
}
