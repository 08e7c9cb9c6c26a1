//! Developer record produced by the parser.

use serde::Serialize;

/// One developer returned by the search endpoint.
///
/// Built only through [`Record::new`], which refuses an empty username, so a
/// record always carries a display name and a profile URL. There are no
/// setters; [`Record::with_image`] consumes the record and returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<u32>,
    profile_url: String,
}

impl Record {
    /// Returns `None` when `username` is empty. `profile_url` is not validated here.
    pub fn new(username: impl Into<String>, profile_url: impl Into<String>) -> Option<Self> {
        let username = username.into();
        if username.is_empty() {
            return None;
        }
        Some(Self {
            username,
            image: None,
            profile_url: profile_url.into(),
        })
    }

    /// Attach an image reference (assigned by the caller, never by the parser).
    pub fn with_image(self, image: u32) -> Self {
        Self {
            image: Some(image),
            ..self
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn image(&self) -> Option<u32> {
        self.image
    }

    /// True when an image reference was provided.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }
}
