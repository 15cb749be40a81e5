use serde::{Deserialize, Serialize};

use crate::config::PLACEHOLDER_DESCRIPTION;
use crate::tags::{sanitize_tags, Tag};

/// One catalog entry as authored in `content/*.json`.
///
/// Optional attributes are `None` (or empty) when the author left them out;
/// the detail view omits the matching section instead of showing a blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub description: String,
    /// Raw labels; see [`ActivityRecord::tags`] for the displayable set.
    #[serde(default, rename = "tags")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub materials: Option<String>,
    #[serde(default)]
    pub variants: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ActivityRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            labels: Vec::new(),
            objective: None,
            materials: None,
            variants: None,
            video_url: None,
            images: Vec::new(),
        }
    }

    /// Filler entry shown until the real activity is written up.
    pub fn placeholder(id: impl Into<String>, title: impl Into<String>, label: &str) -> Self {
        Self::new(id, title, PLACEHOLDER_DESCRIPTION).with_labels([label])
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn tags(&self) -> Vec<Tag> {
        sanitize_tags(&self.labels)
    }

    /// Titled detail sections that have content, in display order.
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        [
            ("Objetivo", &self.objective),
            ("Materiales", &self.materials),
            ("Variantes", &self.variants),
        ]
        .into_iter()
        .filter_map(|(heading, body)| present(body).map(|text| (heading, text)))
        .collect()
    }

    pub fn video(&self) -> Option<&str> {
        present(&self.video_url)
    }

    pub fn image_paths(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Landing and about-page copy, from `content/site.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SiteInfo {
    pub title: String,
    pub course: String,
    pub term: String,
    pub group: String,
    #[serde(default)]
    pub background_url: Option<String>,
    pub about: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    pub career: String,
    pub photo_url: String,
    #[serde(default)]
    pub video_url: Option<String>,
}
