use std::fmt;

/// Group-size labels an activity may carry. Anything else is dropped on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Individual,
    Parejas,
    Grupal,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::Individual, Tag::Parejas, Tag::Grupal];

    /// Trims and lowercases `label`; `None` when it is not one of the known labels.
    pub fn parse(label: &str) -> Option<Tag> {
        match trim_text(label).to_lowercase().as_str() {
            "individual" => Some(Tag::Individual),
            "parejas" => Some(Tag::Parejas),
            "grupal" => Some(Tag::Grupal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Individual => "individual",
            Tag::Parejas => "parejas",
            Tag::Grupal => "grupal",
        }
    }

    /// (background, foreground) colors for chips and badges.
    pub fn palette(self) -> (&'static str, &'static str) {
        match self {
            Tag::Individual => ("#dbeafe", "#1e40af"),
            Tag::Parejas => ("#fef3c7", "#92400e"),
            Tag::Grupal => ("#d1fae5", "#065f46"),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strips Unicode whitespace and byte-order marks from both ends.
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Known tags of `labels`, in input order. Repeated labels stay repeated.
pub fn sanitize_tags<S: AsRef<str>>(labels: &[S]) -> Vec<Tag> {
    labels
        .iter()
        .filter_map(|label| Tag::parse(label.as_ref()))
        .collect()
}

/// Normalized string form of [`sanitize_tags`].
pub fn sanitize<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    sanitize_tags(labels)
        .into_iter()
        .map(|t| t.as_str().to_string())
        .collect()
}
