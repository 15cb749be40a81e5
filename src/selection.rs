use crate::model::ActivityRecord;

/// Which record, if any, a catalog view is showing in its detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(String),
}

impl Selection {
    /// Opens `id`, replacing whatever was open before.
    pub fn select(&mut self, id: impl Into<String>) {
        *self = Selection::Open(id.into());
    }

    pub fn dismiss(&mut self) {
        *self = Selection::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Selection::Open(id) => Some(id.as_str()),
            Selection::Closed => None,
        }
    }

    pub fn resolve<'a>(&self, records: &'a [ActivityRecord]) -> Option<&'a ActivityRecord> {
        let id = self.target()?;
        records.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let s = Selection::default();
        assert!(!s.is_open());
        assert_eq!(s.target(), None);
    }

    #[test]
    fn last_select_wins() {
        let mut s = Selection::default();
        s.select("a");
        s.select("b");
        assert_eq!(s, Selection::Open("b".into()));
    }

    #[test]
    fn dismiss_closes_from_any_target() {
        for id in ["a", "b", ""] {
            let mut s = Selection::default();
            s.select(id);
            s.dismiss();
            assert_eq!(s, Selection::Closed);
        }
    }

    #[test]
    fn dismiss_when_closed_stays_closed() {
        let mut s = Selection::Closed;
        s.dismiss();
        assert_eq!(s, Selection::Closed);
    }

    #[test]
    fn resolve_finds_open_record() {
        let records = vec![
            ActivityRecord::new("a", "A", ""),
            ActivityRecord::new("b", "B", ""),
        ];
        let mut s = Selection::default();
        assert!(s.resolve(&records).is_none());
        s.select("b");
        assert_eq!(s.resolve(&records).map(|r| r.title.as_str()), Some("B"));
        s.select("missing");
        assert!(s.resolve(&records).is_none());
    }
}
