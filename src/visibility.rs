use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionVisibility {
    #[default]
    Unseen,
    Seen,
}

/// Outcome of feeding one intersection entry into [`VisibleSections`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// First qualifying intersection; the caller stops observing the target.
    Revealed,
    Unchanged,
}

/// Append-only record of sections whose entrance animation has played.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSections {
    sections: HashMap<String, SectionVisibility>,
}

impl VisibleSections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> Transition {
        if !is_intersecting {
            return Transition::Unchanged;
        }

        let state = self.sections.entry(id.to_string()).or_default();
        match *state {
            SectionVisibility::Unseen => {
                *state = SectionVisibility::Seen;
                Transition::Revealed
            }
            SectionVisibility::Seen => Transition::Unchanged,
        }
    }

    pub fn visibility(&self, id: &str) -> SectionVisibility {
        self.sections.get(id).copied().unwrap_or_default()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visibility(id) == SectionVisibility::Seen
    }

    pub fn len(&self) -> usize {
        self.sections
            .values()
            .filter(|state| **state == SectionVisibility::Seen)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sections_start_unseen() {
        let sections = VisibleSections::new();
        assert_eq!(sections.visibility("about"), SectionVisibility::Unseen);
        assert!(sections.is_empty());
    }

    #[test]
    fn non_intersecting_entry_does_not_reveal() {
        let mut sections = VisibleSections::new();
        assert_eq!(sections.observe("about", false), Transition::Unchanged);
        assert!(!sections.is_visible("about"));
    }

    #[test]
    fn section_reveals_once_across_repeated_passes() {
        let mut sections = VisibleSections::new();

        assert_eq!(sections.observe("skills", true), Transition::Revealed);
        assert_eq!(sections.observe("skills", false), Transition::Unchanged);
        assert_eq!(sections.observe("skills", true), Transition::Unchanged);

        assert!(sections.is_visible("skills"));
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn membership_only_grows() {
        let mut sections = VisibleSections::new();
        let passes = [
            ("home", true),
            ("about", false),
            ("about", true),
            ("home", false),
            ("projects", true),
            ("about", false),
        ];

        let mut previous = 0;
        for (id, intersecting) in passes {
            sections.observe(id, intersecting);
            assert!(sections.len() >= previous);
            previous = sections.len();
        }

        assert!(sections.is_visible("home"));
        assert!(sections.is_visible("about"));
        assert!(sections.is_visible("projects"));
        assert!(!sections.is_visible("contact"));
    }
}
