//! Page registry - the ordered set of full-screen views

/// One of the tribute's pages, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Welcome,
    Photo,
    Videos,
    Reasons,
    Celebration,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Welcome,
        Page::Photo,
        Page::Videos,
        Page::Reasons,
        Page::Celebration,
    ];

    pub fn from_index(index: usize) -> Option<Page> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Welcome => 0,
            Page::Photo => 1,
            Page::Videos => 2,
            Page::Reasons => 3,
            Page::Celebration => 4,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Page::Welcome => "Welcome",
            Page::Photo => "Photo",
            Page::Videos => "Videos",
            Page::Reasons => "Reasons",
            Page::Celebration => "Celebration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_through_registry() {
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(page.index(), i);
            assert_eq!(Page::from_index(i), Some(*page));
        }
        assert_eq!(Page::from_index(Page::ALL.len()), None);
    }
}
