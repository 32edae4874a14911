/// Browse-screen tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Search,
    News,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Search, Tab::News];

    pub fn cycle(&self) -> Self {
        match self {
            Tab::Home => Tab::Search,
            Tab::Search => Tab::News,
            Tab::News => Tab::Home,
        }
    }

    pub fn cycle_back(&self) -> Self {
        match self {
            Tab::Home => Tab::News,
            Tab::Search => Tab::Home,
            Tab::News => Tab::Search,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Search => 1,
            Tab::News => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Browse,
    Admin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_tab() {
        assert_eq!(Tab::Home.cycle(), Tab::Search);
        assert_eq!(Tab::Search.cycle(), Tab::News);
        assert_eq!(Tab::News.cycle(), Tab::Home);
    }

    #[test]
    fn test_cycle_back_is_inverse() {
        for tab in Tab::ALL {
            assert_eq!(tab.cycle().cycle_back(), tab);
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }
}
