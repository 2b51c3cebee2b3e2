// src/app/navigation.rs

use ratatui::text::Span;
use strum::{Display, EnumIter, IntoEnumIterator};

/// The three top-level content panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Panel {
    #[default]
    Scan,
    Database,
    About,
}

impl Panel {
    /// Text of the panel's nav link.
    pub fn label(&self) -> &'static str {
        match self {
            Panel::Scan => "F1 Scan",
            Panel::Database => "F2 Database",
            Panel::About => "F3 About",
        }
    }

    pub fn index(&self) -> usize {
        Panel::iter().position(|p| p == *self).unwrap_or(0)
    }
}

/// Padding drawn on each side of a nav label.
pub const LINK_PADDING: u16 = 1;
/// Width of the divider drawn between two nav labels.
pub const LINK_DIVIDER: u16 = 1;

/// Position of the "active" underline, in cells, relative to the left edge of
/// the nav bar's inner area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavIndicator {
    pub offset: u16,
    pub width: u16,
}

impl NavIndicator {
    /// Measures where the link at `active` sits when `labels` are laid out
    /// left to right with padding and dividers.
    pub fn measure(labels: &[&str], active: usize) -> Self {
        let link_width = |label: &str| Span::raw(label).width() as u16 + 2 * LINK_PADDING;
        let offset = labels
            .iter()
            .take(active)
            .map(|label| link_width(label) + LINK_DIVIDER)
            .sum();
        let width = labels.get(active).map(|label| link_width(label)).unwrap_or(0);
        Self { offset, width }
    }
}

/// Owns which panel is visible and which nav link is marked active.
#[derive(Debug)]
pub struct Navigator {
    visible: Panel,
    active_link: Panel,
    indicator: NavIndicator,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        let mut navigator = Self {
            visible: Panel::Scan,
            active_link: Panel::Scan,
            indicator: NavIndicator::default(),
        };
        navigator.update_indicator();
        navigator
    }

    pub fn active(&self) -> Panel {
        self.visible
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible == panel
    }

    pub fn is_link_active(&self, panel: Panel) -> bool {
        self.active_link == panel
    }

    pub fn indicator(&self) -> NavIndicator {
        self.indicator
    }

    /// Switches to `target`. Returns `true` when the Database panel was
    /// entered, which always warrants a fresh record load, even when it was
    /// already showing.
    pub fn navigate(&mut self, target: Panel) -> bool {
        self.visible = target;
        self.active_link = target;
        self.update_indicator();
        target == Panel::Database
    }

    fn update_indicator(&mut self) {
        let labels: Vec<&str> = Panel::iter().map(|p| p.label()).collect();
        self.indicator = NavIndicator::measure(&labels, self.active_link.index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_on_scan() {
        let navigator = Navigator::new();
        assert_eq!(navigator.active(), Panel::Scan);
        assert!(navigator.is_link_active(Panel::Scan));
        assert_eq!(navigator.indicator(), NavIndicator { offset: 0, width: 9 });
    }

    #[test]
    fn only_database_entry_requests_a_load() {
        let mut navigator = Navigator::new();
        assert!(!navigator.navigate(Panel::About));
        assert!(navigator.navigate(Panel::Database));
        assert!(navigator.navigate(Panel::Database));
        assert!(!navigator.navigate(Panel::Scan));
    }

    #[test]
    fn indicator_follows_the_active_link() {
        let mut navigator = Navigator::new();
        navigator.navigate(Panel::Database);
        // "F1 Scan" (7) + 2 padding + 1 divider
        assert_eq!(navigator.indicator(), NavIndicator { offset: 10, width: 13 });

        navigator.navigate(Panel::About);
        assert_eq!(navigator.indicator(), NavIndicator { offset: 24, width: 10 });
    }

    proptest! {
        #[test]
        fn exactly_one_panel_visible_and_linked(steps in proptest::collection::vec(0usize..3, 0..32)) {
            let mut navigator = Navigator::new();
            for step in steps {
                let target = Panel::iter().nth(step).unwrap();
                navigator.navigate(target);

                let visible: Vec<Panel> = Panel::iter().filter(|p| navigator.is_visible(*p)).collect();
                let linked: Vec<Panel> = Panel::iter().filter(|p| navigator.is_link_active(*p)).collect();
                prop_assert_eq!(&visible, &vec![target]);
                prop_assert_eq!(&linked, &vec![target]);
            }
        }
    }
}
