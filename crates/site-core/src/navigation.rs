//! Smooth-Scroll Navigator and keyboard section navigation.
//!
//! Page geometry comes from a `SectionLayout`; the browser implementation
//! lives in `leptos-reveal`.

/// Height of the fixed header; scroll targets land this far above a section
pub const HEADER_OFFSET: f64 = 80.0;
/// Viewport line used to decide which section is current
pub const SECTION_PROBE_Y: f64 = 100.0;
/// Scroll distance after which the header sticks to the top
pub const STICKY_SCROLL_Y: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Services,
    Portfolio,
    News,
    Contact,
}

impl Section {
    /// Page order
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::News,
        Section::Contact,
    ];

    /// Anchor element id
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::News => "news",
            Section::Contact => "contact",
        }
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Portfolio => "Portfolio",
            Section::News => "News",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Following section, wrapping to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding section, wrapping to the last
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Keys that move between sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
}

impl NavKey {
    /// Maps a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(NavKey::Up),
            "ArrowDown" => Some(NavKey::Down),
            _ => None,
        }
    }

    pub fn step(self, from: Section) -> Section {
        match self {
            NavKey::Up => from.previous(),
            NavKey::Down => from.next(),
        }
    }
}

/// Page geometry and scrolling
pub trait SectionLayout {
    /// Document offset of the section's top edge, `None` when not rendered
    fn offset_top(&self, section: Section) -> Option<f64>;

    /// Top and bottom edges relative to the viewport
    fn viewport_bounds(&self, section: Section) -> Option<(f64, f64)>;

    /// Request an animated scroll; completion is not reported
    fn scroll_to(&self, y: f64);
}

pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET
}

/// Scroll so the section clears the header. Returns false, doing nothing,
/// when the section is not on the page.
pub fn scroll_to_section<L: SectionLayout + ?Sized>(layout: &L, section: Section) -> bool {
    match layout.offset_top(section) {
        Some(top) => {
            layout.scroll_to(scroll_target(top));
            true
        }
        None => false,
    }
}

/// Section spanning the probe line
pub fn current_section<L: SectionLayout + ?Sized>(layout: &L) -> Option<Section> {
    Section::ALL.into_iter().find(|section| {
        layout
            .viewport_bounds(*section)
            .is_some_and(|(top, bottom)| top <= SECTION_PROBE_Y && bottom >= SECTION_PROBE_Y)
    })
}

/// Handle a navigation key: returns the section scrolled to, if any
pub fn navigate_by_key<L: SectionLayout + ?Sized>(layout: &L, key: NavKey) -> Option<Section> {
    let target = key.step(current_section(layout)?);
    scroll_to_section(layout, target).then_some(target)
}

/// Header view-state, owned by the header component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub menu_open: bool,
    pub sticky: bool,
}

impl HeaderState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.sticky = scroll_y > STICKY_SCROLL_Y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Sections stacked 600px apart; the viewport starts at `scroll_y`
    struct FakePage {
        rendered: Vec<Section>,
        scroll_y: f64,
        scrolls: RefCell<Vec<f64>>,
    }

    impl FakePage {
        fn at(scroll_y: f64) -> Self {
            Self { rendered: Section::ALL.to_vec(), scroll_y, scrolls: RefCell::new(Vec::new()) }
        }
    }

    impl SectionLayout for FakePage {
        fn offset_top(&self, section: Section) -> Option<f64> {
            self.rendered.contains(&section).then(|| section.index() as f64 * 600.0)
        }

        fn viewport_bounds(&self, section: Section) -> Option<(f64, f64)> {
            let top = self.offset_top(section)? - self.scroll_y;
            Some((top, top + 600.0))
        }

        fn scroll_to(&self, y: f64) {
            self.scrolls.borrow_mut().push(y);
        }
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(Section::Services.next(), Section::Portfolio);
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.previous(), Section::Contact);
        assert_eq!(Section::from_id("news"), Some(Section::News));
        assert_eq!(Section::from_id("blog"), None);
    }

    #[test]
    fn test_scroll_subtracts_header_offset() {
        let page = FakePage::at(0.0);
        assert!(scroll_to_section(&page, Section::Portfolio));
        assert_eq!(page.scrolls.borrow().as_slice(), &[1800.0 - HEADER_OFFSET]);
    }

    #[test]
    fn test_missing_section_is_a_no_op() {
        let mut page = FakePage::at(0.0);
        page.rendered.retain(|s| *s != Section::News);
        assert!(!scroll_to_section(&page, Section::News));
        assert!(page.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_arrow_down_from_services() {
        let page = FakePage::at(1250.0);
        assert_eq!(current_section(&page), Some(Section::Services));
        assert_eq!(navigate_by_key(&page, NavKey::Down), Some(Section::Portfolio));
    }

    #[test]
    fn test_arrow_down_from_contact_wraps_to_hero() {
        let page = FakePage::at(3000.0);
        assert_eq!(navigate_by_key(&page, NavKey::Down), Some(Section::Hero));
        assert_eq!(page.scrolls.borrow().as_slice(), &[-HEADER_OFFSET]);
    }

    #[test]
    fn test_arrow_up_from_hero_wraps_to_contact() {
        let page = FakePage::at(0.0);
        assert_eq!(navigate_by_key(&page, NavKey::Up), Some(Section::Contact));
    }

    #[test]
    fn test_no_current_section_ignores_key() {
        let page = FakePage::at(-500.0);
        assert_eq!(navigate_by_key(&page, NavKey::Down), None);
        assert!(page.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_header_state() {
        let mut header = HeaderState::default();
        header.on_scroll(100.0);
        assert!(!header.sticky);
        header.on_scroll(101.0);
        assert!(header.sticky);
        header.toggle_menu();
        assert!(header.menu_open);
        header.close_menu();
        assert!(!header.menu_open);
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Down));
        assert_eq!(NavKey::from_key("Tab"), None);
    }
}
