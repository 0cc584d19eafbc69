//! Scroll-driven navigation state: active section, sticky header, mobile menu.

/// Vertical extent of a page section in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Section the visitor is reading. The look-ahead `offset` highlights a
/// section slightly before its top reaches the viewport edge; on overlap the
/// later section wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - offset;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

pub fn nav_href(section_id: &str) -> String {
    format!("#{}", section_id)
}

/// Section id an in-page link points at; `None` for bare "#" and external links
pub fn section_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn header_is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Page offset that lands `element_top` (viewport-relative) just below the fixed header
pub fn scroll_target(element_top: f64, page_y: f64, header_offset: f64) -> f64 {
    element_top + page_y - header_offset
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Document click; clicks on the toggle or inside the menu are left to them
    pub fn document_click(&mut self, inside_toggle: bool, inside_menu: bool) {
        if !inside_toggle && !inside_menu {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0, 600.0), ("menu", 600.0, 1200.0), ("gallery", 1800.0, 800.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds { id: id.to_string(), top, height })
            .collect()
    }

    #[test]
    fn test_active_section_uses_offset() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 499.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0, 100.0), Some("menu"));
        assert_eq!(active_section(&sections, 1750.0, 100.0), Some("gallery"));
        assert_eq!(active_section(&sections, 5000.0, 100.0), None);
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert!(!header_is_scrolled(100.0, 100.0));
        assert!(header_is_scrolled(100.5, 100.0));
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(301.0, 300.0));
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(400.0, 1000.0, 70.0), 1330.0);
        assert_eq!(nav_href("about"), "#about");
    }

    #[test]
    fn test_section_from_href() {
        assert_eq!(section_from_href("#reservation"), Some("reservation"));
        assert_eq!(section_from_href(&nav_href("home")), Some("home"));
        assert_eq!(section_from_href("#"), None);
        assert_eq!(section_from_href("https://zestha.example/menu"), None);
    }

    #[test]
    fn test_mobile_menu_outside_click_closes() {
        let mut menu = MobileMenu::default();
        assert!(menu.toggle());
        menu.document_click(false, true);
        assert!(menu.is_open());
        menu.document_click(false, false);
        assert!(!menu.is_open());
    }
}
