pub const DEFAULT_MENU_BREAKPOINT: f64 = 769.0;

/// Open/closed state of the hamburger menu.
///
/// The menu is only reachable below `breakpoint`; widening the viewport past it closes the menu
/// so it cannot stay open behind the desktop navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobileMenu {
    breakpoint: f64,
    open: bool,
}

impl MobileMenu {
    pub fn new(breakpoint: f64) -> Self {
        Self {
            breakpoint,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns `true` when the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Returns `true` when the width change closed the menu.
    pub fn on_viewport_width(&mut self, width: f64) -> bool {
        if width >= self.breakpoint {
            self.close()
        } else {
            false
        }
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_BREAKPOINT)
    }
}
