/// Open/closed state of the mobile navigation menu.
///
/// The DOM class and the `aria-expanded` attribute are both derived from this
/// value, so they cannot disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[inline]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Document-level click. Closes the menu unless the click landed inside the
    /// menu or on the toggle. Returns true when the caller should re-sync the
    /// DOM (any click outside both, even with the menu already closed).
    pub fn close_on_outside_click(&mut self, inside_menu: bool, inside_toggle: bool) -> bool {
        if inside_menu || inside_toggle {
            return false;
        }
        self.open = false;
        true
    }

    #[inline]
    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}
