//! Keyboard shortcut dispatch.

/// Actions reachable from single-key shortcuts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// `s` - save the current render as SVG.
    Save,
    /// `n` - new seed and redraw.
    NewSeed,
    /// `h` - navigate home.
    Home,
}

impl Action {
    pub fn for_key(key: char) -> Option<Action> {
        match key {
            's' => Some(Action::Save),
            'n' => Some(Action::NewSeed),
            'h' => Some(Action::Home),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_map() {
        assert_eq!(Action::for_key('s'), Some(Action::Save));
        assert_eq!(Action::for_key('n'), Some(Action::NewSeed));
        assert_eq!(Action::for_key('h'), Some(Action::Home));
    }

    #[test]
    fn other_keys_do_nothing() {
        assert_eq!(Action::for_key('x'), None);
        assert_eq!(Action::for_key('S'), None);
    }
}
