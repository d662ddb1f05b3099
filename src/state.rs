//! The page's ephemeral UI state: two flags and a latch, kept as plain
//! tagged values with pure transitions so the components stay thin.

use crate::config::SCROLL_THRESHOLD_PX;

/// Mobile navigation overlay. Starts `Closed`; opened by the menu trigger,
/// closed by the close button or by selecting any navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn open(self) -> Self {
        Self::Open
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// One-shot viewport-entry latch. `trigger` is monotonic: once `Revealed`,
/// a block never goes back to `Hidden`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    pub fn trigger(self) -> Self {
        Self::Revealed
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Whether the header should use its opaque treatment. Pure function of the
/// current scroll offset, non-latching.
pub fn is_scrolled(offset_px: f64) -> bool {
    offset_px > SCROLL_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn menu_opens_and_closes() {
        let menu = MenuState::default().open();
        assert!(menu.is_open());
        assert!(!menu.close().is_open());
    }

    #[test]
    fn opening_twice_stays_open() {
        let menu = MenuState::default().open().open();
        assert_eq!(menu, MenuState::Open);
    }

    #[test]
    fn closing_is_idempotent() {
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
        assert_eq!(MenuState::Open.close().close(), MenuState::Closed);
    }

    #[test]
    fn scroll_flag_matches_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLL_THRESHOLD_PX));
        assert!(is_scrolled(SCROLL_THRESHOLD_PX + 0.1));
        assert!(is_scrolled(25.0));
    }

    #[test]
    fn scroll_flag_is_reversible() {
        // Unlike the reveal latch the header flag follows the offset both ways.
        assert!(is_scrolled(25.0));
        assert!(!is_scrolled(0.0));
    }

    #[test]
    fn reveal_latch_is_monotonic() {
        let reveal = Reveal::default();
        assert!(!reveal.is_revealed());
        let reveal = reveal.trigger();
        assert!(reveal.is_revealed());
        // Re-triggering never reverts.
        assert!(reveal.trigger().is_revealed());
    }
}
