//! Fixed site-wide values. There is no backend and no environment to read
//! from, so everything lives here as compile-time constants.

/// The one external contact endpoint. Every call-to-action on the page
/// opens this LINE talk link.
pub const LINE_CONTACT_URL: &str = "https://line.me/R/ti/p/@solar-meigi";

/// Header switches from the transparent to the opaque treatment once the
/// page is scrolled past this offset.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Blocks reveal slightly before they are fully on-screen: the viewport is
/// inset by this margin when checking for entry.
pub const REVEAL_MARGIN_PX: i32 = 50;

/// Duration and easing of the entrance transition.
pub const REVEAL_DURATION_MS: u32 = 800;
pub const REVEAL_EASING: &str = "cubic-bezier(0.21, 0.47, 0.32, 0.98)";

/// Poll cadence for hosts without IntersectionObserver support.
pub const REVEAL_POLL_INTERVAL_MS: u32 = 200;
