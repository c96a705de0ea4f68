use std::rc::Rc;

use log::{debug, warn};
use web_sys::{window, Element};

/// Element id of the shared mount point for full-screen overlays.
pub const PORTAL_ID: &str = "mobile-menu-portal";

/// Suppresses and restores scrolling of the document underneath an overlay.
pub trait ScrollLock {
    fn suppress(&self);
    fn release(&self);
}

/// Holds the scroll lock for as long as it lives.
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: Rc<L>,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: Rc<L>) -> Self {
        lock.suppress();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    LinkSelected,
    RouteChanged,
    Unmounted,
}

/// Open/closed state of the mobile navigation overlay. The document scroll
/// lock is held exactly while the overlay is open, and dropping the overlay
/// releases it.
pub struct NavOverlay<L: ScrollLock> {
    lock: Rc<L>,
    guard: Option<ScrollLockGuard<L>>,
    route: Option<String>,
}

impl<L: ScrollLock> NavOverlay<L> {
    pub fn new(lock: Rc<L>) -> Self {
        Self {
            lock,
            guard: None,
            route: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    pub fn open(&mut self) {
        if self.guard.is_none() {
            self.guard = Some(ScrollLockGuard::acquire(self.lock.clone()));
        }
    }

    /// Returns whether the overlay was open.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        match self.guard.take() {
            Some(guard) => {
                drop(guard);
                debug!("Navigation overlay closed: {:?}", reason);
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close(CloseReason::CloseButton);
        } else {
            self.open();
        }
    }

    /// Records the current path; a change while open closes the overlay.
    /// Returns whether it closed.
    pub fn on_route(&mut self, path: &str) -> bool {
        let changed = self.route.as_deref() != Some(path);
        if changed {
            self.route = Some(path.to_string());
        }
        changed && self.close(CloseReason::RouteChanged)
    }
}

/// Locks scrolling by toggling `overflow` on `<body>`.
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: Option<&str>) {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = match value {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        };
        if let Err(e) = result {
            warn!("Failed to update body overflow: {:?}", e);
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn suppress(&self) {
        Self::set_overflow(Some("hidden"));
    }

    fn release(&self) {
        Self::set_overflow(None);
    }
}

/// The shared overlay mount point, created under `<body>` on first use and
/// reused afterwards. It is never removed. Returns None without a live
/// document.
pub fn portal_host() -> Option<Element> {
    let document = window()?.document()?;
    if let Some(existing) = document.get_element_by_id(PORTAL_ID) {
        return Some(existing);
    }
    let host = document.create_element("div").ok()?;
    host.set_id(PORTAL_ID);
    document.body()?.append_child(&host).ok()?;
    debug!("Created overlay portal host");
    Some(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeLock {
        suppressed: Cell<bool>,
        suppress_calls: Cell<u32>,
    }

    impl ScrollLock for FakeLock {
        fn suppress(&self) {
            self.suppressed.set(true);
            self.suppress_calls.set(self.suppress_calls.get() + 1);
        }

        fn release(&self) {
            self.suppressed.set(false);
        }
    }

    fn overlay() -> (NavOverlay<FakeLock>, Rc<FakeLock>) {
        let lock = Rc::new(FakeLock::default());
        let mut overlay = NavOverlay::new(lock.clone());
        overlay.on_route("/");
        (overlay, lock)
    }

    #[test]
    fn test_open_suppresses_scroll() {
        let (mut overlay, lock) = overlay();
        overlay.open();
        overlay.open();
        assert!(overlay.is_open());
        assert!(lock.suppressed.get());
        assert_eq!(lock.suppress_calls.get(), 1);
    }

    #[test]
    fn test_close_button_restores_scroll() {
        let (mut overlay, lock) = overlay();
        overlay.toggle();
        assert!(lock.suppressed.get());
        overlay.toggle();
        assert!(!overlay.is_open());
        assert!(!lock.suppressed.get());
    }

    #[test]
    fn test_link_selection_restores_scroll() {
        let (mut overlay, lock) = overlay();
        overlay.open();
        assert!(overlay.close(CloseReason::LinkSelected));
        assert!(!lock.suppressed.get());
        assert!(!overlay.close(CloseReason::LinkSelected));
    }

    #[test]
    fn test_route_change_restores_scroll() {
        let (mut overlay, lock) = overlay();
        overlay.open();
        assert!(!overlay.on_route("/"));
        assert!(overlay.is_open());

        assert!(overlay.on_route("/work"));
        assert!(!overlay.is_open());
        assert!(!lock.suppressed.get());
    }

    #[test]
    fn test_route_change_while_closed_is_quiet() {
        let (mut overlay, lock) = overlay();
        assert!(!overlay.on_route("/about"));
        assert_eq!(lock.suppress_calls.get(), 0);
    }

    #[test]
    fn test_unmount_while_open_releases_lock() {
        let (mut overlay, lock) = overlay();
        overlay.open();
        drop(overlay);
        assert!(!lock.suppressed.get());
    }
}
