use log::{debug, error};

use super::{EngineError, Phase};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// How far the track travels sideways and how long (in scroll pixels) the
/// container stays pinned while it does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinGeometry {
    pub distance: f64,
    pub pin_length: f64,
}

impl PinGeometry {
    pub fn measure(content_width: f64, viewport: Viewport) -> Self {
        let distance = (content_width - viewport.width).max(0.0);
        Self {
            distance,
            pin_length: distance + viewport.height,
        }
    }
}

/// The scroll-synchronised timeline service behind the showcase.
pub trait TimelineEngine {
    type Trigger;

    fn content_width(&self) -> f64;
    fn viewport(&self) -> Viewport;
    fn pin_horizontal(&mut self, geometry: PinGeometry) -> Result<Self::Trigger, EngineError>;
    fn kill(&mut self, trigger: Self::Trigger);
    fn refresh(&mut self);
    fn kill_all(&mut self);
    /// Undoes every style or DOM change the engine made.
    fn revert(&mut self);
}

/// Pins a container while its track scrolls horizontally. One instance per
/// mount of the featured-work section.
pub struct HorizontalShowcase<E: TimelineEngine> {
    engine: E,
    trigger: Option<E::Trigger>,
    geometry: Option<PinGeometry>,
    phase: Phase,
}

impl<E: TimelineEngine> HorizontalShowcase<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            trigger: None,
            geometry: None,
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn geometry(&self) -> Option<PinGeometry> {
        self.geometry
    }

    pub fn mount(&mut self) {
        if self.phase != Phase::Uninitialized {
            return;
        }
        self.phase = Phase::Initializing;
        match self.pin() {
            Ok(()) => self.phase = Phase::Running,
            Err(e) => {
                error!("Showcase timeline initialization error: {}", e);
                self.engine.revert();
                self.phase = Phase::TornDown;
            }
        }
    }

    /// Re-measures after a viewport change and replaces the trigger so the
    /// pinned range matches the new layout. The old tween's inline offset is
    /// reverted first so the new one starts from the first panel.
    pub fn on_resize(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        if let Some(old) = self.trigger.take() {
            self.engine.kill(old);
        }
        self.engine.revert();
        if let Err(e) = self.pin() {
            error!("Showcase timeline resize error: {}", e);
        }
        self.engine.refresh();
    }

    /// Kills every registered trigger, then reverts the engine's DOM
    /// changes. Further calls do nothing.
    pub fn teardown(&mut self) {
        match self.phase {
            Phase::TornDown => return,
            Phase::Running => {
                // kill_all covers our own trigger too
                self.trigger = None;
                self.engine.kill_all();
                self.engine.revert();
            }
            Phase::Uninitialized | Phase::Initializing => {}
        }
        debug!("Showcase timeline torn down");
        self.phase = Phase::TornDown;
    }

    fn pin(&mut self) -> Result<(), EngineError> {
        let geometry = PinGeometry::measure(self.engine.content_width(), self.engine.viewport());
        self.geometry = Some(geometry);
        self.trigger = Some(self.engine.pin_horizontal(geometry)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls(RefCell<Vec<String>>);

    impl Calls {
        fn push(&self, call: impl Into<String>) {
            self.0.borrow_mut().push(call.into());
        }

        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    struct RecordingEngine {
        calls: Rc<Calls>,
        content_width: f64,
        viewport: Viewport,
        next_trigger: u32,
        fail_pin: bool,
    }

    impl TimelineEngine for RecordingEngine {
        type Trigger = u32;

        fn content_width(&self) -> f64 {
            self.content_width
        }

        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn pin_horizontal(&mut self, geometry: PinGeometry) -> Result<u32, EngineError> {
            if self.fail_pin {
                return Err(EngineError("ScrollTrigger is not defined".to_string()));
            }
            self.next_trigger += 1;
            self.calls.push(format!(
                "pin {} {} -> {}",
                geometry.distance, geometry.pin_length, self.next_trigger
            ));
            Ok(self.next_trigger)
        }

        fn kill(&mut self, trigger: u32) {
            self.calls.push(format!("kill {}", trigger));
        }

        fn refresh(&mut self) {
            self.calls.push("refresh");
        }

        fn kill_all(&mut self) {
            self.calls.push("kill_all");
        }

        fn revert(&mut self) {
            self.calls.push("revert");
        }
    }

    fn showcase(content_width: f64, width: f64, height: f64) -> (HorizontalShowcase<RecordingEngine>, Rc<Calls>) {
        let calls = Rc::new(Calls::default());
        let engine = RecordingEngine {
            calls: calls.clone(),
            content_width,
            viewport: Viewport { width, height },
            next_trigger: 0,
            fail_pin: false,
        };
        (HorizontalShowcase::new(engine), calls)
    }

    #[test]
    fn test_pin_geometry() {
        let geometry = PinGeometry::measure(4000.0, Viewport { width: 1000.0, height: 800.0 });
        assert_eq!(geometry.distance, 3000.0);
        assert_eq!(geometry.pin_length, 3800.0);
    }

    #[test]
    fn test_narrow_content_does_not_travel() {
        let geometry = PinGeometry::measure(600.0, Viewport { width: 1000.0, height: 800.0 });
        assert_eq!(geometry.distance, 0.0);
        assert_eq!(geometry.pin_length, 800.0);
    }

    #[test]
    fn test_mount_pins_once() {
        let (mut showcase, calls) = showcase(4000.0, 1000.0, 800.0);
        showcase.mount();
        showcase.mount();
        assert_eq!(showcase.phase(), Phase::Running);
        assert_eq!(calls.take(), vec!["pin 3000 3800 -> 1"]);
    }

    #[test]
    fn test_resize_replaces_trigger_and_refreshes() {
        let (mut showcase, calls) = showcase(4000.0, 1000.0, 800.0);
        showcase.mount();
        calls.take();

        showcase.engine.viewport = Viewport { width: 1500.0, height: 900.0 };
        showcase.on_resize();
        assert_eq!(calls.take(), vec!["kill 1", "revert", "pin 2500 3400 -> 2", "refresh"]);
        assert_eq!(
            showcase.geometry(),
            Some(PinGeometry { distance: 2500.0, pin_length: 3400.0 })
        );
    }

    #[test]
    fn test_teardown_kills_then_reverts() {
        let (mut showcase, calls) = showcase(4000.0, 1000.0, 800.0);
        showcase.mount();
        calls.take();

        showcase.teardown();
        showcase.teardown();
        assert_eq!(calls.take(), vec!["kill_all", "revert"]);
        assert_eq!(showcase.phase(), Phase::TornDown);
    }

    #[test]
    fn test_resize_after_teardown_is_ignored() {
        let (mut showcase, calls) = showcase(4000.0, 1000.0, 800.0);
        showcase.mount();
        showcase.teardown();
        calls.take();

        showcase.on_resize();
        assert!(calls.take().is_empty());
    }

    #[test]
    fn test_pin_failure_degrades() {
        let (mut showcase, calls) = showcase(4000.0, 1000.0, 800.0);
        showcase.engine.fail_pin = true;
        showcase.mount();
        assert_eq!(showcase.phase(), Phase::TornDown);
        assert_eq!(calls.take(), vec!["revert"]);

        showcase.teardown();
        assert!(calls.take().is_empty());
    }

    #[test]
    fn test_teardown_before_mount() {
        let (mut showcase, calls) = showcase(4000.0, 1000.0, 800.0);
        showcase.teardown();
        showcase.mount();
        assert!(calls.take().is_empty());
    }
}
