use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, error, info, warn};
use serde::Serialize;

use super::{EngineError, Phase};

/// Constructor options handed to the smooth-scroll engine as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothScrollOptions {
    pub duration: f64,
    pub orientation: &'static str,
    pub gesture_orientation: &'static str,
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    pub infinite: bool,
    pub auto_resize: bool,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            orientation: "vertical",
            gesture_orientation: "vertical",
            smooth_wheel: true,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            infinite: false,
            auto_resize: true,
        }
    }
}

pub trait SmoothScrollEngine {
    /// Advances the engine to the frame timestamp `time` (ms).
    fn raf(&mut self, time: f64);
    fn destroy(&mut self) -> Result<(), EngineError>;
}

/// Host services the controller is built on. The handles returned by
/// `defer` and `next_frame` cancel their callback when dropped.
pub trait ScrollPlatform {
    type Engine: SmoothScrollEngine;
    type Timer;
    type Frame;

    fn create_engine(&self, options: &SmoothScrollOptions) -> Result<Self::Engine, EngineError>;
    fn defer(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
    fn next_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Frame;
}

enum State<P: ScrollPlatform> {
    Uninitialized,
    Initializing { _timer: P::Timer },
    Running { engine: P::Engine, frame: Option<P::Frame> },
    TornDown,
}

/// Drives one smooth-scroll engine: deferred creation, a per-frame update
/// loop, and a teardown that never fails.
pub struct SmoothScroll<P: ScrollPlatform> {
    platform: P,
    options: SmoothScrollOptions,
    state: RefCell<State<P>>,
    this: Weak<Self>,
}

impl<P: ScrollPlatform + 'static> SmoothScroll<P> {
    pub fn new(platform: P, options: SmoothScrollOptions) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            platform,
            options,
            state: RefCell::new(State::Uninitialized),
            this: this.clone(),
        })
    }

    pub fn phase(&self) -> Phase {
        match &*self.state.borrow() {
            State::Uninitialized => Phase::Uninitialized,
            State::Initializing { .. } => Phase::Initializing,
            State::Running { .. } => Phase::Running,
            State::TornDown => Phase::TornDown,
        }
    }

    /// Schedules engine creation after `delay_ms`. Only the first call on a
    /// fresh controller has any effect.
    pub fn start(&self, delay_ms: u32) {
        let mut state = self.state.borrow_mut();
        if !matches!(*state, State::Uninitialized) {
            debug!("Smooth scroll already started, ignoring");
            return;
        }
        let this = self.this.clone();
        let timer = self.platform.defer(
            delay_ms,
            Box::new(move || {
                if let Some(this) = this.upgrade() {
                    this.attach();
                }
            }),
        );
        *state = State::Initializing { _timer: timer };
    }

    fn attach(&self) {
        let mut state = self.state.borrow_mut();
        if !matches!(*state, State::Initializing { .. }) {
            return;
        }
        match self.platform.create_engine(&self.options) {
            Ok(engine) => {
                let frame = self.schedule_frame();
                *state = State::Running {
                    engine,
                    frame: Some(frame),
                };
                info!("Smooth scroll running");
            }
            Err(e) => {
                // The page keeps native scrolling.
                error!("Smooth scroll initialization error: {}", e);
                *state = State::TornDown;
            }
        }
    }

    fn schedule_frame(&self) -> P::Frame {
        let this = self.this.clone();
        self.platform.next_frame(Box::new(move |time| {
            if let Some(this) = this.upgrade() {
                this.tick(time);
            }
        }))
    }

    fn tick(&self, time: f64) {
        let mut state = self.state.borrow_mut();
        if let State::Running { engine, frame } = &mut *state {
            engine.raf(time);
            *frame = Some(self.schedule_frame());
        }
    }

    /// Cancels any pending timer or frame and destroys the engine. Safe to
    /// call in any phase, any number of times.
    pub fn teardown(&self) {
        let previous = std::mem::replace(&mut *self.state.borrow_mut(), State::TornDown);
        match previous {
            State::Running { mut engine, frame } => {
                drop(frame);
                if let Err(e) = engine.destroy() {
                    warn!("Smooth scroll destroy error (ignored): {}", e);
                }
                info!("Smooth scroll torn down");
            }
            State::Initializing { _timer } => {
                debug!("Smooth scroll torn down before initialization");
            }
            State::Uninitialized | State::TornDown => {}
        }
    }
}

/// Holds the one controller allowed to own document scrolling. Repeated
/// `init` calls across remounts reuse it; `teardown` ends the session.
pub struct ScrollSession<P: ScrollPlatform> {
    controller: RefCell<Option<Rc<SmoothScroll<P>>>>,
}

impl<P: ScrollPlatform + 'static> ScrollSession<P> {
    pub const fn new() -> Self {
        Self {
            controller: RefCell::new(None),
        }
    }

    /// Returns true when this call created the controller.
    pub fn init(
        &self,
        make_platform: impl FnOnce() -> P,
        options: SmoothScrollOptions,
        delay_ms: u32,
    ) -> bool {
        let mut slot = self.controller.borrow_mut();
        if slot.is_some() {
            debug!("Smooth scroll session already active");
            return false;
        }
        let controller = SmoothScroll::new(make_platform(), options);
        controller.start(delay_ms);
        *slot = Some(controller);
        true
    }

    pub fn teardown(&self) {
        let controller = self.controller.borrow_mut().take();
        if let Some(controller) = controller {
            controller.teardown();
        }
    }

    pub fn current(&self) -> Option<Rc<SmoothScroll<P>>> {
        self.controller.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Scheduled<F> {
        cancelled: Rc<Cell<bool>>,
        callback: Option<F>,
    }

    struct Handle(Rc<Cell<bool>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[derive(Default)]
    struct Recorder {
        engines_created: Cell<u32>,
        destroyed: Cell<u32>,
        raf_times: RefCell<Vec<f64>>,
        timers: RefCell<Vec<Scheduled<Box<dyn FnOnce()>>>>,
        frames: RefCell<Vec<Scheduled<Box<dyn FnOnce(f64)>>>>,
        fail_create: Cell<bool>,
        fail_destroy: Cell<bool>,
    }

    impl Recorder {
        fn fire_timers(&self) {
            let due: Vec<_> = self.timers.borrow_mut().drain(..).collect();
            for mut timer in due {
                if !timer.cancelled.get() {
                    if let Some(callback) = timer.callback.take() {
                        callback();
                    }
                }
            }
        }

        fn take_frames(&self) -> Vec<Box<dyn FnOnce(f64)>> {
            let due: Vec<_> = self.frames.borrow_mut().drain(..).collect();
            due.into_iter()
                .filter(|f| !f.cancelled.get())
                .filter_map(|mut f| f.callback.take())
                .collect()
        }

        fn fire_frames(&self, time: f64) {
            for callback in self.take_frames() {
                callback(time);
            }
        }

        fn pending_frames(&self) -> usize {
            self.frames.borrow().iter().filter(|f| !f.cancelled.get()).count()
        }
    }

    struct FakeEngine(Rc<Recorder>);

    impl SmoothScrollEngine for FakeEngine {
        fn raf(&mut self, time: f64) {
            self.0.raf_times.borrow_mut().push(time);
        }

        fn destroy(&mut self) -> Result<(), EngineError> {
            self.0.destroyed.set(self.0.destroyed.get() + 1);
            if self.0.fail_destroy.get() {
                return Err(EngineError("node already removed".to_string()));
            }
            Ok(())
        }
    }

    struct FakePlatform(Rc<Recorder>);

    impl ScrollPlatform for FakePlatform {
        type Engine = FakeEngine;
        type Timer = Handle;
        type Frame = Handle;

        fn create_engine(&self, _options: &SmoothScrollOptions) -> Result<FakeEngine, EngineError> {
            if self.0.fail_create.get() {
                return Err(EngineError("no scroll container".to_string()));
            }
            self.0.engines_created.set(self.0.engines_created.get() + 1);
            Ok(FakeEngine(self.0.clone()))
        }

        fn defer(&self, _delay_ms: u32, callback: Box<dyn FnOnce()>) -> Handle {
            let cancelled = Rc::new(Cell::new(false));
            self.0.timers.borrow_mut().push(Scheduled {
                cancelled: cancelled.clone(),
                callback: Some(callback),
            });
            Handle(cancelled)
        }

        fn next_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Handle {
            let cancelled = Rc::new(Cell::new(false));
            self.0.frames.borrow_mut().push(Scheduled {
                cancelled: cancelled.clone(),
                callback: Some(callback),
            });
            Handle(cancelled)
        }
    }

    fn session() -> (ScrollSession<FakePlatform>, Rc<Recorder>) {
        (ScrollSession::new(), Rc::new(Recorder::default()))
    }

    fn init(session: &ScrollSession<FakePlatform>, recorder: &Rc<Recorder>) -> bool {
        let recorder = recorder.clone();
        session.init(move || FakePlatform(recorder), SmoothScrollOptions::default(), 100)
    }

    #[test]
    fn test_double_init_creates_one_engine() {
        let (session, recorder) = session();
        assert!(init(&session, &recorder));
        assert!(!init(&session, &recorder));
        assert_eq!(recorder.timers.borrow().len(), 1);

        recorder.fire_timers();
        assert_eq!(recorder.engines_created.get(), 1);
        assert_eq!(recorder.pending_frames(), 1);
    }

    #[test]
    fn test_engine_creation_is_deferred() {
        let (session, recorder) = session();
        init(&session, &recorder);
        let controller = session.current().unwrap();
        assert_eq!(controller.phase(), Phase::Initializing);
        assert_eq!(recorder.engines_created.get(), 0);

        recorder.fire_timers();
        assert_eq!(controller.phase(), Phase::Running);
    }

    #[test]
    fn test_frame_loop_reschedules_itself() {
        let (session, recorder) = session();
        init(&session, &recorder);
        recorder.fire_timers();

        recorder.fire_frames(16.0);
        recorder.fire_frames(32.0);
        assert_eq!(*recorder.raf_times.borrow(), vec![16.0, 32.0]);
        assert_eq!(recorder.pending_frames(), 1);
    }

    #[test]
    fn test_teardown_stops_frame_loop() {
        let (session, recorder) = session();
        init(&session, &recorder);
        recorder.fire_timers();
        recorder.fire_frames(16.0);

        session.teardown();
        assert_eq!(recorder.pending_frames(), 0);
        assert_eq!(recorder.destroyed.get(), 1);
        recorder.fire_frames(32.0);
        assert_eq!(*recorder.raf_times.borrow(), vec![16.0]);
    }

    #[test]
    fn test_frame_racing_teardown_is_ignored() {
        let (session, recorder) = session();
        init(&session, &recorder);
        recorder.fire_timers();
        let controller = session.current().unwrap();

        let in_flight = recorder.take_frames();
        controller.teardown();
        for callback in in_flight {
            callback(48.0);
        }
        assert!(recorder.raf_times.borrow().is_empty());
        assert_eq!(recorder.pending_frames(), 0);
    }

    #[test]
    fn test_teardown_without_init_and_twice() {
        let (session, recorder) = session();
        session.teardown();

        init(&session, &recorder);
        recorder.fire_timers();
        session.teardown();
        session.teardown();
        assert_eq!(recorder.destroyed.get(), 1);
    }

    #[test]
    fn test_teardown_cancels_pending_init() {
        let (session, recorder) = session();
        init(&session, &recorder);
        let controller = session.current().unwrap();
        session.teardown();

        recorder.fire_timers();
        assert_eq!(recorder.engines_created.get(), 0);
        assert_eq!(controller.phase(), Phase::TornDown);
    }

    #[test]
    fn test_destroy_failure_is_swallowed() {
        let (session, recorder) = session();
        recorder.fail_destroy.set(true);
        init(&session, &recorder);
        recorder.fire_timers();
        let controller = session.current().unwrap();

        session.teardown();
        assert_eq!(controller.phase(), Phase::TornDown);
        assert_eq!(recorder.pending_frames(), 0);
    }

    #[test]
    fn test_creation_failure_degrades_to_native_scroll() {
        let (session, recorder) = session();
        recorder.fail_create.set(true);
        init(&session, &recorder);
        recorder.fire_timers();

        let controller = session.current().unwrap();
        assert_eq!(controller.phase(), Phase::TornDown);
        assert_eq!(recorder.pending_frames(), 0);
        session.teardown();
        assert_eq!(recorder.destroyed.get(), 0);
    }

    #[test]
    fn test_new_session_after_teardown() {
        let (session, recorder) = session();
        init(&session, &recorder);
        recorder.fire_timers();
        session.teardown();

        assert!(init(&session, &recorder));
        recorder.fire_timers();
        assert_eq!(recorder.engines_created.get(), 2);
        assert_eq!(recorder.pending_frames(), 1);
    }
}
