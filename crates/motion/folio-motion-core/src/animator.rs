//! Animator: owns sinks and their active runs, and drives them frame by frame.
//!
//! Methods:
//! - new, register_sink, start (supersedes), cancel, drain_events
//!
//! Each started run schedules one frame callback. The callback steps the run,
//! writes the sink and re-schedules itself until the run is done. Callbacks
//! carry the RunId they were created for; if the sink's active run has
//! changed since, the callback stops without writing.
//!
//! Sink writes happen after the animator state is released, so a sink may call
//! back into the animator (drain events, cancel, start another run).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use hashbrown::HashMap;

use crate::config::MotionConfig;
use crate::error::MotionError;
use crate::ids::{IdAllocator, RunId, SinkId};
use crate::outputs::MotionEvent;
use crate::run::InterpolationRun;
use crate::scheduler::{FrameCallback, FrameScheduler};
use crate::sink::{Sink, SinkKind, SinkValue};

type SharedSink = Rc<RefCell<Box<dyn Sink>>>;

/// Result of stepping one run inside the state borrow.
struct Advance {
    write: Option<(SharedSink, SinkValue)>,
    again: bool,
}

impl Advance {
    const STOP: Advance = Advance {
        write: None,
        again: false,
    };
}

struct SinkSlot {
    /// Fixed at registration so the sink itself is only borrowed to write.
    kind: SinkKind,
    sink: SharedSink,
    active: Option<(RunId, InterpolationRun)>,
    last: Option<SinkValue>,
}

struct AnimatorState {
    cfg: MotionConfig,
    ids: IdAllocator,
    slots: HashMap<SinkId, SinkSlot>,
    events: VecDeque<MotionEvent>,
}

fn push_event(events: &mut VecDeque<MotionEvent>, max: usize, ev: MotionEvent) {
    if max == 0 {
        return;
    }
    while events.len() >= max {
        events.pop_front();
    }
    events.push_back(ev);
}

impl AnimatorState {
    /// Step one run. The sink write is handed back to the caller.
    fn advance(&mut self, sink: SinkId, run_id: RunId, now: f64) -> Advance {
        let AnimatorState {
            cfg, slots, events, ..
        } = self;
        let Some(slot) = slots.get_mut(&sink) else {
            return Advance::STOP;
        };
        let Some((active_id, run)) = slot.active.as_mut() else {
            return Advance::STOP;
        };
        if *active_id != run_id {
            log::trace!("frame for stale run {run_id:?} on {sink:?} dropped");
            return Advance::STOP;
        }
        if run.is_waiting(now) {
            return Advance {
                write: None,
                again: true,
            };
        }

        let step = run.step(now);
        let value = slot.kind.value(step.value);
        log::trace!("{sink:?} {run_id:?} t={now} -> {value:?}");
        slot.last = Some(value);
        let write = Some((slot.sink.clone(), value));

        if step.done {
            slot.active = None;
            log::debug!("run {run_id:?} on {sink:?} completed at {}", step.value);
            push_event(
                events,
                cfg.max_events,
                MotionEvent::RunCompleted {
                    sink,
                    run: run_id,
                    value: step.value,
                },
            );
        }
        Advance {
            write,
            again: !step.done,
        }
    }
}

fn frame_callback(
    state: Weak<RefCell<AnimatorState>>,
    scheduler: Weak<dyn FrameScheduler>,
    sink: SinkId,
    run: RunId,
) -> FrameCallback {
    Box::new(move |now| {
        // Animator or scheduler dropped: the run simply never completes.
        let (Some(st), Some(sched)) = (state.upgrade(), scheduler.upgrade()) else {
            return;
        };
        let Advance { write, again } = st.borrow_mut().advance(sink, run, now);
        drop(st);
        if let Some((target, value)) = write {
            target.borrow_mut().write(value);
        }
        if again {
            sched.schedule(frame_callback(state, scheduler, sink, run));
        }
    })
}

/// Single-threaded run driver. Cloning shares the same state.
#[derive(Clone)]
pub struct Animator {
    state: Rc<RefCell<AnimatorState>>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.state.borrow();
        f.debug_struct("Animator")
            .field("cfg", &st.cfg)
            .field("sinks", &st.slots.len())
            .field("events", &st.events.len())
            .finish()
    }
}

impl Animator {
    /// Create an animator that asks `scheduler` for frames.
    pub fn new(cfg: MotionConfig, scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            state: Rc::new(RefCell::new(AnimatorState {
                cfg,
                ids: IdAllocator::new(),
                slots: HashMap::new(),
                events: VecDeque::new(),
            })),
            scheduler,
        }
    }

    pub fn config(&self) -> MotionConfig {
        self.state.borrow().cfg.clone()
    }

    /// Register a sink and return its id.
    pub fn register_sink(&self, sink: Box<dyn Sink>) -> SinkId {
        let mut st = self.state.borrow_mut();
        let id = st.ids.alloc_sink();
        st.slots.insert(
            id,
            SinkSlot {
                kind: sink.kind(),
                sink: Rc::new(RefCell::new(sink)),
                active: None,
                last: None,
            },
        );
        id
    }

    pub fn sink_kind(&self, sink: SinkId) -> crate::Result<SinkKind> {
        self.state
            .borrow()
            .slots
            .get(&sink)
            .map(|s| s.kind)
            .ok_or(MotionError::UnknownSink { sink })
    }

    /// Start `run` on `sink`, replacing any run still active there.
    ///
    /// The run's rounding follows the sink kind. The first step happens on the
    /// next scheduled frame.
    pub fn start(&self, sink: SinkId, run: InterpolationRun) -> crate::Result<RunId> {
        let run_id = {
            let mut st = self.state.borrow_mut();
            let AnimatorState {
                cfg,
                ids,
                slots,
                events,
            } = &mut *st;
            let Some(slot) = slots.get_mut(&sink) else {
                log::warn!("start on unknown sink {sink:?}");
                return Err(MotionError::UnknownSink { sink });
            };
            let run = run.with_rounding(slot.kind.rounding());
            let run_id = ids.alloc_run();

            if let Some((old, _)) = slot.active.take() {
                log::debug!("run {old:?} on {sink:?} superseded by {run_id:?}");
                push_event(
                    events,
                    cfg.max_events,
                    MotionEvent::RunSuperseded {
                        sink,
                        run: old,
                        by: run_id,
                    },
                );
            }
            log::debug!(
                "run {run_id:?} on {sink:?}: {} -> {} over {}ms (+{}ms)",
                run.start(),
                run.end(),
                run.duration_ms(),
                run.delay_ms()
            );
            push_event(
                events,
                cfg.max_events,
                MotionEvent::RunStarted {
                    sink,
                    run: run_id,
                    start: run.start(),
                    end: run.end(),
                    duration_ms: run.duration_ms(),
                    delay_ms: run.delay_ms(),
                },
            );
            slot.active = Some((run_id, run));
            run_id
        };

        self.scheduler.schedule(frame_callback(
            Rc::downgrade(&self.state),
            Rc::downgrade(&self.scheduler),
            sink,
            run_id,
        ));
        Ok(run_id)
    }

    /// Stop the active run on `sink`, leaving the last written value in place.
    /// Returns whether a run was active.
    pub fn cancel(&self, sink: SinkId) -> crate::Result<bool> {
        let mut st = self.state.borrow_mut();
        let AnimatorState {
            cfg, slots, events, ..
        } = &mut *st;
        let slot = slots
            .get_mut(&sink)
            .ok_or(MotionError::UnknownSink { sink })?;
        match slot.active.take() {
            Some((run, _)) => {
                log::debug!("run {run:?} on {sink:?} cancelled");
                push_event(events, cfg.max_events, MotionEvent::RunCancelled { sink, run });
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn is_active(&self, sink: SinkId) -> bool {
        self.state
            .borrow()
            .slots
            .get(&sink)
            .is_some_and(|s| s.active.is_some())
    }

    /// Number of sinks with a run in flight.
    pub fn active_count(&self) -> usize {
        self.state
            .borrow()
            .slots
            .values()
            .filter(|s| s.active.is_some())
            .count()
    }

    /// Last value written to `sink`, if any.
    pub fn last_value(&self, sink: SinkId) -> Option<SinkValue> {
        self.state.borrow().slots.get(&sink).and_then(|s| s.last)
    }

    /// Take all buffered events, oldest first.
    pub fn drain_events(&self) -> Vec<MotionEvent> {
        self.state.borrow_mut().events.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{ImmediateScheduler, ManualScheduler};
    use crate::sink::{NumericDisplay, ScrollPosition};

    fn setup() -> (Rc<ManualScheduler>, Animator) {
        let sched = Rc::new(ManualScheduler::new());
        let anim = Animator::new(MotionConfig::default(), sched.clone());
        (sched, anim)
    }

    #[test]
    fn counter_runs_to_goal() {
        let (sched, anim) = setup();
        let display = Rc::new(RefCell::new(NumericDisplay::new()));
        let id = anim.register_sink(Box::new(display.clone()));
        anim.start(id, InterpolationRun::counter(250, 2000.0)).unwrap();

        sched.run_frame(0.0);
        assert_eq!(display.borrow().text, "0");
        sched.run_frame(1000.0);
        assert_eq!(display.borrow().text, "218");
        sched.run_frame(2000.0);
        assert_eq!(display.borrow().text, "250");
        assert_eq!(sched.pending(), 0);
        assert!(!anim.is_active(id));
    }

    #[test]
    fn rounding_follows_sink_kind() {
        let (sched, anim) = setup();
        let display = Rc::new(RefCell::new(NumericDisplay::new()));
        let id = anim.register_sink(Box::new(display.clone()));
        // Exact rounding requested, display still floors.
        anim.start(id, InterpolationRun::new(0.0, 250.0, 2000.0)).unwrap();
        sched.run_frame(0.0);
        sched.run_frame(1000.0);
        assert_eq!(anim.last_value(id), Some(SinkValue::Integer(218)));
    }

    #[test]
    fn unknown_sink_is_error() {
        let (_sched, anim) = setup();
        let err = anim
            .start(SinkId(99), InterpolationRun::new(0.0, 1.0, 1.0))
            .unwrap_err();
        assert_eq!(err, MotionError::UnknownSink { sink: SinkId(99) });
        assert!(anim.cancel(SinkId(99)).is_err());
    }

    #[test]
    fn new_run_supersedes_old() {
        let (sched, anim) = setup();
        let scroll = Rc::new(RefCell::new(ScrollPosition::new(800.0)));
        let id = anim.register_sink(Box::new(scroll.clone()));
        let first = anim.start(id, InterpolationRun::new(800.0, 0.0, 1000.0)).unwrap();
        sched.run_frame(0.0);
        let second = anim.start(id, InterpolationRun::new(800.0, 400.0, 1000.0)).unwrap();

        // Both callbacks are pending; only the newer one writes and continues.
        assert_eq!(sched.pending(), 2);
        sched.run_frame(16.0);
        assert_eq!(sched.pending(), 1);
        let before = scroll.borrow().writes;
        sched.run_until_idle(1016.0, 16.0, 10);
        assert_eq!(scroll.borrow().offset, 400.0);
        assert!(scroll.borrow().writes > before);

        let events = anim.drain_events();
        assert!(events.contains(&MotionEvent::RunSuperseded {
            sink: id,
            run: first,
            by: second
        }));
        assert!(matches!(
            events.last(),
            Some(MotionEvent::RunCompleted { run, .. }) if *run == second
        ));
    }

    #[test]
    fn cancel_stops_writes() {
        let (sched, anim) = setup();
        let display = Rc::new(RefCell::new(NumericDisplay::new()));
        let id = anim.register_sink(Box::new(display.clone()));
        anim.start(id, InterpolationRun::counter(100, 1000.0)).unwrap();
        sched.run_frame(0.0);
        assert!(anim.cancel(id).unwrap());
        assert!(!anim.cancel(id).unwrap());
        sched.run_frame(500.0);
        assert_eq!(display.borrow().writes, 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn dropped_animator_leaves_callbacks_inert() {
        let (sched, anim) = setup();
        let display = Rc::new(RefCell::new(NumericDisplay::new()));
        let id = anim.register_sink(Box::new(display.clone()));
        anim.start(id, InterpolationRun::counter(10, 100.0)).unwrap();
        drop(anim);
        sched.run_frame(0.0);
        assert_eq!(display.borrow().writes, 0);
        assert_eq!(sched.pending(), 0);
    }

    /// Display that drains events and cancels its own run from inside `write`.
    struct SelfCancelling {
        animator: Rc<RefCell<Option<Animator>>>,
        id: Rc<RefCell<Option<SinkId>>>,
        drained: Rc<RefCell<Vec<MotionEvent>>>,
    }

    impl Sink for SelfCancelling {
        fn kind(&self) -> SinkKind {
            SinkKind::NumericDisplay
        }

        fn write(&mut self, _value: SinkValue) {
            if let (Some(anim), Some(id)) = (&*self.animator.borrow(), *self.id.borrow()) {
                self.drained.borrow_mut().extend(anim.drain_events());
                assert!(anim.cancel(id).unwrap());
                anim.start(id, InterpolationRun::counter(1, 0.0)).unwrap();
            }
        }
    }

    #[test]
    fn sink_may_call_back_into_animator() {
        let (sched, anim) = setup();
        let handle = Rc::new(RefCell::new(None));
        let id_cell = Rc::new(RefCell::new(None));
        let drained = Rc::new(RefCell::new(Vec::new()));
        let id = anim.register_sink(Box::new(SelfCancelling {
            animator: handle.clone(),
            id: id_cell.clone(),
            drained: drained.clone(),
        }));
        *id_cell.borrow_mut() = Some(id);
        *handle.borrow_mut() = Some(anim.clone());

        anim.start(id, InterpolationRun::counter(10, 100.0)).unwrap();
        sched.run_frame(0.0);

        assert!(matches!(
            drained.borrow().first(),
            Some(MotionEvent::RunStarted { .. })
        ));
        // The restarted run is pending; the cancelled one stopped.
        assert!(anim.is_active(id));
        assert_eq!(sched.pending(), 2);
        // Break the animator <-> sink cycle.
        handle.borrow_mut().take();
    }

    #[test]
    fn event_buffer_is_bounded() {
        let sched = Rc::new(ManualScheduler::new());
        let cfg = MotionConfig {
            max_events: 2,
            ..MotionConfig::default()
        };
        let anim = Animator::new(cfg, sched);
        let id = anim.register_sink(Box::new(NumericDisplay::new()));
        for _ in 0..5 {
            anim.start(id, InterpolationRun::counter(1, 10.0)).unwrap();
        }
        assert_eq!(anim.drain_events().len(), 2);
        assert!(anim.drain_events().is_empty());
    }

    #[test]
    fn immediate_scheduler_completes_on_start() {
        let anim = Animator::new(MotionConfig::default(), Rc::new(ImmediateScheduler));
        let display = Rc::new(RefCell::new(NumericDisplay::new()));
        let id = anim.register_sink(Box::new(display.clone()));
        anim.start(id, InterpolationRun::counter(250, 2000.0).with_delay(300.0))
            .unwrap();
        assert!(!anim.is_active(id));
        assert_eq!(display.borrow().text, "250");
        assert_eq!(display.borrow().writes, 1);
        assert_eq!(anim.last_value(id), Some(SinkValue::Integer(250)));
    }
}
