use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vizij_tween_core::{Delay, FloatLerp, Repeater, Scheduler, TaskStatus, WaitFrames};

#[test]
fn callback_can_reschedule_its_own_slot_for_next_tick() {
    let mut s = Scheduler::with_slots(1);
    let cmds = s.commands();
    let values = Rc::new(RefCell::new(Vec::new()));

    let v = values.clone();
    s.delay_in(1, 0.5, move || {
        let v = v.clone();
        cmds.schedule(
            1,
            FloatLerp::linear(1.0, 0.0, 2.0).on_update(move |x| v.borrow_mut().push(x)),
        );
    });

    s.advance(0.5);
    // the replacement is installed but has not stepped yet
    assert_eq!(s.status(1), Some(TaskStatus::Running));
    assert!(values.borrow().is_empty());

    s.advance(0.5);
    s.advance(0.5);
    assert_eq!(*values.borrow(), vec![1.0, 2.0]);
    assert_eq!(s.status(1), Some(TaskStatus::Finished));
}

#[test]
fn callback_can_cancel_another_slot() {
    let mut s = Scheduler::with_slots(2);
    let cmds = s.commands();
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    s.repeater_in(1, 0.25, move || h.set(h.get() + 1));
    s.wait_frames_in(2, 2, move || cmds.cancel(1));

    s.advance(0.25);
    s.advance(0.25);
    assert_eq!(hits.get(), 2);
    s.advance(0.25);
    assert_eq!(hits.get(), 2);
    assert!(!s.is_updating(1));
}

#[test]
fn repeater_can_stop_itself_through_its_handle() {
    let mut s = Scheduler::with_slots(0);
    let cmds = s.commands();
    let hits = Rc::new(Cell::new(0));
    let handle = Rc::new(Cell::new(None));

    let (h, me) = (hits.clone(), handle.clone());
    let id = s.schedule(
        0,
        Repeater::new(0.1).on_repeat(move || {
            h.set(h.get() + 1);
            if h.get() == 3 {
                if let Some(id) = me.get() {
                    cmds.cancel_task(id);
                }
            }
        }),
    );
    handle.set(Some(id));

    for _ in 0..10 {
        s.advance(0.1);
    }
    assert_eq!(hits.get(), 3);
    assert_eq!(s.live_tasks(), 0);
}

#[test]
fn commands_queued_between_ticks_apply_on_next_advance() {
    let mut s = Scheduler::with_slots(1);
    let cmds = s.commands();
    let fired = Rc::new(Cell::new(false));
    let f = fired.clone();
    let id = cmds.schedule(1, WaitFrames::new(1).on_complete(move || f.set(true)));
    assert_eq!(cmds.len(), 1);
    assert_eq!(s.status(1), None);

    s.advance(0.016);
    assert!(cmds.is_empty());
    assert!(fired.get());
    assert_eq!(s.outputs().completed().collect::<Vec<_>>(), vec![id]);
}

#[test]
fn chained_delays_step_once_per_tick() {
    let mut s = Scheduler::with_slots(0);
    let cmds = s.commands();
    let log = Rc::new(RefCell::new(Vec::new()));

    let (l1, l2) = (log.clone(), log.clone());
    s.delay(0.0, move || {
        l1.borrow_mut().push("first");
        let second = Delay::new(0.0).on_complete(move || l2.borrow_mut().push("second"));
        cmds.schedule(0, second);
    });

    s.advance(0.0);
    assert_eq!(*log.borrow(), vec!["first"]);
    s.advance(0.0);
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}
