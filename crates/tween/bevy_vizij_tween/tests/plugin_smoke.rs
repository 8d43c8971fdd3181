use std::cell::Cell;
use std::rc::Rc;

use bevy::prelude::*;
use bevy_vizij_tween::{FixedDt, TweenEngine, VizijTweenPlugin};

fn app_with_fixed_dt(dt: f32) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(VizijTweenPlugin);
    app.insert_resource(FixedDt(Some(dt)));
    app
}

#[test]
fn plugin_inserts_engine_resource() {
    let mut app = App::new();
    // it should insert TweenEngine when the plugin is added
    app.add_plugins(MinimalPlugins).add_plugins(VizijTweenPlugin);

    assert!(app.world().get_non_send_resource::<TweenEngine>().is_some());
    assert!(app.world().get_resource::<FixedDt>().is_some());
}

#[test]
fn update_advances_global_scheduler() {
    let mut app = app_with_fixed_dt(0.5);
    let fired = Rc::new(Cell::new(0));
    let f = fired.clone();
    app.world_mut()
        .non_send_resource_mut::<TweenEngine>()
        .0
        .global()
        .delay_in(1, 2.0, move || f.set(f.get() + 1));

    for _ in 0..3 {
        app.update();
    }
    assert_eq!(fired.get(), 0);
    app.update();
    assert_eq!(fired.get(), 1);
    app.update();
    assert_eq!(fired.get(), 1);
}

#[test]
fn owners_tick_alongside_global() {
    let mut app = app_with_fixed_dt(0.25);
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    {
        let mut engine = app.world_mut().non_send_resource_mut::<TweenEngine>();
        let owner = engine.0.create_owner(1);
        engine
            .0
            .owner_mut(owner)
            .expect("owner just created")
            .repeater_in(1, 0.5, move || h.set(h.get() + 1));
    }

    for _ in 0..8 {
        app.update();
    }
    assert_eq!(hits.get(), 4);
    assert_eq!(
        app.world().non_send_resource::<TweenEngine>().0.live_tasks(),
        1
    );
}
