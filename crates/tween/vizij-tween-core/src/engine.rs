//! Engine: owns one scheduler per owner plus a lazily created global scheduler,
//! and advances all of them from a single host tick.

use log::debug;

use crate::config::Config;
use crate::error::{Result, TweenError};
use crate::ids::OwnerId;
use crate::scheduler::Scheduler;

#[derive(Debug, Default)]
pub struct Engine {
    global: Option<Scheduler>,
    owners: Vec<(OwnerId, Scheduler)>,
    next_owner: u32,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared scheduler with [`Config::GLOBAL_SLOTS`] slots, created on first use
    /// and kept for the engine's lifetime.
    pub fn global(&mut self) -> &mut Scheduler {
        self.global.get_or_insert_with(|| {
            debug!("creating global tween scheduler");
            Scheduler::named("tween global", Config::global())
        })
    }

    /// Whether the global scheduler has been created yet.
    pub fn has_global(&self) -> bool {
        self.global.is_some()
    }

    /// Create a new owner with `slots` addressable slots (plus the default slot).
    pub fn create_owner(&mut self, slots: usize) -> OwnerId {
        self.create_owner_with(Config::with_slots(slots))
    }

    pub fn create_owner_with(&mut self, cfg: Config) -> OwnerId {
        let id = OwnerId(self.next_owner);
        self.next_owner = self.next_owner.wrapping_add(1);
        let name = format!("tween owner {}", id.0);
        debug!("creating {} with {} slots", name, cfg.slots);
        self.owners.push((id, Scheduler::named(name, cfg)));
        id
    }

    pub fn owner(&self, id: OwnerId) -> Option<&Scheduler> {
        self.owners
            .iter()
            .find_map(|(o, s)| if *o == id { Some(s) } else { None })
    }

    pub fn owner_mut(&mut self, id: OwnerId) -> Option<&mut Scheduler> {
        self.owners
            .iter_mut()
            .find_map(|(o, s)| if *o == id { Some(s) } else { None })
    }

    /// Checked lookup returning [`TweenError::UnknownOwner`] for stale ids.
    pub fn try_owner_mut(&mut self, id: OwnerId) -> Result<&mut Scheduler> {
        self.owner_mut(id).ok_or(TweenError::UnknownOwner(id))
    }

    /// Drop an owner and all of its tasks. Pending callbacks never run.
    pub fn remove_owner(&mut self, id: OwnerId) -> Option<Scheduler> {
        let pos = self.owners.iter().position(|(o, _)| *o == id)?;
        debug!("removing tween owner {}", id.0);
        Some(self.owners.remove(pos).1)
    }

    pub fn owner_ids(&self) -> impl Iterator<Item = OwnerId> + '_ {
        self.owners.iter().map(|(id, _)| *id)
    }

    /// Advance the global scheduler, then every owner in creation order.
    pub fn advance(&mut self, dt: f32) {
        if let Some(global) = self.global.as_mut() {
            global.advance(dt);
        }
        for (_, sched) in self.owners.iter_mut() {
            sched.advance(dt);
        }
    }

    /// Live task count across the global scheduler and all owners.
    pub fn live_tasks(&self) -> usize {
        self.global.as_ref().map_or(0, Scheduler::live_tasks)
            + self
                .owners
                .iter()
                .map(|(_, s)| s.live_tasks())
                .sum::<usize>()
    }
}
