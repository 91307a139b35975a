//! The energy supervisor: replays a coverage plan against a battery and
//! splices in charging detours.
//!
//! The supervisor never changes which coverage cells are visited or their
//! order.  It only inserts detour segments (to a station and back to the exact
//! cell where the detour began) between consecutive plan waypoints, or cuts the
//! plan short when the battery runs flat.

use tracing::{debug, warn};

use cov_core::{Cell, EnergyConfig, Grid, ENERGY_PER_STEP};
use cov_spatial::{Route, Router, SearchSpace, StationIndex};

use crate::{
    ChargingEvent, EnergyError, EnergyLogEntry, EnergyObserver, EnergyResult, EnergyRun,
    EnergyState, MissionStatus, SupervisorState,
};

/// Wraps a [`Router`] and the grid's station index to turn a coverage plan
/// into an energy-feasible path.
///
/// # Type parameter
///
/// `R` must implement [`Router`] (e.g. [`cov_spatial::BfsRouter`]).
pub struct EnergySupervisor<'g, R: Router> {
    grid:     &'g Grid,
    config:   EnergyConfig,
    router:   R,
    stations: StationIndex,
}

/// A committed detour: the route to the station and the route back.
struct Detour {
    station: Cell,
    there:   Route,
    back:    Route,
}

impl<'g, R: Router> EnergySupervisor<'g, R> {
    /// # Errors
    ///
    /// [`EnergyError::Config`] if `config` fails validation.
    pub fn new(grid: &'g Grid, config: EnergyConfig, router: R) -> EnergyResult<Self> {
        config.validate()?;
        Ok(Self {
            grid,
            config,
            router,
            stations: StationIndex::from_grid(grid),
        })
    }

    pub fn config(&self) -> &EnergyConfig {
        &self.config
    }

    pub fn stations(&self) -> &StationIndex {
        &self.stations
    }

    /// Replay `plan` from a full battery.
    ///
    /// The first waypoint is logged without consumption; every later step
    /// costs [`ENERGY_PER_STEP`].  Running flat is not an error: the run ends
    /// with [`MissionStatus::Exhausted`] and the path walked so far.
    ///
    /// # Errors
    ///
    /// [`EnergyError::Discontinuity`] if two consecutive plan waypoints are
    /// not 4-adjacent.
    pub fn run(
        &self,
        plan: &[Cell],
        observer: &mut dyn EnergyObserver,
    ) -> EnergyResult<EnergyRun> {
        if let Some(w) = plan.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
            return Err(EnergyError::Discontinuity { from: w[0], to: w[1] });
        }

        let mut trip = Trip::new(self.grid, &self.config, observer);
        let Some((&first, rest)) = plan.split_first() else {
            return Ok(trip.finish(MissionStatus::Completed));
        };
        trip.start(first);

        for &next in rest {
            if !trip.step(next, SupervisorState::Traveling) {
                return Ok(trip.finish(MissionStatus::Exhausted { at: next }));
            }
            if trip.state() != SupervisorState::LowEnergy {
                continue;
            }

            let charge = trip.energy.current;
            let Some(detour) = self.plan_detour(next, charge) else {
                debug!(at = %next, energy = charge, "low energy, no station within budget");
                trip.unserved_low_energy += 1;
                trip.observer.on_unserved_low_energy(next, charge);
                continue;
            };

            debug!(
                from = %next,
                station = %detour.station,
                there = detour.there.hops(),
                back = detour.back.hops(),
                energy = charge,
                "charging detour"
            );
            trip.observer.on_detour(next, detour.station);
            for &cell in detour.there.steps() {
                if !trip.step(cell, SupervisorState::Charging) {
                    return Ok(trip.finish(MissionStatus::Exhausted { at: cell }));
                }
            }
            for &cell in detour.back.steps() {
                if !trip.step(cell, SupervisorState::Returning) {
                    return Ok(trip.finish(MissionStatus::Exhausted { at: cell }));
                }
            }
            trip.observer.on_resume(next);
        }

        Ok(trip.finish(MissionStatus::Completed))
    }

    /// Pick the station for a detour from `from` with `charge` left.
    ///
    /// Candidates come nearest-first (Manhattan, then cell order) and must be
    /// reached with charge to spare.  With `require_round_trip` the route back
    /// must also fit in a full charge, and a station that leaves the agent
    /// above the low-energy threshold on its return is preferred over a
    /// nearer one that does not.
    fn plan_detour(&self, from: Cell, charge: u32) -> Option<Detour> {
        let space = SearchSpace::Grid {
            grid:           self.grid,
            allow_chargers: true,
        };
        let mut fallback = None;
        for station in self.stations.within(from, charge) {
            let Ok(there) = self.router.route(&space, from, station) else { continue };
            if cost(&there) >= charge {
                continue;
            }
            let Ok(back) = self.router.route(&space, station, from) else { continue };
            if !self.config.require_round_trip {
                return Some(Detour { station, there, back });
            }
            let Some(left) = self.config.max_energy.checked_sub(cost(&back)) else { continue };
            let detour = Detour { station, there, back };
            if !self.config.is_low(left) {
                return Some(detour);
            }
            if fallback.is_none() {
                fallback = Some(detour);
            }
        }
        fallback
    }
}

#[inline]
fn cost(route: &Route) -> u32 {
    (route.hops() as u32).saturating_mul(ENERGY_PER_STEP)
}

// ── Trip ──────────────────────────────────────────────────────────────────────

/// Mutable state of one supervised run.
struct Trip<'a> {
    grid:                &'a Grid,
    config:              &'a EnergyConfig,
    observer:            &'a mut dyn EnergyObserver,
    energy:              EnergyState,
    path:                Vec<Cell>,
    log:                 Vec<EnergyLogEntry>,
    charging_events:     Vec<ChargingEvent>,
    unserved_low_energy: usize,
}

impl<'a> Trip<'a> {
    fn new(grid: &'a Grid, config: &'a EnergyConfig, observer: &'a mut dyn EnergyObserver) -> Self {
        Self {
            grid,
            config,
            observer,
            energy:              EnergyState::full(config.max_energy),
            path:                Vec::new(),
            log:                 Vec::new(),
            charging_events:     Vec::new(),
            unserved_low_energy: 0,
        }
    }

    fn state(&self) -> SupervisorState {
        self.log.last().map(|e| e.state).unwrap_or_default()
    }

    fn start(&mut self, cell: Cell) {
        self.record(cell, SupervisorState::Traveling);
    }

    /// Move into `cell`.  Returns `false` if the battery is now flat.
    fn step(&mut self, cell: Cell, mode: SupervisorState) -> bool {
        self.energy.consume_step();
        let arrived_with = self.energy.current;
        let on_station = self.grid.is_charger(cell);
        if on_station {
            self.energy.recharge();
        }

        let exhausted = self.energy.is_empty();
        let state = if exhausted {
            SupervisorState::Exhausted
        } else if mode == SupervisorState::Traveling && self.config.is_low(self.energy.current) {
            SupervisorState::LowEnergy
        } else {
            mode
        };
        self.record(cell, state);

        if on_station {
            let event = ChargingEvent {
                station: cell,
                index:   self.path.len() - 1,
                arrived_with,
            };
            self.observer.on_charged(&event);
            self.charging_events.push(event);
        }
        if exhausted {
            warn!(at = %cell, steps = self.path.len(), "battery exhausted, mission truncated");
            self.observer.on_exhausted(cell);
        }
        !exhausted
    }

    fn record(&mut self, cell: Cell, state: SupervisorState) {
        let entry = EnergyLogEntry {
            position: cell,
            energy:   self.energy.current,
            low:      self.config.is_low(self.energy.current),
            state,
        };
        self.path.push(cell);
        self.log.push(entry);
        self.observer.on_step(&entry);
    }

    fn finish(self, status: MissionStatus) -> EnergyRun {
        EnergyRun {
            path:                self.path,
            log:                 self.log,
            charging_events:     self.charging_events,
            status,
            unserved_low_energy: self.unserved_low_energy,
            final_energy:        self.energy.current,
        }
    }
}
