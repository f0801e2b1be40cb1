use ai_bt::builder::{action, condition, cooldown, selector, sequence};
use ai_bt::{BtNode, Status};
use ai_core::{Actor, BbKey, Blackboard, TickContext, WorldMut, WorldView};

pub const HUNGRY_ABOVE: f64 = 0.6;
pub const TIRED_BELOW: f64 = 0.3;
/// Hours a critter waits between two meals.
pub const MEAL_COOLDOWN_HOURS: f64 = 2.0;

const GRASS_CAP: f64 = 40.0;
const GRASS_REGROWTH_PER_HOUR: f64 = 1.5;
const MEAL_SIZE: f64 = 0.5;
const REST_GAIN: f64 = 0.25;

/// Set while a critter is in the middle of a rest, so the `tired` check keeps
/// the rest branch selected until the critter is fully recovered.
pub const RESTING: BbKey<bool> = BbKey::new("resting");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Grazing,
    Resting,
    Wandering,
}

#[derive(Debug, Clone)]
pub struct Critter {
    pub id: u64,
    /// 0.0 (sated) to 1.0 (starving).
    pub hunger: f64,
    /// 0.0 (exhausted) to 1.0 (rested).
    pub energy: f64,
    pub activity: Activity,
    pub meals: u32,
}

impl Critter {
    pub fn new(id: u64) -> Self {
        // Spread starting needs so the population does not move in lockstep.
        let spread = (id % 7) as f64 / 10.0;
        Self {
            id,
            hunger: 0.2 + spread,
            energy: 1.0 - spread,
            activity: Activity::Idle,
            meals: 0,
        }
    }

    /// Needs drift between ticks whatever the critter is doing.
    pub fn drift(&mut self, hours: f64) {
        self.hunger = (self.hunger + 0.1 * hours).min(1.0);
        if self.activity != Activity::Resting {
            self.energy = (self.energy - 0.06 * hours).max(0.0);
        }
    }
}

impl Actor for Critter {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_idle(&mut self) {
        self.activity = Activity::Idle;
    }
}

#[derive(Debug, Clone)]
pub struct Meadow {
    pub grass: f64,
}

impl Default for Meadow {
    fn default() -> Self {
        Self { grass: GRASS_CAP }
    }
}

impl Meadow {
    pub fn regrow(&mut self, hours: f64) {
        self.grass = (self.grass + GRASS_REGROWTH_PER_HOUR * hours).min(GRASS_CAP);
    }
}

impl WorldView for Meadow {
    type Actor = Critter;
}

impl WorldMut for Meadow {}

fn hungry(
    _: &TickContext,
    critter: &mut Critter,
    _: &mut Meadow,
    _: &mut Blackboard,
) -> (bool, String) {
    (
        critter.hunger > HUNGRY_ABOVE,
        format!("hunger {:.2}", critter.hunger),
    )
}

fn graze(
    _: &TickContext,
    critter: &mut Critter,
    meadow: &mut Meadow,
    _: &mut Blackboard,
) -> (Status, String) {
    if meadow.grass < MEAL_SIZE {
        return (
            Status::Failure,
            format!("only {:.1} grass left", meadow.grass),
        );
    }
    meadow.grass -= MEAL_SIZE;
    critter.hunger = (critter.hunger - MEAL_SIZE).max(0.0);
    critter.meals += 1;
    critter.activity = Activity::Grazing;
    (Status::Success, format!("meal {}", critter.meals))
}

fn tired(
    _: &TickContext,
    critter: &mut Critter,
    _: &mut Meadow,
    bb: &mut Blackboard,
) -> (bool, String) {
    let resting = bb.get(&RESTING).copied().unwrap_or(false);
    (
        resting || critter.energy < TIRED_BELOW,
        format!("energy {:.2}", critter.energy),
    )
}

/// Recovers a quarter of the energy bar per walk; takes several ticks.
fn rest(
    _: &TickContext,
    critter: &mut Critter,
    _: &mut Meadow,
    bb: &mut Blackboard,
) -> (Status, String) {
    critter.activity = Activity::Resting;
    critter.energy = (critter.energy + REST_GAIN).min(1.0);
    if critter.energy >= 1.0 {
        bb.set(&RESTING, false);
        (Status::Success, "fully rested".to_owned())
    } else {
        bb.set(&RESTING, true);
        (Status::Running, format!("energy {:.2}", critter.energy))
    }
}

fn wander(_: &TickContext, critter: &mut Critter, _: &mut Meadow, _: &mut Blackboard) -> Status {
    critter.activity = Activity::Wandering;
    Status::Running
}

/// The tree every configured critter runs.
pub fn critter_tree() -> Box<dyn BtNode<Meadow>> {
    selector(
        "root",
        vec![
            sequence(
                "feed",
                vec![
                    condition("hungry", hungry),
                    cooldown("eat", MEAL_COOLDOWN_HOURS, action("graze", graze)),
                ],
            ),
            sequence(
                "sleep",
                vec![condition("tired", tired), action("rest", rest)],
            ),
            action("wander", wander),
        ],
    )
}
