use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Tick counter for the signal simulation.
///
/// `advance_clock` runs at the end of each tick (in `SimPhase::Last`), so systems
/// see the tick they are running in.
#[derive(Resource, Debug, Default)]
pub struct SimClock {
    pub tick_count: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick_count += 1;
    }
}

pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
