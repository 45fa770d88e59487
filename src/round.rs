use rand::Rng;

/// Final numbers for one player, fixed once the round is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub score: u32,
    pub lives_remaining: u32,
    pub bullets_shot: u32,
    pub ships_destroyed: u32,
}

impl RoundStats {
    /// Share of shots that destroyed a ship, 0 when nothing was fired.
    pub fn accuracy(&self) -> f32 {
        if self.bullets_shot == 0 {
            return 0.0;
        }
        self.ships_destroyed as f32 / self.bullets_shot as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub p1: RoundStats,
    pub p2: Option<RoundStats>,
}

impl RoundResult {
    pub fn single(p1: RoundStats) -> Self {
        RoundResult { p1, p2: None }
    }

    pub fn versus(p1: RoundStats, p2: RoundStats) -> Self {
        RoundResult { p1, p2: Some(p2) }
    }

    pub fn players(&self) -> impl Iterator<Item = &RoundStats> + '_ {
        std::iter::once(&self.p1).chain(self.p2.as_ref())
    }

    /// A plausible finished round, for running the screen standalone.
    /// Mostly two player, sometimes solo.
    pub fn simulated(rng: &mut impl Rng) -> Self {
        let p1 = simulate_player(rng);
        if rng.gen_ratio(1, 4) {
            return RoundResult::single(p1);
        }
        RoundResult::versus(p1, simulate_player(rng))
    }
}

fn simulate_player(rng: &mut impl Rng) -> RoundStats {
    let bullets_shot = rng.gen_range(10..200);
    let ships_destroyed = rng.gen_range(0..=bullets_shot.min(55));
    // 10-30 points per ship, like the alien rows
    let score = (0..ships_destroyed).map(|_| rng.gen_range(1..=3u32) * 10).sum::<u32>();
    RoundStats {
        score,
        lives_remaining: rng.gen_range(0..=3),
        bullets_shot,
        ships_destroyed,
    }
}
