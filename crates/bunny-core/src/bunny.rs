use chrono::{DateTime, Utc};

use crate::action::{ActionKind, FeedKind, PlayKind};
use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::stats::{Stats, Status};

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Signed change applied to each stat per elapsed minute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayRates {
    pub hunger: f64,
    pub happiness: f64,
    pub cleanliness: f64,
    pub energy: f64,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger: 1.2,
            happiness: -0.4,
            cleanliness: -0.3,
            // slow idle recovery
            energy: 0.3,
        }
    }
}

/// A single virtual bunny
///
/// Stats drift lazily: every read or action first catches up on the time
/// elapsed since the previous one.
pub struct Bunny<C = SystemClock> {
    stats: Stats,
    last_update: DateTime<Utc>,
    rates: DecayRates,
    clock: C,
}

impl Bunny<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Bunny<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Bunny<C> {
    pub fn with_clock(clock: C) -> Self {
        let last_update = clock.now();
        Self {
            stats: Stats::default(),
            last_update,
            rates: DecayRates::default(),
            clock,
        }
    }

    #[must_use]
    pub fn with_rates(mut self, rates: DecayRates) -> Self {
        self.rates = rates;
        self
    }

    /// Stats as of the last update, without applying decay
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    pub const fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    fn decay(&mut self) {
        let now = self.clock.now();
        let elapsed_min = (now - self.last_update).num_milliseconds() as f64 / MILLIS_PER_MINUTE;
        if elapsed_min <= 0.0 {
            return;
        }

        self.stats.adjust(
            self.rates.hunger * elapsed_min,
            self.rates.happiness * elapsed_min,
            self.rates.cleanliness * elapsed_min,
            self.rates.energy * elapsed_min,
        );
        self.last_update = now;
        tracing::trace!(elapsed_min, stats = ?self.stats, "Applied decay");
    }

    pub fn status(&mut self) -> Status {
        self.decay();
        self.stats.status()
    }

    pub fn feed(&mut self, kind: FeedKind) -> Status {
        self.decay();
        match kind {
            FeedKind::Carrot => self.stats.adjust(-18.0, 6.0, 0.0, 0.0),
            // crumbs
            FeedKind::Pellet => self.stats.adjust(-28.0, 0.0, -4.0, 0.0),
        }
        self.stats.adjust(0.0, 0.0, 0.0, 5.0);
        self.stats.status()
    }

    pub fn play(&mut self, kind: PlayKind) -> Status {
        self.decay();
        match kind {
            PlayKind::Pat => self.stats.adjust(0.0, 10.0, 0.0, 3.0),
            // messy play
            PlayKind::Toy => self.stats.adjust(0.0, 16.0, -2.0, -8.0),
        }
        self.stats.status()
    }

    pub fn clean(&mut self) -> Status {
        self.decay();
        self.stats.adjust(0.0, 4.0, 25.0, 0.0);
        self.stats.status()
    }

    pub fn reset(&mut self) -> Status {
        self.stats = Stats::default();
        self.last_update = self.clock.now();
        self.stats.status()
    }

    /// Feed with an unchecked kind; non-food kinds leave the bunny untouched
    pub fn apply_feed(&mut self, kind: Option<ActionKind>) -> Result<Status> {
        let kind = kind.and_then(ActionKind::as_feed).ok_or(Error::InvalidFeedKind)?;
        Ok(self.feed(kind))
    }

    /// Play with an unchecked kind; non-play kinds leave the bunny untouched
    pub fn apply_play(&mut self, kind: Option<ActionKind>) -> Result<Status> {
        let kind = kind.and_then(ActionKind::as_play).ok_or(Error::InvalidPlayKind)?;
        Ok(self.play(kind))
    }
}
