use crate::{
    config::options::AnimationOptions,
    foundation::{
        error::{MarkError, MarkResult},
        math::Rng64,
    },
    morph::{
        compose::{Frame, compose_frame},
        state::{MorphPhase, MorphState, advance_state},
    },
    pattern::generate::PatternGenerator,
};

/// Supplies the seed of every new cycle.
pub trait SeedSource {
    fn next_seed(&mut self) -> String;
}

impl<S: SeedSource + ?Sized> SeedSource for Box<S> {
    fn next_seed(&mut self) -> String {
        (**self).next_seed()
    }
}

/// Random base-36 seeds of 11 to 13 characters.
#[derive(Clone, Debug)]
pub struct RandomSeeds {
    rng: Rng64,
}

impl RandomSeeds {
    const MIN_LEN: usize = 11;

    /// Seeded from the wall clock and process id.
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(nanos ^ u64::from(std::process::id()).rotate_left(32))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng64::new(seed),
        }
    }
}

impl Default for RandomSeeds {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl SeedSource for RandomSeeds {
    fn next_seed(&mut self) -> String {
        loop {
            let s = to_base36(self.rng.next_u64());
            if s.len() >= Self::MIN_LEN {
                return s;
            }
        }
    }
}

fn to_base36(mut v: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut buf = Vec::with_capacity(13);
    loop {
        buf.push(DIGITS[(v % 36) as usize]);
        v /= 36;
        if v == 0 {
            break;
        }
    }
    buf.iter().rev().map(|&b| char::from(b)).collect()
}

/// Cycles through a fixed, non-empty list of seeds.
#[derive(Clone, Debug)]
pub struct SeedList {
    seeds: Vec<String>,
    next: usize,
}

impl SeedList {
    pub fn new<I, T>(seeds: I) -> MarkResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let seeds: Vec<String> = seeds.into_iter().map(Into::into).collect();
        if seeds.is_empty() {
            return Err(MarkError::validation("seed list must not be empty"));
        }
        Ok(Self { seeds, next: 0 })
    }
}

impl SeedSource for SeedList {
    fn next_seed(&mut self) -> String {
        let seed = self.seeds[self.next % self.seeds.len()].clone();
        self.next = (self.next + 1) % self.seeds.len();
        seed
    }
}

/// Who moves progress forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressDrive {
    /// Interval timer starts cycles, frame callbacks advance them.
    #[default]
    Automatic,
    /// The host sets progress directly; timers are ignored.
    Manual,
}

#[derive(Clone, Debug, Default)]
struct Timers {
    last_frame_ms: Option<f64>,
    next_interval_ms: Option<f64>,
    cancelled: bool,
}

/// Host-facing driver: owns the morph state, its timers and the seed source.
///
/// Hosts call [`Animator::mount`] once, then feed either clock callbacks
/// ([`Animator::on_animation_frame`], [`Animator::on_interval`], or the
/// combined [`Animator::advance_to`]) or manual progress values, and pull
/// frames with [`Animator::frame`].
#[derive(Debug)]
pub struct Animator<S = RandomSeeds> {
    options: AnimationOptions,
    generator: PatternGenerator,
    seeds: S,
    drive: ProgressDrive,
    state: Option<MorphState>,
    timers: Timers,
}

impl<S: SeedSource> Animator<S> {
    pub fn new(options: AnimationOptions, seeds: S, drive: ProgressDrive) -> MarkResult<Self> {
        options.validate()?;
        Ok(Self {
            generator: PatternGenerator::new(options.mark.clone()),
            options,
            seeds,
            drive,
            state: None,
            timers: Timers::default(),
        })
    }

    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    pub fn drive(&self) -> ProgressDrive {
        self.drive
    }

    pub fn state(&self) -> Option<&MorphState> {
        self.state.as_ref()
    }

    pub fn is_torn_down(&self) -> bool {
        self.timers.cancelled
    }

    /// Resolve the initial seed and show its pattern at rest.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self) -> MarkResult<()> {
        let seed = match &self.options.seed {
            Some(seed) => seed.clone(),
            None => self.seeds.next_seed(),
        };
        let pattern =
            self.generator
                .generate_pattern(&seed, self.options.size, self.options.mode)?;
        tracing::debug!(seed = %seed, triangles = pattern.triangles.len(), "mounted");
        self.state = Some(MorphState::resting(
            pattern,
            &seed,
            self.options.size,
            self.options.mode,
        ));
        self.timers = Timers::default();
        Ok(())
    }

    /// Per-frame callback. Advances progress by the time since the previous
    /// frame of the running cycle.
    pub fn on_animation_frame(&mut self, now_ms: f64) {
        if !self.timers_live() {
            return;
        }
        let Some(state) = self.state.take() else {
            return;
        };
        if state.phase() == MorphPhase::Resting {
            self.timers.last_frame_ms = None;
            self.state = Some(state);
            return;
        }

        let elapsed = self.timers.last_frame_ms.map_or(0.0, |last| now_ms - last);
        self.timers.last_frame_ms = Some(now_ms);
        let state = advance_state(state, elapsed, self.options.duration_ms);
        if state.phase() == MorphPhase::Resting {
            tracing::debug!(seed = %state.next_seed_id, "cycle complete");
            self.timers.last_frame_ms = None;
        }
        self.state = Some(state);
    }

    /// Interval callback. Starts the next cycle when resting; returns whether
    /// one was started.
    pub fn on_interval(&mut self) -> MarkResult<bool> {
        if !self.timers_live() {
            return Ok(false);
        }
        match self.state.as_ref().map(MorphState::phase) {
            Some(MorphPhase::Resting) => {
                let seed = self.seeds.next_seed();
                self.begin(seed)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Simulate a host clock: fire the interval callback if a tick is due by
    /// `now_ms`, then one frame.
    ///
    /// The first call fixes the clock origin of the interval timer. Ticks
    /// missed across a clock jump collapse into the single one fired; the next
    /// tick stays on the original cadence.
    pub fn advance_to(&mut self, now_ms: f64) -> MarkResult<()> {
        if !now_ms.is_finite() {
            return Err(MarkError::validation("clock reading must be finite"));
        }
        if !self.timers_live() {
            return Ok(());
        }
        let interval = self.options.interval_ms;
        let mut due = *self
            .timers
            .next_interval_ms
            .get_or_insert(now_ms + interval);
        if now_ms >= due {
            self.on_interval()?;
            let missed = ((now_ms - due) / interval).floor() + 1.0;
            due += missed * interval;
            if due <= now_ms {
                due = now_ms + interval;
            }
        }
        self.timers.next_interval_ms = Some(due);
        self.on_animation_frame(now_ms);
        Ok(())
    }

    /// Set linear progress directly. Only valid under [`ProgressDrive::Manual`].
    ///
    /// The first input at the initial rest starts a cycle toward a fresh seed
    /// before the value is applied.
    pub fn set_manual_progress(&mut self, progress: f64) -> MarkResult<()> {
        if self.drive != ProgressDrive::Manual {
            return Err(MarkError::validation(
                "manual progress requires the manual drive",
            ));
        }
        if progress.is_nan() {
            return Err(MarkError::validation("progress must be a number"));
        }
        let idle = match &self.state {
            Some(state) => state.is_initial_rest(),
            None => return Err(MarkError::validation("animator is not mounted")),
        };
        if idle {
            let seed = self.seeds.next_seed();
            self.begin(seed)?;
        }
        if let Some(state) = self.state.as_mut() {
            state.progress = progress.clamp(0.0, 1.0);
        }
        Ok(())
    }

    /// Start a cycle now, toward `seed` or the next seed of the source.
    #[tracing::instrument(skip(self))]
    pub fn start_next(&mut self, seed: Option<&str>) -> MarkResult<()> {
        if self.state.is_none() {
            return Err(MarkError::validation("animator is not mounted"));
        }
        let seed = match seed {
            Some(seed) => seed.to_owned(),
            None => self.seeds.next_seed(),
        };
        self.begin(seed)
    }

    /// Current frame at eased progress, or `None` before mount.
    pub fn frame(&self) -> Option<Frame> {
        let state = self.state.as_ref()?;
        Some(compose_frame(
            state,
            self.options.ease.apply(state.progress),
            self.options.mode,
        ))
    }

    /// Cancel timers. Later callbacks are no-ops until the next mount.
    pub fn teardown(&mut self) {
        tracing::debug!("teardown");
        self.timers = Timers {
            cancelled: true,
            ..Timers::default()
        };
    }

    fn timers_live(&self) -> bool {
        !self.timers.cancelled && self.drive == ProgressDrive::Automatic
    }

    fn begin(&mut self, seed: String) -> MarkResult<()> {
        let Some(current) = self.state.as_ref() else {
            return Err(MarkError::validation("animator is not mounted"));
        };
        let pattern =
            self.generator
                .generate_pattern(&seed, self.options.size, self.options.mode)?;
        let next = current.begin_cycle(pattern, &seed, self.options.mode);
        tracing::debug!(
            from = %next.current_seed_id,
            to = %next.next_seed_id,
            mode = %self.options.mode,
            "cycle started"
        );
        self.state = Some(next);
        self.timers.last_frame_ms = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/animator.rs"]
mod tests;
