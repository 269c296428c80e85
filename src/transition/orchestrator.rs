use crate::brella::entity::Brella;
use crate::brella::envelope::Envelope;
use crate::color::range::Palette;
use crate::foundation::error::BrellaResult;
use crate::foundation::random::RandomSource;
use crate::surface::Surface;
use crate::transition::config::TransitionConfig;
use crate::transition::placement::{place, sample_sides, sample_size};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;

/// Brellas spawned per rendered frame while below the maximum.
const SPAWN_BATCH: usize = 2;

/// Multi-brella transition.
///
/// Each [`Transition::render`] call spawns up to two brellas (never past `brella_max`), draws
/// every brella in spawn order and deactivates once all `brella_max` brellas have ended.
pub struct Transition<R = Pcg32> {
    config: TransitionConfig,
    palette: Palette,
    envelope: Envelope,
    active: bool,
    brellas: Vec<Brella>,
    rng: R,
}

impl Transition<Pcg32> {
    /// Construct with a generator seeded from the thread RNG.
    pub fn new(config: TransitionConfig) -> BrellaResult<Self> {
        Self::with_rng(config, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Construct with a deterministic generator.
    pub fn with_seed(config: TransitionConfig, seed: u64) -> BrellaResult<Self> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Transition<R> {
    /// Validate and normalize `config`, then construct an inactive transition drawing from `rng`.
    pub fn with_rng(config: TransitionConfig, rng: R) -> BrellaResult<Self> {
        config.validate()?;
        let config = config.normalized();
        Ok(Self {
            palette: config.palette(),
            envelope: config.envelope(),
            config,
            active: false,
            brellas: Vec::new(),
            rng,
        })
    }

    /// Normalized configuration in use.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Brellas spawned so far, in spawn order.
    pub fn brellas(&self) -> &[Brella] {
        &self.brellas
    }

    /// Drop every brella and start a fresh run.
    #[tracing::instrument(skip(self), fields(brella_max = self.config.brella_max))]
    pub fn activate(&mut self) {
        self.brellas.clear();
        self.active = true;
        tracing::debug!("transition activated");
    }

    /// `true` between [`Transition::activate`] and completion.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Frames a full run takes: `ceil(max / 2) + 2 * attack + hold - 1`, or 1 with no brellas.
    pub fn estimated_frames(&self) -> u64 {
        if self.config.brella_max == 0 {
            return 1;
        }
        let batches = self.config.brella_max.div_ceil(SPAWN_BATCH) as u64;
        (batches + self.envelope.lifetime()).saturating_sub(1).max(1)
    }

    /// Render one frame. Does nothing while inactive.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if !self.active {
            return;
        }

        let missing = self.config.brella_max.saturating_sub(self.brellas.len());
        for _ in 0..missing.min(SPAWN_BATCH) {
            self.spawn(f64::from(surface.width()), f64::from(surface.height()));
        }

        for brella in &mut self.brellas {
            brella.render(surface, self.config.rotate);
        }

        if self.brellas.len() >= self.config.brella_max && self.brellas.iter().all(Brella::ended) {
            self.active = false;
            tracing::debug!(brellas = self.brellas.len(), "transition finished");
        }
    }

    fn spawn(&mut self, width: f64, height: f64) {
        let placement = place(
            &self.brellas,
            width,
            height,
            self.config.retries,
            &mut self.rng,
        );
        if placement.overlapping {
            tracing::debug!(
                retries = placement.retries,
                "placement budget exhausted; accepting overlap"
            );
        } else {
            tracing::trace!(retries = placement.retries, "placed brella");
        }

        let size = sample_size(height, &mut self.rng);
        let sides = sample_sides(&self.config.ribs, &mut self.rng);
        let brella = Brella::sample(
            placement.position,
            size,
            sides,
            &self.palette,
            self.envelope,
            &mut self.rng,
        );
        self.brellas.push(brella);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/orchestrator.rs"]
mod tests;
