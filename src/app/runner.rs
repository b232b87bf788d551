use crate::config::Settings;
use crate::io::render_spins;
use crate::ising::Sampler;
use color_eyre::eyre::Result;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Build the configured sampler, drawing and logging a seed if none was given
pub fn build_sampler(settings: &Settings) -> Result<Box<dyn Sampler>> {
    let seed = settings.seed.unwrap_or_else(|| thread_rng().gen());
    info!("Random seed: {}", seed);

    settings.algorithm.build(
        settings.nx,
        settings.ny,
        settings.coupling,
        settings.temperature,
        StdRng::seed_from_u64(seed),
    )
}

/// Advance the sampler `settings.steps` times (forever when 0), rendering the
/// lattice to `writer` every `settings.render_every` steps
pub fn run_simulation<W: Write>(
    sampler: &mut dyn Sampler,
    settings: &Settings,
    writer: &mut W,
) -> Result<()> {
    let start = Instant::now();

    while settings.steps == 0 || sampler.steps() < settings.steps {
        sampler.mcstep();

        let step = sampler.steps();
        if settings.render_every > 0 && step % settings.render_every == 0 {
            info!("Step {}", step);
            render_spins(writer, sampler.spins())?;
            writer.flush()?;
        } else {
            debug!("Step {}", step);
        }
    }

    info!(
        "{} finished {} steps in {:.3?}",
        sampler.name(),
        sampler.steps(),
        start.elapsed()
    );
    Ok(())
}
