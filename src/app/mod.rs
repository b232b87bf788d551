mod runner;

pub use runner::{build_sampler, run_simulation};

use crate::config::{load_config, Args, Config, Settings};
use crate::io::setup_output;
use crate::ising::analysis::reduced_temperature;
use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

pub struct IsingApplication {
    args: Args,
    config: Config,
}

impl IsingApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = match &args.config_file {
            Some(path) => load_config(path)?,
            None => Config::default().with_defaults(),
        };
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref())?;

        match &self.args.config_file {
            Some(path) => info!("Configuration loaded from: {}", path),
            None => info!("No configuration file given, using defaults"),
        }

        let settings = Settings::resolve(&self.args, &self.config)?;
        info!("Settings:\n{:?}", settings);
        info!(
            "{}x{} lattice, J = {}, T = {} (T/T_c = {:.4})",
            settings.nx,
            settings.ny,
            settings.coupling,
            settings.temperature,
            reduced_temperature(settings.temperature, settings.coupling)
        );

        let mut sampler = build_sampler(&settings)?;
        info!("Using {} sampler", sampler.name());

        run_simulation(sampler.as_mut(), &settings, &mut std::io::stdout())
    }
}
