//! Output formatting and logging utilities

use color_eyre::eyre::{Result, WrapErr};
use nalgebra::DMatrix;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::time::SystemTime as StdSystemTime;
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = StdSystemTime::now();
        let duration = now
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        // Format as HH:MM:SS (only seconds precision)
        let total_seconds = duration.as_secs();
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Setup logging to a file or stdout
pub fn setup_output(output_path: Option<&String>) -> Result<()> {
    match output_path {
        Some(path) => {
            let log = File::create(path)
                .wrap_err_with(|| format!("Could not create output file: {}", path))?;
            let file_layer = layer()
                .with_writer(log)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(false);
            Registry::default()
                .with(file_layer)
                .try_init()
                .wrap_err("Failed to initialise logging")?;
            info!("Output will be written to: {}", path);
        }
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true);
            Registry::default()
                .with(stdout_layer)
                .try_init()
                .wrap_err("Failed to initialise logging")?;
            info!("Output will be printed to stdout");
        }
    }
    Ok(())
}

/// Write the spin grid as text, top row (`y = ny - 1`) first
pub fn render_spins<W: Write>(writer: &mut W, spins: &DMatrix<i8>) -> Result<()> {
    let (nx, ny) = spins.shape();
    for y in (0..ny).rev() {
        let row: String = (0..nx)
            .map(|x| if spins[(x, y)] == 1 { '↑' } else { '↓' })
            .collect();
        writeln!(writer, "{}", row)?;
    }
    writeln!(writer)?;
    Ok(())
}
