/// This module governs the high-level implementation of a run
mod configuration;
mod styles;
mod telemetry;
mod writer;

pub(crate) use configuration::Configuration;

use crate::device::{Device, DeviceDescription, InfoDesk};
use crate::error::as_f64;
use crate::profile::ProfileResult;
use clap::{ArgEnum, Parser};
use color_eyre::eyre::eyre;
use nalgebra::RealField;
use owo_colors::OwoColorize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use styles::Styles;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct App {
    /// The device description, a `.toml` file of layers
    file_path: PathBuf,
    #[clap(arg_enum, short, long, default_value = "info")]
    log_level: LogLevel,
    /// Directory for the profile and the log, overrides the configuration
    #[clap(short, long)]
    output: Option<PathBuf>,
    /// Number of sample points, overrides the configuration
    #[clap(short = 'n', long)]
    points: Option<usize>,
    /// Voltage applied to a layer as `index=value`, may be repeated
    #[clap(short, long, parse(try_from_str = parse_voltage))]
    voltage: Vec<(usize, f64)>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
enum LogLevel {
    Trace,
    Info,
    Debug,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self {
            LogLevel::Trace => "trace",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Error => "error",
        };
        write!(f, "{level}")
    }
}

fn parse_voltage(s: &str) -> Result<(usize, f64), String> {
    let (index, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected `index=value`, got `{s}`"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|e| format!("invalid layer index `{index}`: {e}"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid voltage `{value}`: {e}"))?;
    Ok((index, value))
}

/// Reads the device named on the command line, computes its profile and writes it to disk
pub fn run<T>() -> color_eyre::Result<()>
where
    T: Copy + DeserializeOwned + RealField,
{
    color_eyre::install()?;
    let cli = App::parse();

    let config: Configuration<T> = Configuration::build()?;
    let output = cli
        .output
        .unwrap_or_else(|| config.output.directory.clone());
    std::fs::create_dir_all(&output)?;

    let (subscriber, _guard) = telemetry::get_subscriber(cli.log_level, &output);
    telemetry::init_subscriber(subscriber)?;

    tracing::info!("Reading device from {}", cli.file_path.display());
    let description: DeviceDescription<T> = DeviceDescription::build(&cli.file_path)
        .map_err(|e| eyre!("Failed to read {}: {}", cli.file_path.display(), e))?;
    let info_desk = InfoDesk::with_presets();
    let mut device = description.into_device(&info_desk, config.global.temperature)?;

    for (index, voltage) in cli.voltage {
        let voltage = T::from_f64(voltage).ok_or_else(|| eyre!("Voltage {voltage} does not fit"))?;
        device.set_voltage(index, voltage)?;
    }

    let number_of_points = cli.points.unwrap_or(config.mesh.number_of_points);
    let profile = device.compute_profile(number_of_points)?;

    print_summary(&device, &profile)?;

    let path = writer::output_path(&output, &cli.file_path);
    writer::write_profile(&profile, &path)?;
    tracing::info!("Profile written to {}", path.display());

    Ok(())
}

fn print_summary<T: Copy + RealField>(
    device: &Device<T>,
    profile: &ProfileResult<T>,
) -> color_eyre::Result<()> {
    let styles = Styles::for_stdout();
    let term = console::Term::stdout();

    term.write_line(&format!(
        "{} of {} layers, {:.1} nm at {} K",
        "Device".style(styles.device_style),
        device.len(),
        as_f64(device.thickness()),
        as_f64(device.temperature())
    ))?;
    for (index, (layer, voltage)) in device.iter().zip(device.bias().voltages()).enumerate() {
        term.write_line(&format!(
            "  {} {index}: {:?}, {:.1} nm, {} V",
            "layer".style(styles.layer_style),
            layer.kind(),
            as_f64(layer.thickness()),
            as_f64(*voltage)
        ))?;
    }
    for interface in profile.interfaces() {
        term.write_line(&format!(
            "  {} {}: V_bi = {} V, x1 = {} nm, x2 = {} nm, bending {}",
            "interface".style(styles.interface_style),
            interface.index,
            format!("{:.3}", as_f64(interface.built_in_potential)).style(styles.value_style),
            format!("{:.2}", as_f64(interface.x1())).style(styles.value_style),
            format!("{:.2}", as_f64(interface.x2())).style(styles.value_style),
            interface.bend_sign()
        ))?;
    }
    Ok(())
}
