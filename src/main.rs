//! Arducam-64MP demo binary driving the control engine against the simulator.

use std::path::Path;

use arducam_64mp::mock::{MockBus, MockPower};
use arducam_64mp::{Arducam64mp, MbusFormat, Pad, PixelCode, SensorConfig, SensorSubdev, Which};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> arducam_64mp::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SensorConfig::load(Path::new(&path))?,
        None => SensorConfig::default(),
    };

    let bus = MockBus::new();
    let sensor = Arducam64mp::new(bus.clone(), MockPower::new(), &config)?;

    let request = MbusFormat::new(1920, 1080, PixelCode::Srggb10);
    let format = sensor.set_format(Pad::Image, Which::Active, &request)?;
    let crop = sensor.selection(Pad::Image, arducam_64mp::SelectionTarget::Crop, Which::Active)?;

    println!(
        "Format: {}x{} {:?} ({})",
        format.width,
        format.height,
        format.code,
        String::from_utf8_lossy(&format.code.fourcc().0)
    );
    println!(
        "Crop: {}x{} at ({}, {})",
        crop.width, crop.height, crop.left, crop.top
    );

    sensor.set_stream(true)?;
    println!("Streaming: {} register writes", bus.writes().len());
    sensor.set_stream(false)?;

    for ctrl in sensor.controls() {
        println!(
            "{:<26} {:>10} [{}..={}]{}",
            ctrl.id.name(),
            ctrl.value,
            ctrl.minimum,
            ctrl.maximum,
            if ctrl.read_only { " ro" } else { "" }
        );
    }

    let (_bus, _power) = sensor.remove();
    Ok(())
}
