//! Basic GSM modem status example.
//!
//! Demonstrates connecting to a SIM800/SIM900-class modem, checking that
//! it responds to `AT`, and printing its identity and signal quality.
//!
//! # Requirements
//!
//! - A GSM/GPRS modem board with a registered SIM connected via USB
//! - The serial port path adjusted for your system
//!
//! # Usage
//!
//! ```sh
//! cargo run -p periphlib --features gsm --example gsm_status
//! ```

use periphlib::gsm::GsmBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Adjust this to match your system's serial port.
    let serial_port = "/dev/ttyUSB0";

    println!("Connecting to modem on {}...", serial_port);

    let mut modem = GsmBuilder::new().serial_port(serial_port).build().await?;

    if !modem.modem_active().await? {
        anyhow::bail!("modem did not answer AT; check wiring and power");
    }
    println!("Modem is responding.");

    // Identity block. Each query is one settle-interval round trip, so
    // this section takes a few seconds on real hardware.
    if let Some(manufacturer) = modem.manufacturer().await? {
        println!("Manufacturer: {}", manufacturer);
    }
    if let Some(model) = modem.model().await? {
        println!("Model:        {}", model);
    }
    if let Some(revision) = modem.revision().await? {
        println!("Revision:     {}", revision);
    }
    if let Some(serial) = modem.serial_number().await? {
        println!("IMEI:         {}", serial);
    }
    if let Some(imsi) = modem.subscriber_identity().await? {
        println!("IMSI:         {}", imsi);
    }

    match modem.signal_strength().await? {
        Some(report) => println!("Signal: {} (raw {})", report.quality, report.value),
        None => println!("Signal: not reported"),
    }

    modem.close().await?;
    Ok(())
}
