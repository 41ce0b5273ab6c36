//! Basic GPS fix-reading example.
//!
//! Demonstrates connecting to an NMEA GPS module, polling for a `$GPGGA`
//! fix, and printing position, time, quality, and satellite count.
//!
//! # Requirements
//!
//! - A serial NMEA GPS module (NEO-6M class) connected via USB
//! - The serial port path adjusted for your system (e.g., `/dev/ttyUSB0`
//!   on Linux, `COM3` on Windows)
//!
//! # Usage
//!
//! ```sh
//! cargo run -p periphlib --features gps --example gps_fix
//! ```

use std::time::Duration;

use periphlib::gps::GpsBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Adjust this to match your system's serial port.
    let serial_port = "/dev/ttyUSB0";

    println!("Connecting to GPS on {}...", serial_port);

    let mut gps = GpsBuilder::new().serial_port(serial_port).build().await?;

    // A cold module can take a while to acquire satellites; each accessor
    // reads one window, so poll until a valid sentence shows up.
    let fix = loop {
        if let Some(fix) = gps.fix().await? {
            break fix;
        }
        println!("no fix yet, retrying...");
        tokio::time::sleep(Duration::from_secs(1)).await;
    };

    println!("Latitude:   {}", fix.latitude);
    println!("Longitude:  {}", fix.longitude);
    println!("Time (UTC): {}", fix.time_of_day);
    println!("Quality:    {}", fix.quality);
    println!("Satellites: {}", fix.satellites);

    gps.close().await?;
    Ok(())
}
