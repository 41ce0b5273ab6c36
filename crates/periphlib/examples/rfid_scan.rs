//! Basic RFID tag scanning example.
//!
//! Waits for tags on an EM4100-class fixed-length reader and prints each
//! twelve-character identifier as it arrives.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p periphlib --features rfid --example rfid_scan
//! ```

use periphlib::rfid::RfidBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Adjust this to match your system's serial port.
    let serial_port = "/dev/ttyUSB0";

    println!("Waiting for tags on {} (Ctrl-C to stop)...", serial_port);

    let mut reader = RfidBuilder::new().serial_port(serial_port).build().await?;

    loop {
        // Blocks until a tag is presented.
        let tag = reader.tag_id().await?;
        println!("tag: {}", tag);
    }
}
