//! CLI smoke entry point.
//!
//! Usage: `hotel_cli [DATA_DIR [LOG_DIR]]`
//!
//! Prints the core version and, given a data directory, the record count of
//! each collection file in it. `HOTEL_LOG_LEVEL` overrides the default level
//! when `LOG_DIR` is supplied.

use hotel_core::{default_log_level, init_logging, DataPaths, StoreResult};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("hotel_core version={}", hotel_core::core_version());

    let mut args = std::env::args().skip(1);
    let Some(data_dir) = args.next() else {
        return ExitCode::SUCCESS;
    };

    if let Some(log_dir) = args.next() {
        let level = std::env::var("HOTEL_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let paths = DataPaths::in_dir(&data_dir);
    let customers = paths.customer_store().try_load().map(|records| records.len());
    let hotels = paths.hotel_store().try_load().map(|records| records.len());
    let reservations = paths
        .reservation_store()
        .try_load()
        .map(|records| records.len());

    let mut healthy = true;
    for (name, count) in [
        ("customers", customers),
        ("hotels", hotels),
        ("reservations", reservations),
    ] {
        healthy &= report(name, count);
    }

    if healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report(name: &str, count: StoreResult<usize>) -> bool {
    match count {
        Ok(count) => {
            println!("{name}={count}");
            true
        }
        Err(err) => {
            log::warn!("event=cli_summary module=cli status=error collection={name} error={err}");
            println!("{name}=error ({err})");
            false
        }
    }
}
