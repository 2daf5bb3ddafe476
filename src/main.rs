use std::fs;
use std::io::ErrorKind;

use env_logger::Env;
use log::{info, warn};

use realitysub::generator::clash::{assemble, to_yaml};
use realitysub::parser::subparser::parse_subscription;
use realitysub::settings::{INPUT_FILE, OUTPUT_FILE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let content = match fs::read_to_string(INPUT_FILE) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("File {} not found.", INPUT_FILE);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let proxies = parse_subscription(&content);
    if proxies.is_empty() {
        // The config is still written so a consuming client keeps a
        // valid document; it just has nothing to route through.
        warn!("No Reality proxies found.");
    }

    let config = assemble(&proxies);
    fs::write(OUTPUT_FILE, to_yaml(&config)?)?;

    info!("Config generated with {} proxies.", proxies.len());
    Ok(())
}
