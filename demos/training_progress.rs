// Terminal rendition of the cosmetic training progress bar.
//
// To run this example:
//   cargo run --example training_progress

use rand::SeedableRng;
use std::io::Write;
use std::time::Duration;
use topoviz::{TrainingProgress, WidgetConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = WidgetConfig::from_json(r#"{ "progress": { "tick_interval_ms": 20 } }"#)?;
    let mut rng = rand::rngs::StdRng::from_entropy();
    let mut progress = TrainingProgress::new(&config.progress);

    while !progress.is_finished() {
        progress.tick(&mut rng);
        let filled = (progress.percent() / 2.0) as usize;
        print!("\r[{:<50}] {:>4}", "#".repeat(filled), progress.label());
        std::io::stdout().flush()?;
        std::thread::sleep(Duration::from_millis(config.progress.tick_interval_ms as u64));
    }
    println!();

    Ok(())
}
