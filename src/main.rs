//! Headless Letter Slide runner (default binary).
//!
//! Plays one seeded game and prints every turn. Directions come from
//! `--moves` or from the built-in policy. See [`letter_slide::config`] for
//! flags and environment variables.

use std::io::{self, Write};

use anyhow::Result;
use env_logger::Env;
use log::info;

use letter_slide::config::RunConfig;
use letter_slide::core::MemoryBestScore;
use letter_slide::runner::run;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = RunConfig::from_process()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = run(&config, MemoryBestScore::default(), &mut out)?;
    info!("finished: {:?}", summary);

    if !config.json {
        let max = summary
            .max_letter
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        writeln!(
            out,
            "{} moves, score {}, best {}, highest letter {}, status {}",
            summary.moves_played,
            summary.score,
            summary.best_score,
            max,
            summary.status.as_str()
        )?;
    }
    out.flush()?;
    Ok(())
}
