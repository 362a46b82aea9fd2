//! Runner configuration from environment variables and command-line flags.
//!
//! Environment variables:
//!
//! - `LETTER_SLIDE_SEED`: RNG seed (default 1)
//! - `LETTER_SLIDE_MAX_MOVES`: turn limit (default 10000)
//!
//! Flags override the environment:
//!
//! ```text
//! letter-slide [--seed N] [--max-moves N] [--moves LRUD...] [--json]
//! ```

use anyhow::{anyhow, Context, Result};

use crate::types::Direction;

pub const DEFAULT_SEED: u32 = 1;
pub const DEFAULT_MAX_MOVES: u32 = 10_000;

pub const ENV_SEED: &str = "LETTER_SLIDE_SEED";
pub const ENV_MAX_MOVES: &str = "LETTER_SLIDE_MAX_MOVES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub max_moves: u32,
    /// Scripted directions; `None` lets the built-in policy choose
    pub script: Option<Vec<Direction>>,
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_moves: DEFAULT_MAX_MOVES,
            script: None,
            json: false,
        }
    }
}

impl RunConfig {
    /// Read the process environment and arguments (without the program name)
    pub fn from_process() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_env_and_args(|key| std::env::var(key).ok(), &args)
    }

    pub fn from_env_and_args<F>(env: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = env(ENV_SEED) {
            config.seed = parse_number(&v).with_context(|| format!("invalid {}", ENV_SEED))?;
        }
        if let Some(v) = env(ENV_MAX_MOVES) {
            config.max_moves =
                parse_number(&v).with_context(|| format!("invalid {}", ENV_MAX_MOVES))?;
        }

        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    config.seed = parse_number(v).context("invalid --seed value")?;
                }
                "--max-moves" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --max-moves"))?;
                    config.max_moves = parse_number(v).context("invalid --max-moves value")?;
                }
                "--moves" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --moves"))?;
                    config.script = Some(parse_script(v)?);
                }
                "--json" => config.json = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }

        Ok(config)
    }
}

fn parse_number(v: &str) -> Result<u32> {
    v.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("not a non-negative integer: {:?}", v))
}

/// Parse a move script such as `"LLUR"` or `"l,l,u,r"`.
///
/// Separators (commas, whitespace) are skipped; any other character that is
/// not a direction code is an error.
pub fn parse_script(s: &str) -> Result<Vec<Direction>> {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| Direction::from_char(c).ok_or_else(|| anyhow!("unknown direction: {:?}", c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_input() {
        let config = RunConfig::from_env_and_args(no_env, &[]).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn env_then_flags() {
        let env = |key: &str| match key {
            ENV_SEED => Some("7".to_string()),
            ENV_MAX_MOVES => Some("50".to_string()),
            _ => None,
        };
        let config = RunConfig::from_env_and_args(env, &args(&["--seed", "9", "--json"])).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.max_moves, 50);
        assert!(config.json);
    }

    #[test]
    fn script_flag() {
        let config = RunConfig::from_env_and_args(no_env, &args(&["--moves", "l, r,U d"])).unwrap();
        assert_eq!(
            config.script,
            Some(vec![
                Direction::Left,
                Direction::Right,
                Direction::Up,
                Direction::Down
            ])
        );
    }

    #[test]
    fn bad_inputs_fail_fast() {
        assert!(RunConfig::from_env_and_args(no_env, &args(&["--moves", "LX"])).is_err());
        assert!(RunConfig::from_env_and_args(no_env, &args(&["--seed"])).is_err());
        assert!(RunConfig::from_env_and_args(no_env, &args(&["--seed", "-3"])).is_err());
        assert!(RunConfig::from_env_and_args(no_env, &args(&["--fast"])).is_err());

        let bad_env = |key: &str| (key == ENV_MAX_MOVES).then(|| "lots".to_string());
        assert!(RunConfig::from_env_and_args(bad_env, &[]).is_err());
    }
}
