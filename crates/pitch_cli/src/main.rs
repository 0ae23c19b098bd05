//! Pitch CLI
//!
//! Runs rule-driven 3-a-side matches from a JSON request file and writes the
//! replay history and summary as JSON.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pitch_core::api::{simulate_batch, simulate_match, MatchRequest};
use pitch_core::EngineConfig;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pitch")]
#[command(version, about = "Simulate rule-driven 3-a-side matches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    Default,
    Compact,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match and write the result as JSON
    Play {
        /// Match request JSON (teams, optional seed/ticks); bundled demo if omitted
        #[arg(long)]
        teams: Option<PathBuf>,

        /// RNG seed (overrides the request)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of ticks (overrides the request)
        #[arg(long)]
        ticks: Option<u64>,

        /// Engine preset
        #[arg(long, value_enum)]
        profile: Option<Profile>,

        /// YAML engine config; takes precedence over --profile
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Leave the tick history out of the output
        #[arg(long, default_value = "false")]
        summary_only: bool,
    },

    /// Play several matches in parallel with consecutive seeds
    Batch {
        /// Match request JSON; bundled demo if omitted
        #[arg(long)]
        teams: Option<PathBuf>,

        /// Number of matches
        #[arg(long)]
        matches: u64,

        /// First seed; match i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Number of ticks per match (overrides the request)
        #[arg(long)]
        ticks: Option<u64>,
    },
}

fn load_request(teams: Option<&Path>) -> Result<MatchRequest> {
    match teams {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        }
        None => MatchRequest::demo().context("loading bundled demo match"),
    }
}

fn load_config(profile: Option<Profile>, config: Option<&Path>) -> Result<Option<EngineConfig>> {
    if let Some(path) = config {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config = EngineConfig::from_yaml_str(&text)
            .with_context(|| format!("loading engine config {}", path.display()))?;
        return Ok(Some(config));
    }
    Ok(profile.map(|p| match p {
        Profile::Default => EngineConfig::default(),
        Profile::Compact => EngineConfig::compact(),
    }))
}

fn write_output(out: Option<&Path>, body: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{body}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            teams,
            seed,
            ticks,
            profile,
            config,
            out,
            summary_only,
        } => {
            let mut request = load_request(teams.as_deref())?;
            if let Some(seed) = seed {
                request.seed = seed;
            }
            if let Some(ticks) = ticks {
                request.ticks = ticks;
            }
            if let Some(config) = load_config(profile, config.as_deref())? {
                request.config = Some(config);
            }

            let response = simulate_match(&request).context("simulating match")?;
            let (a, b) = response.summary.score();
            eprintln!(
                "{} {} - {} {}  ({} ticks, seed {})",
                response.summary.team_a.name,
                a,
                b,
                response.summary.team_b.name,
                response.summary.ticks,
                response.seed
            );

            let body = if summary_only {
                serde_json::to_string_pretty(&response.summary)?
            } else {
                serde_json::to_string(&response)?
            };
            write_output(out.as_deref(), &body)?;
        }

        Commands::Batch {
            teams,
            matches,
            seed,
            ticks,
        } => {
            if matches == 0 {
                bail!("--matches must be at least 1");
            }
            let mut base = load_request(teams.as_deref())?;
            if let Some(ticks) = ticks {
                base.ticks = ticks;
            }

            let requests: Vec<MatchRequest> = (0..matches)
                .map(|i| MatchRequest {
                    seed: seed.wrapping_add(i),
                    ..base.clone()
                })
                .collect();

            for (request, result) in requests.iter().zip(simulate_batch(&requests)) {
                let response =
                    result.with_context(|| format!("match with seed {}", request.seed))?;
                let line = serde_json::json!({
                    "seed": response.seed,
                    "score": response.summary.score(),
                    "possession_pct": [
                        response.summary.team_a.possession_pct,
                        response.summary.team_b.possession_pct
                    ],
                    "history_sha256": response.history_sha256,
                });
                println!("{line}");
            }
        }
    }

    Ok(())
}
