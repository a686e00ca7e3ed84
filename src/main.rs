use anyhow::{Result, bail};
use leftturn_catalog::prime_for_trial;
use leftturn_design::{
    Designer, score_attention_checks_with, summarize_accuracy, summarize_design_with,
    validate_design_with,
};
use leftturn_judge::Oracle;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod deck;
mod synth;

use config::SessionConfig;
use deck::DesignedTrial;

const DEFAULT_LOG_FILTER: &str = "left_turn_priming=info,leftturn_design=info";

const USAGE: &str = "\
Usage: left-turn-priming [OPTIONS]
  --deck PATH       Authored deck JSON (scenes or trial blocks)
  --synthetic N     Use a random deck of N scenes instead of --deck
  --seed S          Seed for --synthetic (default: 42)
  --config PATH     Session config JSON (default: built-in)
  --out PATH        Write the designed sequence with ground truth
  --logs PATH       Response logs to score (scene_id, correct)
  --audit PATH      Validate a persisted designed sequence and exit";

#[derive(Debug, Default, PartialEq)]
struct Args {
    deck: Option<String>,
    synthetic: Option<usize>,
    seed: u64,
    config: Option<String>,
    out: Option<String>,
    logs: Option<String>,
    audit: Option<String>,
}

/// Returns `None` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let mut parsed = Args {
        seed: 42,
        ..Args::default()
    };
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| match iter.next() {
            Some(v) => Ok(v.clone()),
            None => bail!("{flag} needs a value"),
        };
        match arg.as_str() {
            "--deck" => parsed.deck = Some(value("--deck")?),
            "--synthetic" => parsed.synthetic = Some(value("--synthetic")?.parse()?),
            "--seed" => parsed.seed = value("--seed")?.parse()?,
            "--config" => parsed.config = Some(value("--config")?),
            "--out" => parsed.out = Some(value("--out")?),
            "--logs" => parsed.logs = Some(value("--logs")?),
            "--audit" => parsed.audit = Some(value("--audit")?),
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(Some(parsed))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let argv: Vec<String> = std::env::args().collect();
    let Some(args) = parse_args(&argv)? else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    let oracle = Oracle::from_canvas(&config.canvas, config.judge.clone());
    let layout = oracle.intersection();
    info!(
        center_x = layout.center_x,
        center_y = layout.center_y,
        road_width = layout.road_width,
        ttc_threshold_seconds = oracle.config().ttc_threshold_seconds,
        "oracle ready"
    );

    if let Some(path) = &args.audit {
        return audit(path, &config, &oracle);
    }
    design_session(&args, &config, &oracle)
}

fn design_session(args: &Args, config: &SessionConfig, oracle: &Oracle) -> Result<()> {
    let scenes = match (&args.deck, args.synthetic) {
        (_, Some(len)) => {
            info!(len, seed = args.seed, "using synthetic deck");
            synth::synthetic_deck(len, args.seed)
        }
        (Some(path), None) => deck::load_deck(path)?,
        (None, None) => bail!("no deck given; pass --deck PATH or --synthetic N\n{USAGE}"),
    };
    info!(scenes = scenes.len(), "loaded raw deck");

    let trials = Designer::new(config.design.clone())?.design(scenes);
    let validation = validate_design_with(&trials, &config.design);
    if !validation.valid {
        for e in &validation.errors {
            error!("{e}");
        }
        bail!(
            "designed sequence failed validation with {} error(s)",
            validation.errors.len()
        );
    }

    let summary = summarize_design_with(&trials, &config.design);
    info!(
        total = summary.total,
        control = summary.control_count,
        primed = summary.primed_count,
        attention_checks = summary.attention_check_count,
        blocks = ?summary.block_sizes,
        "design valid"
    );

    let designed: Vec<DesignedTrial<'_>> = trials
        .iter()
        .map(|trial| DesignedTrial {
            trial,
            prime_label: prime_for_trial(trial).label,
            correct: oracle.judge(&trial.scene),
        })
        .collect();
    if let Some(path) = &args.out {
        deck::write_designed(path, &designed)?;
        info!(path = %path, trials = designed.len(), "wrote designed sequence");
    }

    if let Some(path) = &args.logs {
        report_logs(path, config)?;
    }
    Ok(())
}

fn report_logs(path: &str, config: &SessionConfig) -> Result<()> {
    let logs = deck::load_logs(path)?;
    let checks = score_attention_checks_with(&logs, config.scoring.min_pass_rate);
    let accuracy = summarize_accuracy(&logs);
    info!(
        responses = accuracy.total,
        correct = accuracy.correct,
        incorrect = accuracy.incorrect,
        accuracy_percent = accuracy.accuracy_percent,
        "session accuracy"
    );
    if !checks.passed {
        warn!(
            correct_checks = checks.correct_checks,
            total_checks = checks.total_checks,
            "participant failed attention checks"
        );
    }
    Ok(())
}

/// Re-validates a persisted sequence and re-derives every stored answer.
fn audit(path: &str, config: &SessionConfig, oracle: &Oracle) -> Result<()> {
    let persisted = deck::load_persisted(path)?;
    let trials: Vec<_> = persisted.iter().map(|p| p.trial.clone()).collect();

    let mut problems = validate_design_with(&trials, &config.design).errors;
    for (i, p) in persisted.iter().enumerate() {
        let derived = oracle.judge(&p.trial.scene);
        if let Some(stored) = p.correct {
            if stored != derived {
                problems.push(format!(
                    "Trial {i}: Stored correct={stored:?} but ground truth is {derived:?} \
                     for scene '{}'",
                    p.trial.scene_id()
                ));
            }
        }
    }

    if problems.is_empty() {
        info!(path = %path, trials = trials.len(), "audit clean");
        return Ok(());
    }
    for problem in &problems {
        error!("{problem}");
    }
    bail!("audit of {path} found {} problem(s)", problems.len())
}
