// deck.rs

use std::fs;

use anyhow::{Context, Result};
use leftturn_core::{
    Decision, LeftTurnError, LeftTurnResult, ResponseRecord, Scene, Trial, TrialBlock,
    flatten_blocks,
};
use serde::{Deserialize, Serialize};

/// An authored deck: either a flat scene list or blocks of scenes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeckFile {
    Blocks(Vec<TrialBlock>),
    Scenes(Vec<Scene>),
}

/// Parses a deck into the raw scene order fed to the designer. Blocks are
/// flattened neutral-first.
pub fn parse_deck(json: &str) -> LeftTurnResult<Vec<Scene>> {
    let deck: DeckFile = serde_json::from_str(json).map_err(|e| {
        LeftTurnError::Deck(format!(
            "expected an array of scenes or an array of trial blocks ({e})"
        ))
    })?;
    Ok(match deck {
        DeckFile::Blocks(blocks) => flatten_blocks(&blocks),
        DeckFile::Scenes(scenes) => scenes,
    })
}

pub fn load_deck(path: &str) -> Result<Vec<Scene>> {
    let contents = fs::read_to_string(path).with_context(|| format!("reading deck {path}"))?;
    parse_deck(&contents).with_context(|| format!("parsing deck {path}"))
}

/// A designed trial as served to presentation, with its ground truth.
#[derive(Debug, Clone, Serialize)]
pub struct DesignedTrial<'a> {
    #[serde(flatten)]
    pub trial: &'a Trial,
    pub prime_label: &'static str,
    pub correct: Decision,
}

pub fn write_designed(path: &str, trials: &[DesignedTrial<'_>]) -> Result<()> {
    let file = fs::File::create(path).with_context(|| format!("creating {path}"))?;
    serde_json::to_writer_pretty(file, trials).with_context(|| format!("writing {path}"))?;
    Ok(())
}

/// A persisted trial, optionally carrying the ground truth it was served
/// with.
#[derive(Debug, Clone, Deserialize)]
pub struct PersistedTrial {
    #[serde(flatten)]
    pub trial: Trial,
    #[serde(default)]
    pub correct: Option<Decision>,
}

pub fn load_persisted(path: &str) -> Result<Vec<PersistedTrial>> {
    let contents = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let trials = serde_json::from_str(&contents)
        .map_err(LeftTurnError::from)
        .with_context(|| format!("parsing designed sequence {path}"))?;
    Ok(trials)
}

pub fn load_logs(path: &str) -> Result<Vec<ResponseRecord>> {
    let contents = fs::read_to_string(path).with_context(|| format!("reading logs {path}"))?;
    let logs = serde_json::from_str(&contents)
        .map_err(LeftTurnError::from)
        .with_context(|| format!("parsing logs {path}"))?;
    Ok(logs)
}
