use crate::schema::{Content, GameConfig, HandRule, JokerDef, RulesFile};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const RULES_FILE: &str = "rules.json";
const HANDS_FILE: &str = "hands.json";
const BLINDS_FILE: &str = "blinds.json";
const JOKERS_FILE: &str = "jokers.json";

/// Reads `rules.json`, `hands.json` and `blinds.json` from `dir`. The hand
/// table and blind list fall back to the built-in defaults when their file
/// is absent.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let rules: RulesFile = load_json(dir.join(RULES_FILE))?;
    let defaults = GameConfig::default();

    let hands_path = dir.join(HANDS_FILE);
    let hands: Vec<HandRule> = if hands_path.exists() {
        load_json(hands_path)?
    } else {
        log::debug!("{} missing, using built-in hand table", HANDS_FILE);
        defaults.hands
    };
    validate_hands(&hands)?;

    let blinds_path = dir.join(BLINDS_FILE);
    let blinds: Vec<i64> = if blinds_path.exists() {
        load_json(blinds_path)?
    } else {
        log::debug!("{} missing, using built-in blinds", BLINDS_FILE);
        defaults.blinds
    };
    validate_blinds(&blinds)?;

    if rules.round.hand_size == 0 {
        bail!("{}: hand_size must be positive", RULES_FILE);
    }
    if rules.round.hands == 0 {
        bail!("{}: hands must be positive", RULES_FILE);
    }
    if rules.round.max_selected == 0 {
        bail!("{}: max_selected must be positive", RULES_FILE);
    }

    Ok(GameConfig {
        round: rules.round,
        hands,
        blinds,
        joker_slots: rules.joker_slots,
    })
}

/// Reads the joker catalog from `dir/jokers.json`.
pub fn load_content(dir: &Path) -> anyhow::Result<Content> {
    let jokers: Vec<JokerDef> = load_json(dir.join(JOKERS_FILE))?;
    validate_jokers(&jokers)?;
    log::debug!("loaded {} jokers", jokers.len());
    Ok(Content { jokers })
}

fn validate_hands(hands: &[HandRule]) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for rule in hands {
        if !seen.insert(rule.kind) {
            bail!("{}: duplicate entry for {}", HANDS_FILE, rule.kind);
        }
        if rule.chips < 0 || rule.mult < 0 {
            bail!("{}: negative values for {}", HANDS_FILE, rule.kind);
        }
    }
    Ok(())
}

fn validate_blinds(blinds: &[i64]) -> anyhow::Result<()> {
    if let Some((idx, target)) = blinds.iter().enumerate().find(|(_, target)| **target <= 0) {
        bail!("{}: blind {} has non-positive target {}", BLINDS_FILE, idx, target);
    }
    Ok(())
}

fn validate_jokers(jokers: &[JokerDef]) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for joker in jokers {
        if joker.id.is_empty() {
            bail!("{}: joker with empty id", JOKERS_FILE);
        }
        if !seen.insert(joker.id.as_str()) {
            bail!("{}: duplicate joker id {}", JOKERS_FILE, joker.id);
        }
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
