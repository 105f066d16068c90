// src/config/scoring.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const ENV_SCORING_CONFIG_PATH: &str = "SCORING_CONFIG_PATH";
pub const DEFAULT_SCORING_TOML: &str = "config/scoring.toml";
pub const DEFAULT_SCORING_JSON: &str = "config/scoring.json";

fn default_keyword_weight() -> f64 {
    0.6
}
fn default_similarity_weight() -> f64 {
    0.4
}
fn default_keyword_match_threshold() -> f64 {
    0.8
}
fn default_easy_threshold() -> f64 {
    0.90
}
fn default_good_threshold() -> f64 {
    0.70
}
fn default_hard_threshold() -> f64 {
    0.50
}

/// Tunables of the answer scorer. Defaults are the shipped behaviour:
/// `final = 0.6 * keyword + 0.4 * similarity`, keyword hit above 0.8,
/// ratings cut at 0.90 / 0.70 / 0.50.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_keyword_weight")]
    pub keyword_weight: f64,
    #[serde(default = "default_similarity_weight")]
    pub similarity_weight: f64,
    /// A user word matches a reference keyword when similarity is strictly above this.
    #[serde(default = "default_keyword_match_threshold")]
    pub keyword_match_threshold: f64,
    #[serde(default = "default_easy_threshold")]
    pub easy_threshold: f64,
    #[serde(default = "default_good_threshold")]
    pub good_threshold: f64,
    #[serde(default = "default_hard_threshold")]
    pub hard_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword_weight: default_keyword_weight(),
            similarity_weight: default_similarity_weight(),
            keyword_match_threshold: default_keyword_match_threshold(),
            easy_threshold: default_easy_threshold(),
            good_threshold: default_good_threshold(),
            hard_threshold: default_hard_threshold(),
        }
    }
}

impl ScoringConfig {
    /// Load from an explicit path. TOML or JSON, picked by extension.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading scoring config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg = parse_config(&content, ext.as_str())
            .with_context(|| format!("parsing scoring config {}", path.display()))?;
        debug!(path = %path.display(), ?cfg, "scoring config loaded");
        Ok(cfg)
    }

    /// Resolve the config using env var + fallbacks:
    /// 1) $SCORING_CONFIG_PATH (must exist)
    /// 2) config/scoring.toml
    /// 3) config/scoring.json
    /// 4) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = env::var(ENV_SCORING_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from_file(&pb);
            }
            return Err(anyhow!(
                "{ENV_SCORING_CONFIG_PATH} points to non-existent path {}",
                pb.display()
            ));
        }
        for candidate in [DEFAULT_SCORING_TOML, DEFAULT_SCORING_JSON] {
            let pb = PathBuf::from(candidate);
            if pb.exists() {
                return Self::load_from_file(&pb);
            }
        }
        Ok(Self::default())
    }

    /// Clamp everything into [0,1], normalise the weights and keep the
    /// rating cut-offs ordered (easy >= good >= hard).
    pub fn sanitized(mut self) -> Self {
        let d = Self::default();
        let fix = |x: f64, fallback: f64| {
            if x.is_finite() {
                x.clamp(0.0, 1.0)
            } else {
                fallback
            }
        };

        self.keyword_weight = fix(self.keyword_weight, d.keyword_weight);
        self.similarity_weight = fix(self.similarity_weight, d.similarity_weight);
        let sum = self.keyword_weight + self.similarity_weight;
        if sum <= 0.0 {
            self.keyword_weight = d.keyword_weight;
            self.similarity_weight = d.similarity_weight;
        } else if sum != 1.0 {
            self.keyword_weight /= sum;
            self.similarity_weight /= sum;
        }

        self.keyword_match_threshold =
            fix(self.keyword_match_threshold, d.keyword_match_threshold);

        let mut cuts = [
            fix(self.easy_threshold, d.easy_threshold),
            fix(self.good_threshold, d.good_threshold),
            fix(self.hard_threshold, d.hard_threshold),
        ];
        cuts.sort_by(|a, b| b.total_cmp(a));
        self.easy_threshold = cuts[0];
        self.good_threshold = cuts[1];
        self.hard_threshold = cuts[2];

        self
    }
}

fn parse_config(s: &str, hint_ext: &str) -> Result<ScoringConfig> {
    let parsed = match hint_ext {
        "toml" => toml::from_str::<ScoringConfig>(s).map_err(anyhow::Error::from),
        "json" => serde_json::from_str::<ScoringConfig>(s).map_err(anyhow::Error::from),
        _ => serde_json::from_str::<ScoringConfig>(s)
            .map_err(anyhow::Error::from)
            .or_else(|_| toml::from_str::<ScoringConfig>(s).map_err(anyhow::Error::from)),
    };
    Ok(parsed?.sanitized())
}
