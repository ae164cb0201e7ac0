use std::env;
use std::path::PathBuf;

use crate::page_patch::{PatchPlan, delimited_plan, marker_plan};

/// Pool of picks eligible for the free section.
pub const FREE_POOL: usize = 10;
/// Cards actually rendered into the free section.
pub const FREE_CARD_LIMIT: usize = 5;
pub const PREMIUM_CARD_LIMIT: usize = 3;
/// Fixtures fabricated when the provider yields nothing usable.
pub const FALLBACK_FIXTURES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchMode {
    /// Consume a literal marker comment per section.
    Marker,
    /// Rebuild the body between start/end tags per section.
    Section,
}

impl PatchMode {
    pub fn plan(self) -> PatchPlan {
        match self {
            PatchMode::Marker => marker_plan(),
            PatchMode::Section => delimited_plan(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub page_path: PathBuf,
    /// YYYY-MM-DD override of "today" for the provider query.
    pub date: Option<String>,
    pub patch_mode: PatchMode,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let page_path = opt_env("PAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("index.html"));
        let date = opt_env("FIXTURES_DATE");
        let patch_mode = match opt_env("PATCH_MODE").map(|v| v.to_ascii_lowercase()) {
            Some(mode) if mode == "section" => PatchMode::Section,
            _ => PatchMode::Marker,
        };

        Self {
            page_path,
            date,
            patch_mode,
        }
    }
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|val| {
        let trimmed = val.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
