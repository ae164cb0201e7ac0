use std::fs;

use anyhow::{Context, Result};
use chrono::Utc;
use rand::Rng;

use crate::config::{
    AppConfig, FALLBACK_FIXTURES, FREE_CARD_LIMIT, FREE_POOL, PREMIUM_CARD_LIMIT,
};
use crate::fallback;
use crate::fixtures_fetch;
use crate::page_patch::patch_page;
use crate::predictor::predict;
use crate::render::{render_free_cards, render_premium_cards};
use crate::types::{Fixture, MatchPick};

/// One full refresh: read the page, acquire picks, render both sections,
/// patch, write back. Returns the number of free cards inserted.
pub fn run_update(config: &AppConfig) -> Result<usize> {
    let page = fs::read_to_string(&config.page_path)
        .with_context(|| format!("failed reading {}", config.page_path.display()))?;

    let mut rng = rand::thread_rng();
    let picks = load_matchday(config, &mut rng);

    let free: Vec<MatchPick> = picks.into_iter().take(FREE_POOL).collect();
    let free_html = render_free_cards(&free, FREE_CARD_LIMIT);
    let premium_html = render_premium_cards(PREMIUM_CARD_LIMIT, &mut rng);

    let plan = config.patch_mode.plan();
    let updated = patch_page(&page, &plan, &free_html, &premium_html, Utc::now());

    fs::write(&config.page_path, updated)
        .with_context(|| format!("failed writing {}", config.page_path.display()))?;

    Ok(free.len().min(FREE_CARD_LIMIT))
}

/// Fixture list with predictions attached, provider-first with the static
/// fallback behind it.
pub fn load_matchday(config: &AppConfig, rng: &mut impl Rng) -> Vec<MatchPick> {
    let date = config
        .date
        .clone()
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

    acquire_fixtures(&date, rng)
        .into_iter()
        .map(|fixture| MatchPick {
            prediction: predict(rng),
            fixture,
        })
        .collect()
}

fn acquire_fixtures(date: &str, rng: &mut impl Rng) -> Vec<Fixture> {
    match fixtures_fetch::fetch_day_fixtures(date) {
        Ok(events) => {
            let kept = fixtures_fetch::filter_target_leagues(events);
            if kept.is_empty() {
                eprintln!("[WARN] no fixtures from target leagues, using fallback");
                fallback::generate_fixtures(FALLBACK_FIXTURES, rng)
            } else {
                kept
            }
        }
        Err(err) => {
            eprintln!("[WARN] fixture fetch failed ({err}), using fallback");
            fallback::generate_fixtures(FALLBACK_FIXTURES, rng)
        }
    }
}
