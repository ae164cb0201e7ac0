use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use matchday_refresh::fixtures_fetch::{filter_target_leagues, parse_day_events_json};
use matchday_refresh::page_patch::{marker_plan, patch_page};
use matchday_refresh::predictor::predict;
use matchday_refresh::render::{render_free_cards, render_premium_cards};
use matchday_refresh::types::MatchPick;

const EVENTS_JSON: &str = include_str!("../tests/fixtures/sportsdb_events.json");

const PAGE: &str = "<html><body>\n<!-- AUTO-INSERTED FREE MATCHES WILL APPEAR HERE -->\n\
<!-- AUTO-INSERTED PREMIUM MATCHES WILL APPEAR HERE -->\n\
<footer>Last Updated: never</footer>\n</body></html>";

fn sample_picks() -> Vec<MatchPick> {
    let mut rng = StdRng::seed_from_u64(1);
    parse_day_events_json(EVENTS_JSON)
        .expect("valid fixture json")
        .into_iter()
        .cycle()
        .take(8)
        .map(|fixture| MatchPick {
            prediction: predict(&mut rng),
            fixture,
        })
        .collect()
}

fn bench_parse_and_filter(c: &mut Criterion) {
    c.bench_function("parse_and_filter", |b| {
        b.iter(|| {
            let fixtures = parse_day_events_json(black_box(EVENTS_JSON)).unwrap();
            black_box(filter_target_leagues(fixtures).len());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let picks = sample_picks();
    c.bench_function("render_free_cards", |b| {
        b.iter(|| black_box(render_free_cards(black_box(&picks), 5).len()))
    });
}

fn bench_patch(c: &mut Criterion) {
    let picks = sample_picks();
    let mut rng = StdRng::seed_from_u64(2);
    let free_html = render_free_cards(&picks, 5);
    let premium_html = render_premium_cards(3, &mut rng);
    let now = chrono::Utc::now();

    c.bench_function("patch_page", |b| {
        b.iter(|| {
            black_box(
                patch_page(
                    black_box(PAGE),
                    &marker_plan(),
                    &free_html,
                    &premium_html,
                    now,
                )
                .len(),
            )
        })
    });
}

criterion_group!(benches, bench_parse_and_filter, bench_render, bench_patch);
criterion_main!(benches);
