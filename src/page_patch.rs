use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::render::display_offset;

/// Point markers the live site carries. Each is consumed by the insertion,
/// matching how the page was patched historically.
pub const FREE_MARKER: &str = "<!-- AUTO-INSERTED FREE MATCHES WILL APPEAR HERE -->";
pub const PREMIUM_MARKER: &str = "<!-- AUTO-INSERTED PREMIUM MATCHES WILL APPEAR HERE -->";

/// Delimited-section tags for pages that keep their insertion points across
/// runs. The tags survive the patch; only the body between them is rebuilt.
pub const FREE_SECTION_START: &str = "<!-- FREE PICKS START -->";
pub const FREE_SECTION_END: &str = "<!-- FREE PICKS END -->";
pub const PREMIUM_SECTION_START: &str = "<!-- PREMIUM PICKS START -->";
pub const PREMIUM_SECTION_END: &str = "<!-- PREMIUM PICKS END -->";

const FREE_SECTION_HEADER: &str = r#"<h3 class="section-title">Today's Free AI Picks</h3>"#;
const PREMIUM_SECTION_HEADER: &str = r#"<h3 class="section-title">Elite Premium Picks</h3>"#;

static LAST_UPDATED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Last Updated: [^<]*").expect("valid timestamp pattern"));

/// The two substitution strategies the page format admits. The caller picks
/// one explicitly; nothing is inferred from the document.
#[derive(Debug, Clone, Copy)]
pub enum SectionTarget {
    /// Replace the first occurrence of a literal marker with the fragment.
    Marker(&'static str),
    /// Replace everything between `start` and the first `end` after it with
    /// a static header plus the fragment, keeping both tags.
    Delimited {
        start: &'static str,
        end: &'static str,
        header: &'static str,
    },
}

/// Insertion points for one patch run.
#[derive(Debug, Clone, Copy)]
pub struct PatchPlan {
    pub free: SectionTarget,
    pub premium: SectionTarget,
}

pub fn marker_plan() -> PatchPlan {
    PatchPlan {
        free: SectionTarget::Marker(FREE_MARKER),
        premium: SectionTarget::Marker(PREMIUM_MARKER),
    }
}

pub fn delimited_plan() -> PatchPlan {
    PatchPlan {
        free: SectionTarget::Delimited {
            start: FREE_SECTION_START,
            end: FREE_SECTION_END,
            header: FREE_SECTION_HEADER,
        },
        premium: SectionTarget::Delimited {
            start: PREMIUM_SECTION_START,
            end: PREMIUM_SECTION_END,
            header: PREMIUM_SECTION_HEADER,
        },
    }
}

/// Applies both section substitutions and refreshes the timestamp. A target
/// missing from the document leaves that region untouched.
pub fn patch_page(
    doc: &str,
    plan: &PatchPlan,
    free_html: &str,
    premium_html: &str,
    now: DateTime<Utc>,
) -> String {
    let doc = apply_section(doc, plan.free, free_html);
    let doc = apply_section(&doc, plan.premium, premium_html);
    update_timestamp(&doc, now)
}

pub fn apply_section(doc: &str, target: SectionTarget, fragment: &str) -> String {
    match target {
        SectionTarget::Marker(marker) => doc.replacen(marker, fragment, 1),
        SectionTarget::Delimited { start, end, header } => {
            let Some(start_at) = doc.find(start) else {
                return doc.to_string();
            };
            let body_start = start_at + start.len();
            let Some(end_rel) = doc[body_start..].find(end) else {
                return doc.to_string();
            };
            let body_end = body_start + end_rel;

            format!(
                "{}\n{header}\n{fragment}\n{}",
                &doc[..body_start],
                &doc[body_end..],
            )
        }
    }
}

/// Rewrites the first `Last Updated:` label in place. Running the patch
/// again keeps exactly one occurrence with a fresher value.
pub fn update_timestamp(doc: &str, now: DateTime<Utc>) -> String {
    let stamp = format!(
        "Last Updated: {}",
        now.with_timezone(&display_offset()).format("%a, %d %b, %H:%M")
    );
    LAST_UPDATED_RE
        .replacen(doc, 1, NoExpand(&stamp))
        .into_owned()
}
