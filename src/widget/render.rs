//! Plain-text rendering of a [`Breakdown`]

use crate::engine::{Breakdown, HorizonBreakdown, Segment};
use crate::types::{Category, Horizon};

/// Horizons drawn as bars. The decade only contributes its duration line.
const BAR_HORIZONS: [Horizon; 5] = [
    Horizon::Day,
    Horizon::Week,
    Horizon::Month,
    Horizon::Year,
    Horizon::Lifetime,
];

/// Characters per segment, proportional to each percentage.
///
/// Widths come from cumulative rounding so they always add up to at most
/// `width`. Negative shares get no characters; any space left after the
/// last segment is padded with blanks.
pub fn segment_widths(percents: &[f64], width: usize) -> Vec<usize> {
    let mut widths = Vec::with_capacity(percents.len());
    let mut cumulative = 0.0_f64;
    let mut drawn = 0_usize;

    for &percent in percents {
        if percent.is_finite() && percent > 0.0 {
            cumulative = (cumulative + percent).min(100.0);
        }
        let end = ((cumulative / 100.0) * width as f64).round() as usize;
        let end = end.min(width);
        widths.push(end.saturating_sub(drawn));
        drawn = drawn.max(end);
    }

    widths
}

/// One segmented bar, e.g. `[zzzz~~WWWW##..]`.
pub fn render_bar(segments: &[Segment], width: usize) -> String {
    let percents: Vec<f64> = segments.iter().map(|s| s.percent).collect();
    let widths = segment_widths(&percents, width);

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for (segment, w) in segments.iter().zip(&widths) {
        bar.extend(std::iter::repeat(segment.category.glyph()).take(*w));
    }
    let used: usize = widths.iter().sum();
    bar.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    bar.push(']');
    bar
}

fn render_labels(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| format!("{} {}", s.name, s.label))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn legend(activity_label: &str) -> String {
    Category::ALL
        .iter()
        .map(|c| {
            let name = match c {
                Category::Activity => activity_label,
                other => other.display_name(),
            };
            format!("{} {}", c.glyph(), name)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_horizon(h: &HorizonBreakdown, width: usize) -> String {
    format!(
        "{}: {}\n  {}\n  {}\n",
        h.horizon.display_name(),
        h.activity_duration,
        render_bar(&h.segments, width),
        render_labels(&h.segments),
    )
}

/// Full text frame: headline, one block per horizon, legend.
pub fn render_text(breakdown: &Breakdown, width: usize) -> String {
    let day = breakdown
        .horizon(Horizon::Day)
        .map(|h| h.activity_duration.as_str())
        .unwrap_or_default();
    let mut out = format!(
        "Time each day spent on: {} ({})\n\n",
        breakdown.activity_label, day
    );

    for horizon in BAR_HORIZONS {
        if let Some(h) = breakdown.horizon(horizon) {
            out.push_str(&render_horizon(h, width));
        }
    }

    if let Some(decade) = breakdown.horizon(Horizon::Decade) {
        out.push_str(&format!(
            "{}: {}\n",
            decade.horizon.display_name(),
            decade.activity_duration
        ));
    }

    out.push('\n');
    out.push_str(&legend(&breakdown.activity_label));
    out
}
