pub mod date;
pub mod rewrite;

use crate::frame::Frame;
use rewrite::{binarize, scrub_education, scrub_job};

/// One normalized output table, ready for serialization.
#[derive(Debug)]
pub struct View {
    pub name: &'static str,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Per-column value rewrite applied during projection.
enum Rule {
    /// Copy the cell through unchanged.
    Keep,
    ScrubJob,
    ScrubEducation,
    /// "yes" → 1, anything else → 0.
    YesFlag,
    /// "success" → 1, anything else → 0.
    SuccessFlag,
}

impl Rule {
    fn apply(&self, cell: Option<&str>) -> Option<String> {
        match self {
            Rule::Keep => cell.map(str::to_string),
            Rule::ScrubJob => cell.map(scrub_job),
            Rule::ScrubEducation => cell.and_then(scrub_education),
            Rule::YesFlag => Some(binarize(cell, "yes").to_string()),
            Rule::SuccessFlag => Some(binarize(cell, "success").to_string()),
        }
    }
}

const CLIENT_COLUMNS: [(&str, Rule); 7] = [
    ("client_id", Rule::Keep),
    ("age", Rule::Keep),
    ("job", Rule::ScrubJob),
    ("marital", Rule::Keep),
    ("education", Rule::ScrubEducation),
    ("credit_default", Rule::YesFlag),
    ("mortgage", Rule::YesFlag),
];

const CAMPAIGN_COLUMNS: [(&str, Rule); 6] = [
    ("client_id", Rule::Keep),
    ("number_contacts", Rule::Keep),
    ("contact_duration", Rule::Keep),
    ("previous_campaign_contacts", Rule::Keep),
    ("previous_outcome", Rule::SuccessFlag),
    ("campaign_outcome", Rule::YesFlag),
];

/// Economics projection: output header first, accepted source spellings
/// second. The dotted variants show up in older extracts.
const ECONOMICS_COLUMNS: [(&str, &[&str]); 3] = [
    ("client_id", &["client_id"]),
    ("cons_price_idx", &["cons_price_idx", "cons.price.idx"]),
    (
        "euribor_three_months",
        &["euribor_three_months", "euribor.three.months"],
    ),
];

/// Project `wanted` against the frame, skipping columns no source table
/// carried, and apply each column's rewrite to every row.
fn project(frame: &Frame, name: &'static str, wanted: &[(&str, Rule)]) -> View {
    let present: Vec<(&str, usize, &Rule)> = wanted
        .iter()
        .filter_map(|(column, rule)| {
            frame.column_index(column).map(|idx| (*column, idx, rule))
        })
        .collect();

    let headers = present.iter().map(|(column, _, _)| column.to_string()).collect();
    let rows = frame
        .rows
        .iter()
        .map(|row| {
            present
                .iter()
                .map(|(_, idx, rule)| rule.apply(row[*idx].as_deref()))
                .collect()
        })
        .collect();

    View { name, headers, rows }
}

/// Client attributes: identity, demographics, and the two credit flags.
pub fn client_view(frame: &Frame) -> View {
    project(frame, "client", &CLIENT_COLUMNS)
}

/// Campaign interaction facts. The raw `day`/`month` pair is folded into a
/// single `last_contact_date` column (year fixed at 2022) and never emitted
/// as-is; the date column exists only when both sources do.
pub fn campaign_view(frame: &Frame) -> View {
    let mut view = project(frame, "campaign", &CAMPAIGN_COLUMNS);

    if let (Some(day), Some(month)) = (frame.column_index("day"), frame.column_index("month")) {
        view.headers.push("last_contact_date".to_string());
        for (source, row) in frame.rows.iter().zip(view.rows.iter_mut()) {
            row.push(date::contact_date(
                source[day].as_deref(),
                source[month].as_deref(),
            ));
        }
    }

    view
}

/// Economic indicators: pure projection, no rewrites. Source spelling
/// variants are normalized to the underscore output headers.
pub fn economics_view(frame: &Frame) -> View {
    let present: Vec<(&str, usize)> = ECONOMICS_COLUMNS
        .iter()
        .filter_map(|(output, aliases)| {
            aliases
                .iter()
                .find_map(|alias| frame.column_index(alias))
                .map(|idx| (*output, idx))
        })
        .collect();

    let headers = present.iter().map(|(output, _)| output.to_string()).collect();
    let rows = frame
        .rows
        .iter()
        .map(|row| present.iter().map(|(_, idx)| row[*idx].clone()).collect())
        .collect();

    View {
        name: "economics",
        headers,
        rows,
    }
}
