//! Text and JSON rendering of listing pages.

use anyhow::{Context, Result};
use console::{pad_str, style, Alignment};
use serde::Serialize;
use talent_seeker::{ListView, PageWindow, Record, SortKey};

use crate::cli::Format;

const COLUMNS: [(&str, usize); 6] = [
    ("NAME", 20),
    ("TITLE", 26),
    ("RATE", 8),
    ("RATING", 6),
    ("AVAILABILITY", 12),
    ("LOCATION", 18),
];

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    #[serde(flatten)]
    window: PageWindow,
    sort: SortKey,
    page_numbers: Vec<usize>,
    records: &'a [&'a Record],
}

#[derive(Debug, Serialize)]
struct FeaturedReport<'a> {
    records: &'a [&'a Record],
}

/// Renders the current page of a search.
pub fn render_search(view: &ListView<'_, Record>, sort: SortKey, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let report = SearchReport {
                window: view.window(),
                sort,
                page_numbers: view.page_numbers(),
                records: view.page(),
            };
            to_json(&report)
        }
        Format::Text => Ok(search_text(view, sort)),
    }
}

/// Renders the featured carousel.
pub fn render_featured(records: &[&Record], format: Format) -> Result<String> {
    match format {
        Format::Json => to_json(&FeaturedReport { records }),
        Format::Text if records.is_empty() => Ok("No featured talent.\n".to_string()),
        Format::Text => Ok(table(records)),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to encode output")?;
    json.push('\n');
    Ok(json)
}

fn search_text(view: &ListView<'_, Record>, sort: SortKey) -> String {
    if view.filtered().is_empty() {
        return "No talent matches your filters.\n".to_string();
    }

    let window = view.window();
    let mut out = format!(
        "Showing {}-{} of {} talents, sorted by {}\n\n",
        window.first_item(),
        window.last_item(),
        window.total_items,
        sort.label()
    );
    out.push_str(&table(view.page()));
    out.push('\n');
    out.push_str(&pager(&window));
    out
}

fn table(records: &[&Record]) -> String {
    let mut out = String::new();

    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(name, width)| style(pad_str(name, *width, Alignment::Left, None)).bold().to_string())
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for record in records {
        let cells = row(record);
        let line: Vec<String> = cells
            .iter()
            .zip(COLUMNS.iter())
            .map(|(cell, (_, width))| pad_str(cell, *width, Alignment::Left, Some("…")).into_owned())
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn row(record: &Record) -> [String; 6] {
    let rate = match record.hourly_rate {
        Some(rate) => format!("${rate:.0}/h"),
        None => "-".to_string(),
    };
    let rating = match record.rating {
        Some(rating) if rating > 0.0 => format!("{rating:.1}"),
        _ => "new".to_string(),
    };
    [
        record.display_name().into_owned(),
        record.title.clone().unwrap_or_default(),
        rate,
        rating,
        record.availability.clone().unwrap_or_default(),
        record.location.clone().unwrap_or_default(),
    ]
}

fn pager(window: &PageWindow) -> String {
    let numbers: Vec<String> = window
        .page_numbers()
        .into_iter()
        .map(|n| {
            if n == window.page {
                style(format!("[{n}]")).bold().to_string()
            } else {
                n.to_string()
            }
        })
        .collect();
    let prev = if window.has_previous() { "<" } else { " " };
    let next = if window.has_next() { ">" } else { " " };
    format!(
        "{prev} {} {next}  (page {} of {})\n",
        numbers.join(" "),
        window.page,
        window.total_pages
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use talent_seeker::Query;

    fn records() -> Vec<Record> {
        (1..=14i64)
            .map(|i| {
                Record::new(i)
                    .with_name("Pat", &format!("No{i}"))
                    .with_title("Engineer")
                    .with_rate(10.0 * i as f64)
            })
            .collect()
    }

    #[test]
    fn text_output_has_summary_rows_and_pager() {
        let records = records();
        let view = Query::new().page(2).execute(&records);
        let text = render_search(&view, SortKey::Featured, Format::Text).unwrap();

        assert!(text.contains("Showing 13-14 of 14 talents, sorted by Featured"));
        assert!(text.contains("Pat No13"));
        assert!(text.contains("$140/h"));
        assert!(!text.contains("Pat No12"));
        assert!(text.contains("(page 2 of 2)"));
    }

    #[test]
    fn text_output_for_no_matches() {
        let records = records();
        let view = Query::new().search("nobody").execute(&records);
        let text = render_search(&view, SortKey::Featured, Format::Text).unwrap();
        assert_eq!(text, "No talent matches your filters.\n");
    }

    #[test]
    fn json_output_carries_window() {
        let records = records();
        let view = Query::new().sort(SortKey::RateHigh).execute(&records);
        let json = render_search(&view, SortKey::RateHigh, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["page"], 1);
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["total_items"], 14);
        assert_eq!(value["sort"], "rate_high");
        assert_eq!(value["page_numbers"], serde_json::json!([1, 2]));
        assert_eq!(value["records"].as_array().unwrap().len(), 12);
        assert_eq!(value["records"][0]["id"], 14);
    }

    #[test]
    fn featured_text_when_empty() {
        assert_eq!(
            render_featured(&[], Format::Text).unwrap(),
            "No featured talent.\n"
        );
    }

    #[test]
    fn rating_zero_reads_as_new() {
        let record = Record::new(1).with_rating(0.0);
        assert_eq!(row(&record)[3], "new");
        let record = Record::new(1).with_rating(4.3);
        assert_eq!(row(&record)[3], "4.3");
    }
}
