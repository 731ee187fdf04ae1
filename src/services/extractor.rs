// src/services/extractor.rs

//! Stadium table extraction.
//!
//! Locating the data table is heuristic: the wiki page anchors each section
//! heading with a stable id, and the stadium table is a fixed number of
//! `<table>` elements after that anchor (an infobox table sits in between).
//! A largest-wikitable fallback exists for pages without a stable anchor.
//! Both are pure functions over a parsed document, testable with fixtures.

use scraper::{ElementRef, Html, Node, Selector};

use crate::config::{STADIUM_SECTION_ANCHOR, TABLES_AFTER_ANCHOR, WIKI_ORIGIN};
use crate::error::{AppError, Result};
use crate::models::StadiumRecord;
use crate::utils::url::absolutize;

/// Column indices resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: usize,
    image: usize,
    capacity: usize,
    location: usize,
    surface: usize,
    roof_type: usize,
    teams: usize,
    opened: usize,
}

/// Extract stadium records from the configured section of the page.
///
/// Records come back without normalization: `current_teams` is empty and
/// `shared_stadium` false until the normalizer pass runs.
pub fn extract_stadiums(document: &Html) -> Result<Vec<StadiumRecord>> {
    let table = find_table_after_anchor(document, STADIUM_SECTION_ANCHOR, TABLES_AFTER_ANCHOR)?;
    extract_from_table(table)
}

/// Find the `offset`-th `<table>` (1-based) after the element with the given
/// id, walking the document's node sequence in order.
pub fn find_table_after_anchor<'a>(
    document: &'a Html,
    anchor_id: &str,
    offset: usize,
) -> Result<ElementRef<'a>> {
    let mut seen_anchor = false;
    let mut tables_seen = 0;

    for node in document.tree.nodes() {
        let Node::Element(element) = node.value() else {
            continue;
        };

        if !seen_anchor {
            if element.id() == Some(anchor_id) {
                seen_anchor = true;
            }
            continue;
        }

        if element.name() == "table" {
            tables_seen += 1;
            if tables_seen == offset {
                return ElementRef::wrap(node).ok_or_else(|| {
                    AppError::page_structure("table node is not an element")
                });
            }
        }
    }

    if !seen_anchor {
        Err(AppError::page_structure(format!(
            "section anchor '{anchor_id}' not found; the page sections may have changed"
        )))
    } else {
        Err(AppError::page_structure(format!(
            "expected {offset} tables after anchor '{anchor_id}', found {tables_seen}"
        )))
    }
}

/// Fallback for pages without a stable anchor: among tables carrying the
/// class marker, pick the one with the most rows.
pub fn find_largest_table<'a>(document: &'a Html, class_marker: &str) -> Result<ElementRef<'a>> {
    let table_sel = parse_selector(&format!("table.{class_marker}"))?;
    let row_sel = parse_selector("tr")?;

    document
        .select(&table_sel)
        .max_by_key(|table| table.select(&row_sel).count())
        .ok_or_else(|| {
            AppError::page_structure(format!("no table with class '{class_marker}' found"))
        })
}

/// Decode one table into stadium records, one per body row.
pub fn extract_from_table(table: ElementRef<'_>) -> Result<Vec<StadiumRecord>> {
    let row_sel = parse_selector("tr")?;
    let header_cell_sel = parse_selector("th")?;
    let cell_sel = parse_selector("th, td")?;
    let anchor_sel = parse_selector("a")?;

    let mut rows = table.select(&row_sel);
    let header = rows
        .next()
        .ok_or_else(|| AppError::page_structure("stadium table has no rows"))?;

    let labels: Vec<String> = header
        .select(&header_cell_sel)
        .map(|cell| clean_cell(&cell))
        .collect();
    let columns = resolve_columns(&labels)?;

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        let row_number = index + 1;
        let cells: Vec<ElementRef<'_>> = row.select(&cell_sel).collect();

        // A malformed row is skipped, not fatal to the pass
        match parse_row(row_number, &cells, columns, &anchor_sel) {
            Ok(record) => records.push(record),
            Err(error) => log::warn!("Skipping stadium row {row_number}: {error}"),
        }
    }

    Ok(records)
}

/// Resolve each required header label to its column index by exact match.
fn resolve_columns(labels: &[String]) -> Result<ColumnMap> {
    let index_of = |label: &str| -> Result<usize> {
        labels
            .iter()
            .position(|cell| cell == label)
            .ok_or_else(|| AppError::ColumnNotFound(label.to_string()))
    };

    Ok(ColumnMap {
        name: index_of("Name")?,
        image: index_of("Image")?,
        capacity: index_of("Capacity")?,
        location: index_of("Location")?,
        surface: index_of("Surface")?,
        roof_type: index_of("Roof type")?,
        teams: index_of("Team(s)")?,
        opened: index_of("Opened")?,
    })
}

fn parse_row(
    row_number: usize,
    cells: &[ElementRef<'_>],
    columns: ColumnMap,
    anchor_sel: &Selector,
) -> Result<StadiumRecord> {
    let cell = |index: usize| -> Result<&ElementRef<'_>> {
        cells.get(index).ok_or_else(|| {
            AppError::row_parse(
                row_number,
                format!("expected at least {} cells, found {}", index + 1, cells.len()),
            )
        })
    };

    let name = clean_cell(cell(columns.name)?);

    let capacity_text = clean_cell(cell(columns.capacity)?).replace(',', "");
    let capacity = capacity_text.parse::<u32>().map_err(|_| {
        AppError::row_parse(
            row_number,
            format!("capacity '{capacity_text}' is not an integer"),
        )
    })?;

    // Some rows have no image; that is not worth discarding the stadium
    let img_url = cell(columns.image)?
        .select(anchor_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| absolutize(WIKI_ORIGIN, href))
        .unwrap_or_default();

    let city = clean_cell(cell(columns.location)?);
    let surface = clean_cell(cell(columns.surface)?);
    let roof_type = clean_cell(cell(columns.roof_type)?);

    // Each linked team name is one raw mention
    let teams: Vec<String> = cell(columns.teams)?
        .select(anchor_sel)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|mention| !mention.is_empty())
        .collect();

    let year_text = clean_cell(cell(columns.opened)?);
    let year_opened = year_text.parse::<u16>().map_err(|_| {
        AppError::row_parse(
            row_number,
            format!("opened year '{year_text}' is not an integer"),
        )
    })?;

    Ok(StadiumRecord {
        name,
        capacity,
        img_url,
        city,
        surface,
        roof_type,
        teams,
        year_opened,
        shared_stadium: false,
        current_teams: Vec::new(),
        coordinates: None,
    })
}

/// Collapse a cell to trimmed text with trailing citation markers removed.
fn clean_cell(cell: &ElementRef<'_>) -> String {
    let text: String = cell.text().collect();
    strip_citations(text.trim()).trim().to_string()
}

/// Drop everything from the first `[` onward ("65,000[2]" -> "65,000").
fn strip_citations(text: &str) -> &str {
    match text.find('[') {
        Some(index) => &text[..index],
        None => text,
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AppError::selector(selector, format!("{e:?}")))
}
