//! Semicolon-delimited reference table rows.
//!
//! Route tables have the shape `routeCode;region;designation[;county]`.
//! The first line is a header and is always discarded, whatever it contains.

use tracing::debug;

use crate::domain::RegionCode;

/// Minimum number of fields a route row must carry.
const MIN_ROUTE_FIELDS: usize = 3;

/// One well-formed route row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    pub code: String,
    pub region: RegionCode,
    pub designation: String,
    pub county: Option<String>,
}

/// Split a table into trimmed fields, skipping the header and blank lines.
pub fn data_rows(contents: &str) -> impl Iterator<Item = Vec<&str>> {
    contents
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(split_fields)
}

/// Split one line on `;` and trim every field.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(';').map(str::trim).collect()
}

/// Parse every well-formed route row of a table.
///
/// Rows with fewer than three fields, an invalid region or an empty
/// designation are dropped.
pub fn route_rows(contents: &str) -> Vec<RouteRow> {
    data_rows(contents)
        .filter_map(|fields| {
            let row = parse_route_row(&fields);
            if row.is_none() {
                debug!(row = ?fields, "skipping malformed reference row");
            }
            row
        })
        .collect()
}

fn parse_route_row(fields: &[&str]) -> Option<RouteRow> {
    if fields.len() < MIN_ROUTE_FIELDS {
        return None;
    }

    let region = RegionCode::parse(fields[1]).ok()?;
    let designation = fields[2];
    if designation.is_empty() {
        return None;
    }

    let county = fields
        .get(3)
        .filter(|c| !c.is_empty())
        .map(|c| c.to_string());

    Some(RouteRow {
        code: fields[0].to_string(),
        region,
        designation: designation.to_string(),
        county,
    })
}
