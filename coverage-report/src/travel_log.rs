//! Traveler logs.
//!
//! A log is plain text with one documented route per line:
//!
//! ```text
//! # comment
//! AL I-10 https://example.com/photo.jpg
//! AL I-20
//! ```
//!
//! Each line is `REGION ROUTE [EVIDENCE_URL]`. Blank and `#` lines are
//! ignored; lines that do not yield a region and a route, or that are not
//! valid UTF-8, are dropped with a warning.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::domain::RegionCode;
use crate::inventory::{InventoryError, file_stem, files_with_extension, read_bytes};

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelLogEntry {
    pub region: RegionCode,
    pub designation: String,
    pub evidence: Option<String>,
}

impl TravelLogEntry {
    /// Parse one line. Returns `None` for comments, blanks and malformed lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (region, rest) = next_token(line)?;
        let (designation, rest) = next_token(rest)?;
        let evidence = rest.trim();

        Some(Self {
            region: RegionCode::parse(region).ok()?,
            designation: designation.to_string(),
            evidence: (!evidence.is_empty()).then(|| evidence.to_string()),
        })
    }
}

/// Split off the first whitespace-delimited token.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(end) => Some((&s[..end], &s[end..])),
        None => Some((s, "")),
    }
}

fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// The set of routes one traveler has documented.
///
/// Each `(region, designation)` appears once; when a route is logged more
/// than once, the first evidence URL given for it is kept.
#[derive(Debug, Clone, Default)]
pub struct TravelLog {
    traveler: String,
    routes: HashMap<RegionCode, HashMap<String, Option<String>>>,
    order: Vec<(RegionCode, String)>,
}

impl TravelLog {
    /// Create an empty log.
    pub fn new(traveler: impl Into<String>) -> Self {
        Self {
            traveler: traveler.into(),
            ..Self::default()
        }
    }

    /// Parse a whole log file.
    pub fn parse(traveler: impl Into<String>, contents: &str) -> Self {
        let mut log = Self::new(traveler);
        for (number, line) in contents.lines().enumerate() {
            log.parse_line(number + 1, line);
        }
        log
    }

    /// Parse a log file that may not be valid UTF-8.
    ///
    /// Lines that fail to decode are dropped with a warning; the rest of the
    /// file still loads.
    pub fn parse_bytes(traveler: impl Into<String>, contents: &[u8]) -> Self {
        let mut log = Self::new(traveler);
        for (number, raw) in contents.split(|&b| b == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            match std::str::from_utf8(raw) {
                Ok(line) => log.parse_line(number + 1, line),
                Err(err) => warn!(
                    traveler = %log.traveler,
                    line = number + 1,
                    error = %err,
                    "skipping log line that is not valid UTF-8"
                ),
            }
        }
        log
    }

    fn parse_line(&mut self, number: usize, line: &str) {
        match TravelLogEntry::parse(line) {
            Some(entry) => self.insert(entry),
            None if is_ignorable(line) => {}
            None => warn!(
                traveler = %self.traveler,
                line = number,
                content = line.trim(),
                "skipping malformed log line"
            ),
        }
    }

    /// Combine several logs; a route is present if any of them lists it.
    pub fn union<'a>(traveler: impl Into<String>, logs: impl IntoIterator<Item = &'a TravelLog>) -> Self {
        let mut merged = Self::new(traveler);
        for log in logs {
            for entry in log.entries() {
                merged.insert(entry);
            }
        }
        merged
    }

    /// Record an entry. Duplicates collapse into one route.
    pub fn insert(&mut self, entry: TravelLogEntry) {
        let region_routes = self.routes.entry(entry.region.clone()).or_default();
        match region_routes.get_mut(&entry.designation) {
            Some(evidence) => {
                if evidence.is_none() {
                    *evidence = entry.evidence;
                }
            }
            None => {
                region_routes.insert(entry.designation.clone(), entry.evidence);
                self.order.push((entry.region, entry.designation));
            }
        }
    }

    pub fn traveler(&self) -> &str {
        &self.traveler
    }

    /// Whether the traveler documented `(region, designation)`.
    pub fn contains(&self, region: &RegionCode, designation: &str) -> bool {
        self.routes
            .get(region)
            .is_some_and(|routes| routes.contains_key(designation))
    }

    /// Evidence URL for a documented route, if one was given.
    pub fn evidence(&self, region: &RegionCode, designation: &str) -> Option<&str> {
        self.routes
            .get(region)?
            .get(designation)?
            .as_deref()
    }

    /// Number of distinct documented routes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Documented routes in the order they first appeared.
    pub fn entries(&self) -> impl Iterator<Item = TravelLogEntry> + '_ {
        self.order.iter().map(|(region, designation)| TravelLogEntry {
            region: region.clone(),
            designation: designation.clone(),
            evidence: self.evidence(region, designation).map(str::to_string),
        })
    }
}

/// Load every `*.list` file in `dir`, ordered by traveler id.
pub fn load_travel_logs(dir: &Path) -> Result<Vec<TravelLog>, InventoryError> {
    let mut logs = Vec::new();
    for path in files_with_extension(dir, "list")? {
        let Some(traveler) = file_stem(&path) else {
            continue;
        };
        let contents = read_bytes(&path)?;
        let log = TravelLog::parse_bytes(traveler, &contents);
        info!(traveler = log.traveler(), routes = log.len(), "loaded travel log");
        logs.push(log);
    }
    Ok(logs)
}
