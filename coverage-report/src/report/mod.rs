//! Static report rendering.
//!
//! Every document of a run is rendered in memory first and only then
//! written, so a rendering failure never leaves a partial report behind.
//!
//! Output layout:
//!
//! - `index.html`, `leaderboard.json`: the cross-traveler leaderboard
//! - `counties/<REGION>.html`: county coverage of all travelers combined
//! - `<traveler>/index.html`, `<traveler>/summary.json`: ranked system and region tables
//! - `<traveler>/systems/<system>.html`, `<traveler>/regions/<REGION>.html`: route status
//! - `<traveler>/counties/<REGION>.html`: county tables

mod error;
mod templates;

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use askama::Template;
use serde::Serialize;
use tracing::info;

pub use error::ReportError;
pub use templates::{
    CountiesTemplate, CountyRow, LeaderboardRow, LeaderboardTemplate, LinkView, ReportRow,
    RouteRow, RoutesTemplate, TravelerTemplate,
};

use crate::config::ReportConfig;
use crate::coverage::{
    CoverageCalculator, CoverageResult, TravelerCoverage, region_route_statuses,
    system_route_statuses,
};
use crate::domain::RegionCode;
use crate::inventory::InventoryIndex;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::ranking::{ColorScale, rank_by_percentage};
use crate::travel_log::TravelLog;

/// One rendered file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub contents: String,
}

/// Machine-readable rows of one traveler's report.
#[derive(Debug, Clone, Serialize)]
pub struct TravelerSummary {
    pub traveler: String,
    pub overall: ReportRow,
    pub systems: Vec<ReportRow>,
    pub regions: Vec<ReportRow>,
    pub counties: BTreeMap<String, Vec<CountyRow>>,
}

/// Every document of a run, ready to write.
#[derive(Debug, Clone, Default)]
pub struct Report {
    documents: Vec<Document>,
}

impl Report {
    /// Compute coverage for every log and render all documents.
    ///
    /// `generated` is stamped into each page footer.
    pub fn build(
        index: &InventoryIndex,
        logs: &[TravelLog],
        config: &ReportConfig,
        generated: &str,
    ) -> Result<Self, ReportError> {
        let renderer = Renderer {
            index,
            completion: config.completion_scale,
            county: config.county_scale,
            generated,
        };
        let calculator = CoverageCalculator::new(index);

        let mut documents = Vec::new();
        let mut coverages = Vec::with_capacity(logs.len());

        for log in logs {
            let coverage = calculator.traveler(log);
            documents.extend(renderer.traveler_documents(&coverage, log)?);
            coverages.push(coverage);
        }

        let leaderboard = Leaderboard::from_coverages(&coverages);
        documents.extend(renderer.leaderboard_documents(&leaderboard)?);

        let everyone = TravelLog::union("all travelers", logs);
        for (region, results) in calculator.counties(&everyone) {
            documents.push(renderer.counties_document(
                Path::new("counties"),
                None,
                &region,
                &results,
            )?);
        }

        check_paths(&documents)?;
        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Find a document by its relative path.
    pub fn document(&self, path: impl AsRef<Path>) -> Option<&Document> {
        self.documents.iter().find(|d| d.path == path.as_ref())
    }

    /// Write every document under `output_dir`. Returns the number written.
    pub fn write(&self, output_dir: &Path) -> Result<usize, ReportError> {
        for document in &self.documents {
            let path = output_dir.join(&document.path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| ReportError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            std::fs::write(&path, &document.contents)
                .map_err(|source| ReportError::Io { path, source })?;
        }
        info!(
            documents = self.documents.len(),
            dir = %output_dir.display(),
            "wrote report"
        );
        Ok(self.documents.len())
    }
}

/// Binds coverage results to templates.
struct Renderer<'a> {
    index: &'a InventoryIndex,
    completion: ColorScale,
    county: ColorScale,
    generated: &'a str,
}

impl Renderer<'_> {
    fn traveler_documents(
        &self,
        coverage: &TravelerCoverage,
        log: &TravelLog,
    ) -> Result<Vec<Document>, ReportError> {
        let name = file_name(&coverage.traveler);
        if RESERVED_NAMES.contains(&name.as_str()) {
            return Err(ReportError::PathConflict { path: name.into() });
        }
        let dir = PathBuf::from(name);
        let mut documents = Vec::new();

        for (system, result) in self.index.systems().zip(&coverage.systems) {
            let routes = system_route_statuses(system, self.index, log)
                .iter()
                .map(|status| RouteRow::from_status(status, true))
                .collect();
            let page = RoutesTemplate {
                generated: self.generated.to_string(),
                traveler: coverage.traveler.clone(),
                title: system.label().to_string(),
                summary: ReportRow::from_result(result, &self.completion, None),
                routes,
            };
            documents.push(Document {
                path: dir.join("systems").join(html_name(&system.id)),
                contents: page.render()?,
            });
        }

        for (region, result) in self.index.regions().zip(&coverage.regions) {
            let routes = region_route_statuses(region, log)
                .iter()
                .map(|status| RouteRow::from_status(status, false))
                .collect();
            let page = RoutesTemplate {
                generated: self.generated.to_string(),
                traveler: coverage.traveler.clone(),
                title: region.label().to_string(),
                summary: ReportRow::from_result(result, &self.completion, None),
                routes,
            };
            documents.push(Document {
                path: dir.join("regions").join(html_name(region.region.as_str())),
                contents: page.render()?,
            });
        }

        let mut county_rows = BTreeMap::new();
        for (region, results) in &coverage.counties {
            documents.push(self.counties_document(
                &dir.join("counties"),
                Some(&coverage.traveler),
                region,
                results,
            )?);
            county_rows.insert(region.to_string(), self.county_rows(region, results));
        }

        let overall = LeaderboardEntry::from_systems(&coverage.traveler, &coverage.systems);
        let overall = ReportRow::from_result(
            &CoverageResult::new(
                &coverage.traveler,
                &coverage.traveler,
                overall.total_matched,
                overall.total_possible,
            ),
            &self.completion,
            None,
        );
        let systems: Vec<ReportRow> = rank_by_percentage(coverage.systems.clone())
            .iter()
            .map(|result| {
                let tier = self.index.system(&result.id).and_then(|s| s.tier);
                self.linked_row(result, "systems").with_tier(tier)
            })
            .collect();
        let regions: Vec<ReportRow> = rank_by_percentage(coverage.regions.clone())
            .iter()
            .map(|result| self.linked_row(result, "regions"))
            .collect();

        let page = TravelerTemplate {
            generated: self.generated.to_string(),
            traveler: coverage.traveler.clone(),
            overall: overall.clone(),
            systems: systems.clone(),
            regions: regions.clone(),
            county_regions: county_links(coverage.counties.keys()),
        };
        documents.push(Document {
            path: dir.join("index.html"),
            contents: page.render()?,
        });

        let summary = TravelerSummary {
            traveler: coverage.traveler.clone(),
            overall,
            systems,
            regions,
            counties: county_rows,
        };
        documents.push(Document {
            path: dir.join("summary.json"),
            contents: serde_json::to_string_pretty(&summary)?,
        });

        Ok(documents)
    }

    fn leaderboard_documents(&self, leaderboard: &Leaderboard) -> Result<Vec<Document>, ReportError> {
        let rows: Vec<LeaderboardRow> = leaderboard
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let link = format!("{}/index.html", file_name(&entry.traveler));
                LeaderboardRow::from_entry(i + 1, entry, &self.completion, link)
            })
            .collect();

        let page = LeaderboardTemplate {
            generated: self.generated.to_string(),
            rows: rows.clone(),
            county_regions: county_links(self.index.county_regions()),
        };

        Ok(vec![
            Document {
                path: PathBuf::from("index.html"),
                contents: page.render()?,
            },
            Document {
                path: PathBuf::from("leaderboard.json"),
                contents: serde_json::to_string_pretty(&rows)?,
            },
        ])
    }

    fn counties_document(
        &self,
        dir: &Path,
        traveler: Option<&str>,
        region: &RegionCode,
        results: &[CoverageResult],
    ) -> Result<Document, ReportError> {
        let page = CountiesTemplate {
            generated: self.generated.to_string(),
            traveler: traveler.map(str::to_string),
            region: self.region_label(region),
            counties: self.county_rows(region, results),
        };
        Ok(Document {
            path: dir.join(html_name(region.as_str())),
            contents: page.render()?,
        })
    }

    /// County rows in county-name order, each with its route range.
    fn county_rows(&self, region: &RegionCode, results: &[CoverageResult]) -> Vec<CountyRow> {
        let counties: Vec<_> = self.index.counties_in(region).collect();
        results
            .iter()
            .map(|result| {
                let inventory = counties.iter().find(|c| c.county == result.id).copied();
                CountyRow::new(result, inventory, &self.county)
            })
            .collect()
    }

    /// A row linking to its status page under `subdir`.
    fn linked_row(&self, result: &CoverageResult, subdir: &str) -> ReportRow {
        let link = format!("{subdir}/{}", html_name(&result.id));
        ReportRow::from_result(result, &self.completion, Some(link))
    }

    fn region_label(&self, region: &RegionCode) -> String {
        self.index
            .region(region)
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| region.to_string())
    }
}

/// Links to per-region county pages, relative to a directory holding `counties/`.
fn county_links<'a>(regions: impl IntoIterator<Item = &'a RegionCode>) -> Vec<LinkView> {
    regions
        .into_iter()
        .map(|region| LinkView {
            label: region.to_string(),
            href: format!("counties/{}", html_name(region.as_str())),
        })
        .collect()
}

/// Top-level names a traveler directory may not take.
const RESERVED_NAMES: [&str; 3] = ["index.html", "leaderboard.json", "counties"];

/// Reject documents whose paths coincide, or where one document's path is a
/// directory of another. Ids are mapped to file names lossily, so distinct
/// ids can collide here.
fn check_paths(documents: &[Document]) -> Result<(), ReportError> {
    let mut files = HashSet::with_capacity(documents.len());
    for document in documents {
        if !files.insert(document.path.as_path()) {
            return Err(ReportError::PathConflict {
                path: document.path.clone(),
            });
        }
    }
    for document in documents {
        if let Some(dir) = document.path.ancestors().skip(1).find(|a| files.contains(a)) {
            return Err(ReportError::PathConflict {
                path: dir.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Make an id safe to use as a single path component.
fn file_name(id: &str) -> String {
    let name: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    match name.as_str() {
        "" | "." | ".." => format!("_{name}"),
        _ => name,
    }
}

fn html_name(id: &str) -> String {
    format!("{}.html", file_name(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryIndexBuilder;
    use tempfile::tempdir;

    fn fixture() -> (InventoryIndex, Vec<TravelLog>) {
        let al = RegionCode::parse("AL").unwrap();
        let index = InventoryIndexBuilder::new()
            .system_table("usai", "Code;Region;Route\nI10;AL;I-10\nI20;AL;I-20\nI30;AL;I-30\n")
            .region_table(al, "Code;Region;Route\nI10;AL;I-10\nI20;AL;I-20\nI30;AL;I-30\n")
            .county_table("h\nA;GA;7;Fulton\nB;GA;9;Fulton\n")
            .build();
        let logs = vec![
            TravelLog::parse("alice", "AL I-10 https://example.com/a.jpg\nAL I-20\nGA 7\n"),
            TravelLog::parse("bob", "AL I-30\nGA 9\n"),
        ];
        (index, logs)
    }

    fn build() -> Report {
        let (index, logs) = fixture();
        let config = ReportConfig::new("data", "lists", "out");
        Report::build(&index, &logs, &config, "2024-01-01 00:00").unwrap()
    }

    #[test]
    fn renders_every_page() {
        let report = build();
        for path in [
            "index.html",
            "leaderboard.json",
            "counties/GA.html",
            "alice/index.html",
            "alice/summary.json",
            "alice/systems/usai.html",
            "alice/regions/AL.html",
            "alice/counties/GA.html",
            "bob/index.html",
        ] {
            assert!(report.document(path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn leaderboard_json_is_ranked() {
        let report = build();
        let json: serde_json::Value =
            serde_json::from_str(&report.document("leaderboard.json").unwrap().contents).unwrap();
        assert_eq!(json[0]["label"], "alice");
        assert_eq!(json[0]["rank"], 1);
        assert_eq!(json[0]["matched"], 2);
        assert_eq!(json[1]["label"], "bob");
        assert_eq!(json[1]["total"], 3);
    }

    #[test]
    fn summary_carries_county_ranges() {
        let report = build();
        let json: serde_json::Value =
            serde_json::from_str(&report.document("alice/summary.json").unwrap().contents).unwrap();
        assert_eq!(json["overall"]["matched"], 2);
        let fulton = &json["counties"]["GA"][0];
        assert_eq!(fulton["label"], "Fulton");
        assert_eq!(fulton["matched"], 1);
        assert_eq!(fulton["lowest"], 7);
        assert_eq!(fulton["highest"], 9);
    }

    #[test]
    fn combined_county_page_covers_everyone() {
        let report = build();
        let html = &report.document("counties/GA.html").unwrap().contents;
        assert!(html.contains("All travelers"));
        assert!(html.contains("100.00%"));
    }

    #[test]
    fn route_page_shows_evidence() {
        let report = build();
        let html = &report.document("alice/systems/usai.html").unwrap().contents;
        assert!(html.contains("AL I-10"));
        assert!(html.contains("example.com"));
        assert!(html.contains("66.67%"));
    }

    #[test]
    fn writes_documents_to_disk() {
        let report = build();
        let dir = tempdir().unwrap();

        let written = report.write(dir.path()).unwrap();

        assert_eq!(written, report.documents().len());
        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("alice/systems/usai.html").is_file());
        assert!(dir.path().join("counties/GA.html").is_file());
    }

    #[test]
    fn no_travelers_still_renders_leaderboard() {
        let (index, _) = fixture();
        let config = ReportConfig::new("data", "lists", "out");
        let report = Report::build(&index, &[], &config, "").unwrap();
        assert!(report.document("index.html").is_some());
        assert_eq!(report.document("leaderboard.json").unwrap().contents, "[]");
    }

    #[test]
    fn colliding_traveler_names_are_rejected() {
        let (index, _) = fixture();
        let logs = vec![
            TravelLog::parse("a b", "AL I-10\n"),
            TravelLog::parse("a_b", "AL I-20\n"),
        ];
        let config = ReportConfig::new("data", "lists", "out");

        let err = Report::build(&index, &logs, &config, "").unwrap_err();
        assert!(matches!(err, ReportError::PathConflict { .. }));
    }

    #[test]
    fn traveler_cannot_shadow_top_level_outputs() {
        let (index, _) = fixture();
        let config = ReportConfig::new("data", "lists", "out");
        for name in ["counties", "index.html", "leaderboard.json"] {
            let logs = vec![TravelLog::parse(name, "AL I-10\n")];
            let err = Report::build(&index, &logs, &config, "").unwrap_err();
            assert!(matches!(err, ReportError::PathConflict { .. }), "{name}");
        }
    }

    #[test]
    fn nested_paths_conflict_with_files() {
        let documents = vec![
            Document {
                path: PathBuf::from("amy"),
                contents: String::new(),
            },
            Document {
                path: PathBuf::from("amy/index.html"),
                contents: String::new(),
            },
        ];
        let err = check_paths(&documents).unwrap_err();
        assert_eq!(
            err.to_string(),
            "output path amy is claimed by more than one document"
        );
        assert!(check_paths(&documents[1..]).is_ok());
    }

    #[test]
    fn file_names_are_single_components() {
        assert_eq!(file_name("usai"), "usai");
        assert_eq!(file_name("a/b c"), "a_b_c");
        assert_eq!(file_name(".."), "_..");
        assert_eq!(file_name(""), "_");
        assert_eq!(html_name("AL"), "AL.html");
    }
}
