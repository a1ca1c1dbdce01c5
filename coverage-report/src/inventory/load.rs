//! Loading reference tables from a data directory.
//!
//! Layout under the data directory:
//!
//! - `systems/<system>.csv`, one table per system
//! - `regions/<REGION>.csv`, one table per region (optional)
//! - `counties/*.csv`, county-bearing tables (optional)
//! - `system_names.csv`, `system_tiers.csv`, `region_names.csv` lookups (optional)

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::InventoryError;
use super::index::{InventoryIndex, InventoryIndexBuilder};
use super::names::NameTables;
use crate::config::ReportConfig;
use crate::domain::RegionCode;

/// Load every reference table named by `config`.
pub fn load_index(config: &ReportConfig) -> Result<InventoryIndex, InventoryError> {
    let names = load_names(config)?;
    let mut builder = InventoryIndexBuilder::new().names(names);

    for path in files_with_extension(&config.systems_dir(), "csv")? {
        let Some(system) = file_stem(&path) else {
            continue;
        };
        let contents = read_file(&path)?;
        builder = builder.system_table(&system, &contents);
    }

    let regions_dir = config.regions_dir();
    if regions_dir.is_dir() {
        for path in files_with_extension(&regions_dir, "csv")? {
            let Some(region) = file_stem(&path).and_then(|s| RegionCode::parse(&s).ok()) else {
                debug!(path = %path.display(), "skipping region table with unusable name");
                continue;
            };
            let contents = read_file(&path)?;
            builder = builder.region_table(region, &contents);
        }
    } else {
        debug!(dir = %regions_dir.display(), "no region tables");
    }

    let counties_dir = config.counties_dir();
    if counties_dir.is_dir() {
        for path in files_with_extension(&counties_dir, "csv")? {
            let contents = read_file(&path)?;
            builder = builder.county_table(&contents);
        }
    } else {
        debug!(dir = %counties_dir.display(), "no county tables");
    }

    let index = builder.build();
    info!(
        systems = index.systems().count(),
        regions = index.regions().count(),
        counties = index.counties().count(),
        "loaded inventory"
    );
    Ok(index)
}

/// Load whichever lookup tables exist.
fn load_names(config: &ReportConfig) -> Result<NameTables, InventoryError> {
    let mut names = NameTables::new();

    let path = config.system_names_path();
    if path.is_file() {
        names.load_system_names(&path, &read_file(&path)?)?;
    }

    let path = config.system_tiers_path();
    if path.is_file() {
        names.load_system_tiers(&path, &read_file(&path)?)?;
    }

    let path = config.region_names_path();
    if path.is_file() {
        names.load_region_names(&path, &read_file(&path)?)?;
    }

    Ok(names)
}

/// Files in `dir` with the given extension, sorted by path.
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, InventoryError> {
    let io_err = |source| InventoryError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read a whole file as UTF-8.
pub fn read_file(path: &Path) -> Result<String, InventoryError> {
    std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole file as raw bytes.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, InventoryError> {
    std::fs::read(path).map_err(|source| InventoryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// The file name without its extension.
pub fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn loads_full_layout() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        write(
            &data.join("systems").join("usai.csv"),
            "Code;Region;Route\nI10;AL;I-10\nI20;AL;I-20\n",
        );
        write(&data.join("systems").join("notes.txt"), "ignored");
        write(
            &data.join("regions").join("AL.csv"),
            "Code;Region;Route\nI20;AL;I-20\nI10;AL;I-10\n",
        );
        write(
            &data.join("counties").join("AL_counties.csv"),
            "Code;Region;Route;County\nI10;AL;I-10;Mobile\n",
        );
        write(&data.join("region_names.csv"), "Region;Name\nAL;Alabama\n");

        let config = ReportConfig::new(&data, dir.path().join("lists"), dir.path().join("out"));
        let index = load_index(&config).unwrap();

        assert_eq!(index.systems().count(), 1);
        let al = RegionCode::parse("AL").unwrap();
        let region = index.region(&al).unwrap();
        assert_eq!(region.label(), "Alabama");
        assert_eq!(region.position("I-20"), Some(0));
        assert_eq!(index.counties_in(&al).count(), 1);
    }

    #[test]
    fn optional_directories_may_be_absent() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        write(&data.join("systems").join("usai.csv"), "h\nI10;AL;I-10\n");

        let config = ReportConfig::new(&data, dir.path(), dir.path());
        let index = load_index(&config).unwrap();
        assert_eq!(index.counties().count(), 0);
    }

    #[test]
    fn missing_systems_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let config = ReportConfig::new(dir.path().join("nope"), dir.path(), dir.path());
        let err = load_index(&config).unwrap_err();
        assert!(matches!(err, InventoryError::Io { .. }));
    }

    #[test]
    fn bad_lookup_header_is_an_error() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        write(&data.join("systems").join("usai.csv"), "h\nI10;AL;I-10\n");
        write(&data.join("system_names.csv"), "Foo;Bar\nusai;Interstates\n");

        let config = ReportConfig::new(&data, dir.path(), dir.path());
        let err = load_index(&config).unwrap_err();
        assert!(matches!(err, InventoryError::MissingColumn { .. }));
    }

    #[test]
    fn files_are_sorted() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("b.list"), "");
        write(&dir.path().join("a.list"), "");
        write(&dir.path().join("c.csv"), "");

        let files = files_with_extension(dir.path(), "list").unwrap();
        let stems: Vec<_> = files.iter().filter_map(|p| file_stem(p)).collect();
        assert_eq!(stems, vec!["a", "b"]);
    }
}
