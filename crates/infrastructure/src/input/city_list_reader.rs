//! City list file reader

use std::{
    io,
    path::{Path, PathBuf},
};

use domain::{CityName, parse_city_list};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Errors reading the city list
#[derive(Debug, Error)]
pub enum InputError {
    /// The input path does not exist
    #[error("Input file not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The file exists but could not be read as UTF-8 text
    #[error("Could not read input file {}: {source}", path.display())]
    Unreadable {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Read city names from a line-delimited text file
///
/// Whitespace is trimmed and blank lines are skipped. An empty list is not an
/// error; it is only logged.
#[instrument]
pub fn read_city_names(path: &Path) -> Result<Vec<CityName>, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            InputError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InputError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let cities = parse_city_list(&contents);
    if cities.is_empty() {
        warn!("Input file was read, but no cities were found");
    } else {
        info!(count = cities.len(), "Read city list");
    }
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_cities_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Paris\n\n  Tokyo  \nParis\n").unwrap();

        let cities = read_city_names(file.path()).unwrap();
        let names: Vec<&str> = cities.iter().map(CityName::as_str).collect();
        assert_eq!(names, ["Paris", "Tokyo", "Paris"]);
    }

    #[test]
    fn empty_file_gives_empty_list() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let cities = read_city_names(file.path()).unwrap();
        assert!(cities.is_empty());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.txt");

        let err = read_city_names(&path).unwrap_err();
        assert!(matches!(&err, InputError::FileNotFound { path: p } if *p == path));
        assert!(err.to_string().contains("cities.txt"));
    }

    #[test]
    fn directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_city_names(dir.path()).unwrap_err();
        assert!(matches!(err, InputError::Unreadable { .. }));
    }

    #[test]
    fn invalid_utf8_is_unreadable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x50, 0x61, 0xff, 0xfe, 0x0a]).unwrap();

        let err = read_city_names(file.path()).unwrap_err();
        assert!(matches!(err, InputError::Unreadable { .. }));
    }
}
