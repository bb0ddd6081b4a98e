use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialize `value` as YAML and write it atomically, using a tempfile in the
/// target directory. A crash mid-write never leaves a truncated file behind.
pub fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_yaml::to_string(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read and deserialize a YAML file.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = std::fs::read_to_string(path)?;
    let value = serde_yaml::from_str(&data)?;
    Ok(value)
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Probe {
        name: String,
        count: u32,
    }

    #[test]
    fn write_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("probe.yaml");
        let probe = Probe {
            name: "bun".to_string(),
            count: 3,
        };
        write_yaml(&path, &probe).unwrap();
        let loaded: Probe = read_yaml(&path).unwrap();
        assert_eq!(loaded, probe);
    }

    #[test]
    fn write_yaml_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/probe.yaml");
        write_yaml(&path, &Probe { name: "x".into(), count: 0 }).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result: Result<Probe> = read_yaml(&dir.path().join("nope.yaml"));
        assert!(result.is_err());
    }
}
