use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait ConfigContentProvider {
    /// `Ok(None)` means there is nothing stored yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!(
                    "Failed to read config file {}: {}",
                    self.file_path.display(),
                    err
                )),
            },
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.file_path.display(),
                e
            )
        })
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryContentConfigProvider;


#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tile_merge_provider_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_file_provider_round_trips_content() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());

        provider.set_config_content("size: 5\n").unwrap();
        assert_eq!(
            provider.get_config_content().unwrap().as_deref(),
            Some("size: 5\n")
        );

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_memory_provider_starts_with_given_content() {
        let empty = MemoryContentConfigProvider::default();
        assert_eq!(empty.get_config_content(), Ok(None));

        let filled = MemoryContentConfigProvider::new(Some("a: 1".to_string()));
        filled.set_config_content("a: 2").unwrap();
        assert_eq!(filled.get_config_content().unwrap().as_deref(), Some("a: 2"));
    }
}
