#[cfg(feature = "ssr")]
pub mod errors;
mod site;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
pub use site::{DockSection, Pitch, Profile, Site, Social, Stat};

#[cfg(feature = "ssr")]
use std::path::{Path, PathBuf};

/// Reads the site's content from a YAML file.
///
/// In production the content is parsed once and kept around, otherwise the
/// file is read again on every load so that edits show up on refresh.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct ContentStore {
    path: PathBuf,
    is_running_in_prod: bool,
    cache: std::sync::Arc<std::sync::OnceLock<Site>>,
}

#[cfg(feature = "ssr")]
impl ContentStore {
    pub fn new(path: PathBuf, is_running_in_prod: bool) -> Self {
        Self {
            path,
            is_running_in_prod,
            cache: Default::default(),
        }
    }

    pub fn load(&self) -> Result<Site> {
        if let Some(site) = self.cache.get() {
            return Ok(site.clone());
        }
        let site = Self::read(&self.path)?;
        if self.is_running_in_prod {
            // Another request may have won the race, its copy is as good as ours.
            let _ = self.cache.set(site.clone());
        }
        Ok(site)
    }

    pub fn read(path: &Path) -> Result<Site> {
        let contents = std::fs::read_to_string(path).map_err(|error| Error::IO {
            error,
            path: PathBuf::from(path),
        })?;
        let site: Site = serde_yml::from_str(&contents).map_err(|error| Error::Deserialize {
            error: format!("content is not valid YAML: {}", error),
            path: PathBuf::from(path),
        })?;
        site.validate().map_err(|reason| Error::Invalid {
            reason,
            path: PathBuf::from(path),
        })?;
        log::info!(
            "Loaded \"{}\" from {:?} with {} dock links",
            site.title,
            path,
            site.dock.links.len()
        );
        Ok(site)
    }
}
