//! Filesystem-backed content store.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use tutor_core::{FaqItem, LessonPreview, PricingPlan, ServiceItem, Testimonial};

use crate::error::{ContentError, Result};
use crate::ContentStore;

/// Content store reading from a directory of markdown and JSON files.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a content directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(ContentError::NotFound {
                entity: format!("content directory {}", dir.display()),
            });
        }
        tracing::debug!(dir = %dir.display(), "Opened content directory");
        Ok(Self { dir })
    }

    /// The content directory being served.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_text(&self, entity: &str, file_name: &str) -> Result<String> {
        let path = self.dir.join(file_name);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(ContentError::NotFound {
                    entity: entity.to_string(),
                })
            }
            Err(source) => Err(ContentError::Io {
                entity: entity.to_string(),
                source,
            }),
        }
    }

    fn read_json<T: DeserializeOwned>(&self, entity: &str, file_name: &str) -> Result<T> {
        let text = self.read_text(entity, file_name)?;
        serde_json::from_str(&text).map_err(|source| ContentError::Malformed {
            entity: entity.to_string(),
            source,
        })
    }
}

impl ContentStore for FileStore {
    fn load_about(&self) -> Result<String> {
        self.read_text("about", "about.md")
    }

    fn load_services(&self) -> Result<Vec<ServiceItem>> {
        self.read_json("services", "services.json")
    }

    fn load_pricing(&self) -> Result<Vec<PricingPlan>> {
        self.read_json("pricing", "pricing.json")
    }

    fn load_testimonials(&self) -> Result<Vec<Testimonial>> {
        self.read_json("testimonials", "testimonials.json")
    }

    fn load_faq(&self) -> Result<Vec<FaqItem>> {
        self.read_json("faq", "faq.json")
    }

    fn load_lessons(&self) -> Result<Vec<LessonPreview>> {
        self.read_json("lessons", "lessons.json")
    }
}
