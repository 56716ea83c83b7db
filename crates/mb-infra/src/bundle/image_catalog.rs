use std::collections::HashMap;
use std::io::{Cursor, ErrorKind};
use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;
use tokio::fs;
use tracing::{debug, warn};

use mb_core::catalog::ImageHandle;
use mb_core::ports::ImageCatalogPort;

/// Extensions recognized as bundled image assets.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Static, pre-populated image store keyed by file stem.
///
/// The bundle directory is scanned once at construction; lookups afterwards
/// are pure in-memory reads. Lookup is case-sensitive and exact. Assets that
/// fail to decode are skipped during the scan and never surface as catalog
/// entries.
pub struct BundledImageCatalog {
    assets: HashMap<String, ImageHandle>,
}

impl BundledImageCatalog {
    /// Build a catalog by scanning the bundle directory.
    ///
    /// A missing bundle directory yields an empty catalog; the configuration
    /// load reports its own error for that case. Files are visited in name
    /// order, so an identifier that appears with several extensions resolves
    /// to the lexicographically last one.
    pub async fn scan(bundle_dir: impl AsRef<Path>) -> Result<Self> {
        let bundle_dir = bundle_dir.as_ref();

        let mut entries = match fs::read_dir(bundle_dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(dir = %bundle_dir.display(), "bundle directory missing, catalog is empty");
                return Ok(Self {
                    assets: HashMap::new(),
                });
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read bundle dir failed: {}", bundle_dir.display()));
            }
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("list bundle dir failed: {}", bundle_dir.display()))?
        {
            paths.push(entry.path());
        }
        paths.sort();

        let mut assets = HashMap::new();
        for path in paths {
            let Some(id) = asset_identifier(&path) else {
                continue;
            };

            let bytes = fs::read(&path)
                .await
                .with_context(|| format!("read asset failed: {}", path.display()))?;

            match probe_dimensions(&bytes) {
                Ok((width, height)) => {
                    debug!(id = %id, width, height, "asset registered");
                    assets.insert(
                        id.clone(),
                        ImageHandle::new(id, width, height, Bytes::from(bytes)),
                    );
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping undecodable asset");
                }
            }
        }

        Ok(Self { assets })
    }

    /// Number of registered assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl ImageCatalogPort for BundledImageCatalog {
    fn resolve(&self, id: &str) -> Option<ImageHandle> {
        self.assets.get(id).cloned()
    }
}

/// File stem of a recognized image asset, `None` for everything else.
fn asset_identifier(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        return None;
    }
    Some(path.file_stem()?.to_str()?.to_string())
}

/// Decode just enough of the payload to learn its pixel dimensions.
fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("guess image format failed")?;
    reader
        .into_dimensions()
        .context("read image dimensions failed")
}
