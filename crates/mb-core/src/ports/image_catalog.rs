use crate::catalog::ImageHandle;

/// Asset catalog port - pure lookup against a static, pre-populated image
/// store.
///
/// Lookup is case-sensitive and exact: no partial or fuzzy matching, no I/O,
/// and no failure mode other than "not found".
pub trait ImageCatalogPort: Send + Sync {
    fn resolve(&self, id: &str) -> Option<ImageHandle>;
}
