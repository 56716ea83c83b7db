use serde::Deserialize;

/// Screen content configuration decoded from the bundled `config` resource.
///
/// All four fields are required; a document missing any of them fails to
/// decode as a whole, so a partially populated configuration is never
/// constructed. Unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenConfig {
    /// Screen title.
    pub title: String,

    /// Welcome message shown above the image list.
    pub welcome_message: String,

    /// Caps how many images are rendered. Values above the list length are
    /// clamped to the list length; zero and negative values render no images.
    pub max_displayed_images: i64,

    /// Image identifiers in display order. Duplicates are rendered as
    /// separate entries.
    pub images: Vec<String>,
}

impl ScreenConfig {
    /// Number of leading `images` entries that are actually rendered.
    pub fn effective_image_count(&self) -> usize {
        if self.max_displayed_images <= 0 {
            return 0;
        }
        usize::try_from(self.max_displayed_images)
            .unwrap_or(usize::MAX)
            .min(self.images.len())
    }

    /// The identifiers selected for display, in original order.
    pub fn displayed_images(&self) -> &[String] {
        &self.images[..self.effective_image_count()]
    }
}
