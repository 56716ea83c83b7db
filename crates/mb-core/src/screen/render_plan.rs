use crate::catalog::ImageHandle;
use crate::config::ScreenConfig;
use crate::ports::ImageCatalogPort;

/// One entry in the render plan: a resolved image, or a placeholder carrying
/// the identifier the catalog did not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Resolved(ImageHandle),
    Missing(String),
}

impl ImageSlot {
    /// The identifier this slot was built from.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Resolved(handle) => &handle.id,
            Self::Missing(id) => id,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

/// Ephemeral description of what the screen should display.
///
/// Recomputed from scratch on every successful load; never persisted and
/// never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub title: String,
    pub message: String,
    pub slots: Vec<ImageSlot>,
}

impl RenderPlan {
    /// Compose a plan from a freshly decoded configuration.
    ///
    /// Takes the leading `effective_image_count` identifiers in display
    /// order and resolves each one against the catalog. Identifiers the
    /// catalog does not know become `Missing` slots carrying the identifier
    /// for the fallback label.
    pub fn compose(config: &ScreenConfig, catalog: &dyn ImageCatalogPort) -> Self {
        let slots = config
            .displayed_images()
            .iter()
            .map(|id| match catalog.resolve(id) {
                Some(handle) => ImageSlot::Resolved(handle),
                None => ImageSlot::Missing(id.clone()),
            })
            .collect();

        Self {
            title: config.title.clone(),
            message: config.welcome_message.clone(),
            slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    struct FixtureCatalog {
        known: Vec<&'static str>,
    }

    impl ImageCatalogPort for FixtureCatalog {
        fn resolve(&self, id: &str) -> Option<ImageHandle> {
            self.known
                .contains(&id)
                .then(|| ImageHandle::new(id, 1, 1, Bytes::from_static(&[0])))
        }
    }

    fn config(max: i64, images: &[&str]) -> ScreenConfig {
        ScreenConfig {
            title: "Menu".to_string(),
            welcome_message: "Hi".to_string(),
            max_displayed_images: max,
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn identifiers(plan: &RenderPlan) -> Vec<&str> {
        plan.slots.iter().map(|slot| slot.identifier()).collect()
    }

    #[test]
    fn test_compose_caps_to_configured_maximum_in_order() {
        let catalog = FixtureCatalog {
            known: vec!["Salmon", "Shrimps", "Steak"],
        };

        let plan = RenderPlan::compose(&config(2, &["Salmon", "Shrimps", "Steak"]), &catalog);

        assert_eq!(plan.title, "Menu");
        assert_eq!(plan.message, "Hi");
        assert_eq!(identifiers(&plan), ["Salmon", "Shrimps"]);
        assert!(plan.slots.iter().all(|slot| !slot.is_missing()));
    }

    #[test]
    fn test_compose_with_oversized_cap_takes_all_without_padding() {
        let catalog = FixtureCatalog {
            known: vec!["Salmon", "Shrimps", "Steak"],
        };

        let plan = RenderPlan::compose(&config(10, &["Salmon", "Shrimps", "Steak"]), &catalog);

        assert_eq!(plan.slots.len(), 3);
    }

    #[test]
    fn test_compose_with_zero_cap_keeps_title_and_message() {
        let catalog = FixtureCatalog {
            known: vec!["Salmon"],
        };

        let plan = RenderPlan::compose(&config(0, &["Salmon", "Shrimps"]), &catalog);

        assert!(plan.slots.is_empty());
        assert_eq!(plan.title, "Menu");
        assert_eq!(plan.message, "Hi");
    }

    #[test]
    fn test_unknown_identifier_becomes_missing_slot_with_exact_name() {
        let catalog = FixtureCatalog {
            known: vec!["Salmon"],
        };

        let plan = RenderPlan::compose(&config(2, &["Salmon", "Steak2"]), &catalog);

        assert_eq!(plan.slots.len(), 2);
        assert!(!plan.slots[0].is_missing());
        assert_eq!(plan.slots[1], ImageSlot::Missing("Steak2".to_string()));
    }

    #[test]
    fn test_duplicates_render_as_separate_slots() {
        let catalog = FixtureCatalog {
            known: vec!["Salmon"],
        };

        let plan = RenderPlan::compose(&config(3, &["Salmon", "Salmon", "Salmon"]), &catalog);

        assert_eq!(identifiers(&plan), ["Salmon", "Salmon", "Salmon"]);
    }
}
