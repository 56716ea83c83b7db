/// Screen load state machine
///
/// Design principle: this is a pure type state machine with only state
/// definitions and transition validation logic. Runtime behavior (running
/// the load, publishing to the view) is handled by the application layer.
///
/// State transitions:
/// ```text
///   Idle
///    │ screen shown / foreground activation
///    ▼
///   Loading
///    ├── load succeeded ──► Ready ── foreground activation ──► Loading
///    │
///    └── load failed ────► Failed ── user retry ────────────► Loading
///
/// A load trigger that arrives while Loading collapses into the running
/// attempt; no second attempt starts.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    /// Nothing loaded yet and no load running.
    Idle,

    /// A load attempt is in flight.
    Loading,

    /// A render plan has been published.
    Ready,

    /// The last load attempt failed; waiting for a user-initiated retry.
    Failed,
}

impl ScreenPhase {
    /// Check if a load attempt is currently in flight.
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the user-facing retry action applies.
    pub fn can_retry(self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Get the next state when a load is triggered. Returns `None` while a
    /// load is already in flight: re-entrant triggers collapse into it.
    pub fn on_load(self) -> Option<Self> {
        match self {
            Self::Loading => None,
            Self::Idle | Self::Ready | Self::Failed => Some(Self::Loading),
        }
    }

    /// Get the next state when the in-flight load succeeds.
    pub fn on_success(self) -> Self {
        match self {
            Self::Loading => Self::Ready,
            other => other,
        }
    }

    /// Get the next state when the in-flight load fails.
    pub fn on_failure(self) -> Self {
        match self {
            Self::Loading => Self::Failed,
            other => other,
        }
    }
}

impl Default for ScreenPhase {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // State Classification Tests
    // =========================================================================

    #[test]
    fn test_loading_classification() {
        assert!(ScreenPhase::Loading.is_loading());

        assert!(!ScreenPhase::Idle.is_loading());
        assert!(!ScreenPhase::Ready.is_loading());
        assert!(!ScreenPhase::Failed.is_loading());
    }

    #[test]
    fn test_retry_only_applies_to_failed() {
        assert!(ScreenPhase::Failed.can_retry());

        assert!(!ScreenPhase::Idle.can_retry());
        assert!(!ScreenPhase::Loading.can_retry());
        assert!(!ScreenPhase::Ready.can_retry());
    }

    // =========================================================================
    // Transition Method Tests (on_* helpers)
    // =========================================================================

    #[test]
    fn test_on_load_from_resting_states() {
        assert_eq!(ScreenPhase::Idle.on_load(), Some(ScreenPhase::Loading));
        assert_eq!(ScreenPhase::Ready.on_load(), Some(ScreenPhase::Loading));
        assert_eq!(ScreenPhase::Failed.on_load(), Some(ScreenPhase::Loading));
    }

    #[test]
    fn test_on_load_collapses_while_loading() {
        assert!(ScreenPhase::Loading.on_load().is_none());
    }

    #[test]
    fn test_on_success_only_from_loading() {
        assert_eq!(ScreenPhase::Loading.on_success(), ScreenPhase::Ready);

        // Wrong state: no transition
        assert_eq!(ScreenPhase::Idle.on_success(), ScreenPhase::Idle);
        assert_eq!(ScreenPhase::Ready.on_success(), ScreenPhase::Ready);
        assert_eq!(ScreenPhase::Failed.on_success(), ScreenPhase::Failed);
    }

    #[test]
    fn test_on_failure_only_from_loading() {
        assert_eq!(ScreenPhase::Loading.on_failure(), ScreenPhase::Failed);

        // Wrong state: no transition
        assert_eq!(ScreenPhase::Idle.on_failure(), ScreenPhase::Idle);
        assert_eq!(ScreenPhase::Ready.on_failure(), ScreenPhase::Ready);
    }

    #[test]
    fn test_retry_round_trip() {
        let failed = ScreenPhase::Loading.on_failure();
        assert_eq!(failed, ScreenPhase::Failed);
        assert!(failed.can_retry());

        let retrying = failed.on_load().unwrap();
        assert_eq!(retrying.on_success(), ScreenPhase::Ready);
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ScreenPhase::default(), ScreenPhase::Idle);
    }
}
