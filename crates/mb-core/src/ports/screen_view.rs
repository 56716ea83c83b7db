use crate::screen::RenderPlan;
use async_trait::async_trait;

/// Presentation port - the signals the screen orchestration emits.
///
/// Implementations own marshaling onto the UI context. The orchestrator
/// guarantees it emits `loading_started` followed by exactly one of
/// `render` or `show_error` per load attempt, never interleaved with the
/// signals of another attempt.
#[async_trait]
pub trait ScreenViewPort: Send + Sync {
    /// A load attempt has begun; drive the busy indicator.
    async fn loading_started(&self);

    /// A load attempt succeeded; replace the displayed content with the
    /// plan.
    async fn render(&self, plan: RenderPlan);

    /// A load attempt failed; surface the message with a retry affordance.
    async fn show_error(&self, message: String);
}
