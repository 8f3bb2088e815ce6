//! Submission flow.
//!
//! ```text
//!          begin()            all checks pass
//!  Idle ──────────▶ Validating ─────────────▶ Submitting ──tick()──┐
//!   ▲                    │ first failing check    │   ◀────────────┘
//!   │◀───────────────────┘ (error notification)   │ resolve(outcome)
//!   │◀──────────── failure (error notification) ──┤
//!   │                                             ▼ success, progress = 100
//!   │                                        Completing
//!   │  start_new()                                │ settle() after SETTLE_DELAY
//!   └──────────────────────── Success ◀───────────┘
//! ```
//!
//! The controller never touches a clock. Callers own the progress timer and
//! drop it before calling [`SubmissionController::resolve`]; a tick that
//! still arrives afterwards is ignored because `tick` only acts while
//! `Submitting`.

use rand::Rng;

use crate::attachment::{AttachmentStore, PreviewAllocator};
use crate::config::{
    products_url, PROGRESS_CEILING, PROGRESS_COMPLETE, PROGRESS_INITIAL, PROGRESS_MAX_INCREMENT,
};
use crate::error::{SubmissionError, SubmissionResult, ValidationError};
use crate::notification::Notification;
use crate::webhook::{Outcome, WebhookRequest};

/// Shown once the success view opens.
pub const SUCCESS_NOTICE: &str = "Cardápio cadastrado, ver produtos";

/// Shown when a failed outcome carries no message.
pub const FAILURE_FALLBACK: &str = "Erro no processamento.";

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Submitting,
    /// Confirmed; holding 100% before the success view.
    Completing,
    Success,
}

/// Form input owned by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionFields {
    pub api_key: String,
    pub merchant_id: String,
    pub description: String,
}

/// Cosmetic progress indicator for a request with no real progress signal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressSimulator {
    value: f64,
}

impl ProgressSimulator {
    pub fn value(&self) -> f64 {
        self.value
    }

    fn start(&mut self) {
        self.value = PROGRESS_INITIAL;
    }

    /// Add a random step of at most `PROGRESS_MAX_INCREMENT`.
    ///
    /// The step is limited to half the remaining distance to the ceiling.
    /// Once that distance is below what an `f64` can resolve, the value
    /// plateaus instead of rounding up to `PROGRESS_CEILING`.
    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let step = rng.gen_range(0.0..PROGRESS_MAX_INCREMENT) + f64::EPSILON;
        let room = (PROGRESS_CEILING - self.value) / 2.0;
        let candidate = self.value + step.min(room);
        if candidate < PROGRESS_CEILING {
            self.value = candidate;
        }
        self.value
    }

    fn complete(&mut self) {
        self.value = PROGRESS_COMPLETE;
    }

    fn reset(&mut self) {
        self.value = 0.0;
    }
}

/// What the caller should do after [`SubmissionController::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Wait `SETTLE_DELAY`, then call [`SubmissionController::settle`].
    Settling,
    /// Back to `Idle`; show this notification.
    Failed(Notification),
    /// No request was outstanding; nothing changed.
    Ignored,
}

/// State machine behind the submit button.
#[derive(Clone, Debug)]
pub struct SubmissionController {
    fields: SubmissionFields,
    phase: Phase,
    progress: ProgressSimulator,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::with_fields(SubmissionFields::default())
    }

    pub fn with_fields(fields: SubmissionFields) -> Self {
        Self {
            fields,
            phase: Phase::Idle,
            progress: ProgressSimulator::default(),
        }
    }

    pub fn fields(&self) -> &SubmissionFields {
        &self.fields
    }

    /// Direct field access for input bindings.
    pub fn fields_mut(&mut self) -> &mut SubmissionFields {
        &mut self.fields
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    /// Whether a request is outstanding or its confirmation is on screen.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Submitting | Phase::Completing)
    }

    pub fn is_success(&self) -> bool {
        self.phase == Phase::Success
    }

    /// Partner portal link for the current merchant.
    pub fn products_url(&self) -> String {
        products_url(&self.fields.merchant_id)
    }

    /// Check required input without changing state.
    pub fn validate(&self, attachment_count: usize) -> Result<(), ValidationError> {
        if self.fields.api_key.is_empty() {
            return Err(ValidationError::MissingApiKey);
        }
        if self.fields.merchant_id.is_empty() {
            return Err(ValidationError::MissingMerchantId);
        }
        if attachment_count == 0 {
            return Err(ValidationError::NoAttachments);
        }
        Ok(())
    }

    /// Handle a submit trigger.
    ///
    /// On success the controller is `Submitting`, progress is at its initial
    /// value, and the returned request is what must be sent along with the
    /// store's files. The caller should start the progress timer now.
    pub fn begin<F, A>(&mut self, store: &AttachmentStore<F, A>) -> SubmissionResult<WebhookRequest>
    where
        A: PreviewAllocator<F>,
    {
        if self.phase != Phase::Idle {
            return Err(SubmissionError::Busy(self.phase));
        }

        self.phase = Phase::Validating;
        if let Err(e) = self.validate(store.len()) {
            log::info!("Submission refused: {}", e);
            self.phase = Phase::Idle;
            return Err(e.into());
        }

        self.phase = Phase::Submitting;
        self.progress.start();
        log::info!("Submitting {} attachment(s) for merchant {}", store.len(), self.fields.merchant_id);

        Ok(WebhookRequest {
            api_key: self.fields.api_key.clone(),
            merchant_id: self.fields.merchant_id.clone(),
            description: self.fields.description.clone(),
        })
    }

    /// Advance simulated progress by one timer tick.
    ///
    /// Returns `None` outside `Submitting`; the caller should stop its timer.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<f64> {
        if self.phase != Phase::Submitting {
            return None;
        }
        Some(self.progress.advance(rng))
    }

    /// Apply the result of the request started by [`begin`](Self::begin).
    ///
    /// The progress timer must already be stopped.
    pub fn resolve(&mut self, outcome: &Outcome) -> Resolution {
        if self.phase != Phase::Submitting {
            log::warn!("Ignoring outcome while {:?}", self.phase);
            return Resolution::Ignored;
        }

        match outcome {
            Outcome::Success { .. } => {
                self.phase = Phase::Completing;
                self.progress.complete();
                Resolution::Settling
            }
            Outcome::Failure { message } => {
                self.phase = Phase::Idle;
                self.progress.reset();
                let message = if message.is_empty() { FAILURE_FALLBACK } else { message.as_str() };
                log::warn!("Submission failed: {}", message);
                Resolution::Failed(Notification::error(message))
            }
        }
    }

    /// Finish a confirmed submission: open the success view, clear the
    /// staged files and description, keep the credentials.
    ///
    /// Returns `None` if there is no confirmed submission to settle.
    pub fn settle<F, A>(&mut self, store: &mut AttachmentStore<F, A>) -> Option<Notification>
    where
        A: PreviewAllocator<F>,
    {
        if self.phase != Phase::Completing {
            return None;
        }
        self.phase = Phase::Success;
        self.progress.reset();
        store.clear();
        self.fields.description.clear();
        log::info!("Menu submitted for merchant {}", self.fields.merchant_id);
        Some(Notification::success(SUCCESS_NOTICE))
    }

    /// Leave the success view.
    pub fn start_new(&mut self) {
        if self.phase == Phase::Success {
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::tests::{file, Ledger, MemFile};
    use crate::notification::Severity;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn filled() -> SubmissionController {
        SubmissionController::with_fields(SubmissionFields {
            api_key: "sk-live-123".into(),
            merchant_id: "ID-PRO-001".into(),
            description: "Entradas, Pratos Principais, Bebidas".into(),
        })
    }

    fn staged() -> AttachmentStore<MemFile, Ledger> {
        let mut store = AttachmentStore::new(Ledger::default());
        store.admit(vec![file("menu.png", "image/png"), file("menu.pdf", "application/pdf")]);
        store
    }

    #[test]
    fn test_validation_order() {
        let store = staged();
        let empty: AttachmentStore<MemFile, Ledger> = AttachmentStore::new(Ledger::default());

        let mut controller = SubmissionController::new();
        assert_eq!(
            controller.begin(&empty),
            Err(SubmissionError::Validation(ValidationError::MissingApiKey))
        );

        controller.fields_mut().api_key = "k".into();
        assert_eq!(
            controller.begin(&store),
            Err(SubmissionError::Validation(ValidationError::MissingMerchantId))
        );

        controller.fields_mut().merchant_id = "m".into();
        assert_eq!(
            controller.begin(&empty),
            Err(SubmissionError::Validation(ValidationError::NoAttachments))
        );
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn test_each_check_short_circuits_independently() {
        let store = staged();
        for (api_key, merchant_id, expected) in [
            ("", "m", ValidationError::MissingApiKey),
            ("k", "", ValidationError::MissingMerchantId),
        ] {
            let mut controller = SubmissionController::with_fields(SubmissionFields {
                api_key: api_key.into(),
                merchant_id: merchant_id.into(),
                description: String::new(),
            });
            assert_eq!(controller.begin(&store), Err(expected.into()));
            assert_eq!(controller.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_begin_snapshots_fields() {
        let store = staged();
        let mut controller = filled();
        let request = controller.begin(&store).unwrap();

        assert_eq!(controller.phase(), Phase::Submitting);
        assert_eq!(controller.progress(), PROGRESS_INITIAL);
        assert_eq!(request.api_key, "sk-live-123");
        assert_eq!(request.description, "Entradas, Pratos Principais, Bebidas");
        assert!(controller.is_busy());
    }

    #[test]
    fn test_begin_while_busy() {
        let store = staged();
        let mut controller = filled();
        controller.begin(&store).unwrap();
        assert_eq!(controller.begin(&store), Err(SubmissionError::Busy(Phase::Submitting)));
    }

    #[test]
    fn test_progress_rises_below_ceiling() {
        let store = staged();
        let mut controller = filled();
        controller.begin(&store).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let mut last = controller.progress();
        for _ in 0..40 {
            let next = controller.tick(&mut rng).unwrap();
            assert!(next > last, "{} did not rise above {}", next, last);
            assert!(next < PROGRESS_CEILING);
            assert!(next - last <= PROGRESS_MAX_INCREMENT + f64::EPSILON);
            last = next;
        }
    }

    #[test]
    fn test_long_wait_plateaus_below_ceiling() {
        let store = staged();
        let mut controller = filled();
        controller.begin(&store).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let mut last = controller.progress();
        for i in 0..600 {
            let next = controller.tick(&mut rng).unwrap();
            assert!(next < PROGRESS_CEILING, "tick {} reached {:.17}", i, next);
            assert!(next >= last);
            last = next;
        }
        assert_eq!(controller.phase(), Phase::Submitting);
    }

    #[test]
    fn test_tick_outside_submitting_is_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut controller = filled();
        assert_eq!(controller.tick(&mut rng), None);

        let store = staged();
        controller.begin(&store).unwrap();
        controller.resolve(&Outcome::from_response(200, "{}"));
        assert_eq!(controller.tick(&mut rng), None);
        assert_eq!(controller.progress(), PROGRESS_COMPLETE);
    }

    #[test]
    fn test_success_flow() {
        let mut store = staged();
        let mut controller = filled();
        controller.begin(&store).unwrap();

        let outcome = Outcome::from_response(200, r#"{"id": 42}"#);
        assert_eq!(outcome.payload(), Some(&json!({"id": 42})));
        assert_eq!(controller.resolve(&outcome), Resolution::Settling);
        assert_eq!(controller.phase(), Phase::Completing);
        assert_eq!(controller.progress(), 100.0);
        // the store is untouched until the settle delay elapses
        assert_eq!(store.len(), 2);

        let notice = controller.settle(&mut store).unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, SUCCESS_NOTICE);
        assert_eq!(controller.phase(), Phase::Success);
        assert!(store.is_empty());
        assert!(store.previews().live.is_empty());
        assert!(controller.fields().description.is_empty());
        assert_eq!(controller.fields().api_key, "sk-live-123");
        assert_eq!(controller.fields().merchant_id, "ID-PRO-001");
        assert_eq!(
            controller.products_url(),
            "https://partner.pigz.com.br/merchant/ID-PRO-001/products"
        );

        controller.start_new();
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.fields().api_key, "sk-live-123");
    }

    #[test]
    fn test_server_failure_keeps_input() {
        let mut store = staged();
        let mut controller = filled();
        controller.begin(&store).unwrap();

        let outcome = Outcome::from_response(500, r#"{"message": "limite excedido"}"#);
        assert_eq!(
            controller.resolve(&outcome),
            Resolution::Failed(Notification::error("limite excedido"))
        );
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(store.len(), 2);
        assert_eq!(controller.fields().description, "Entradas, Pratos Principais, Bebidas");
        assert_eq!(controller.settle(&mut store), None);
        assert_eq!(store.len(), 2);

        // retry without re-entering anything
        assert!(controller.begin(&store).is_ok());
    }

    #[test]
    fn test_transport_failure_returns_to_idle() {
        let store = staged();
        let mut controller = filled();
        controller.begin(&store).unwrap();

        let resolution = controller.resolve(&Outcome::unreachable(None));
        let Resolution::Failed(notice) = resolution else {
            panic!("expected failure, got {:?}", resolution);
        };
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, crate::webhook::CONNECTIVITY_MESSAGE);
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn test_empty_failure_message_uses_fallback() {
        let store = staged();
        let mut controller = filled();
        controller.begin(&store).unwrap();
        let resolution = controller.resolve(&Outcome::Failure { message: String::new() });
        assert_eq!(resolution, Resolution::Failed(Notification::error(FAILURE_FALLBACK)));
    }

    #[test]
    fn test_resolve_without_request() {
        let mut controller = filled();
        let outcome = Outcome::from_response(200, "{}");
        assert_eq!(controller.resolve(&outcome), Resolution::Ignored);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_new_only_from_success() {
        let store = staged();
        let mut controller = filled();
        controller.begin(&store).unwrap();
        controller.start_new();
        assert_eq!(controller.phase(), Phase::Submitting);
    }
}
