//! Drives one submission on tokio.
//!
//! The request races a progress interval inside `tokio::select!`. The
//! interval lives only inside that loop, so it is gone before the outcome is
//! applied to the controller.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::{interval_at, sleep, Instant};

use crate::attachment::{AttachmentStore, PreviewAllocator};
use crate::config::Timing;
use crate::error::SubmissionResult;
use crate::native::client::WebhookClient;
use crate::native::files::LocalFile;
use crate::notification::Notification;
use crate::submission::{Resolution, SubmissionController};
use crate::webhook::Outcome;

/// Something the user should see while a submission runs.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    /// Progress indicator value, 0 to 100.
    Progress(f64),
    Notify(Notification),
}

/// Validate, send, simulate progress, and apply the outcome.
///
/// A refused trigger returns the error without emitting anything; showing
/// it is up to the caller. Otherwise the returned outcome has already been
/// applied to `controller` and `store`.
pub async fn run_submission<A, E>(
    controller: &mut SubmissionController,
    store: &mut AttachmentStore<LocalFile, A>,
    client: &WebhookClient,
    timing: Timing,
    mut on_event: E,
) -> SubmissionResult<Outcome>
where
    A: PreviewAllocator<LocalFile>,
    E: FnMut(SubmissionEvent),
{
    let request = controller.begin(store)?;
    on_event(SubmissionEvent::Progress(controller.progress()));

    let outcome = {
        let send = client.submit(&request, store.files());
        tokio::pin!(send);

        let mut ticker = interval_at(Instant::now() + timing.tick, timing.tick);
        let mut rng = StdRng::from_entropy();

        loop {
            tokio::select! {
                outcome = &mut send => break outcome,
                _ = ticker.tick() => {
                    if let Some(progress) = controller.tick(&mut rng) {
                        on_event(SubmissionEvent::Progress(progress));
                    }
                }
            }
        }
    };

    match controller.resolve(&outcome) {
        Resolution::Settling => {
            on_event(SubmissionEvent::Progress(controller.progress()));
            sleep(timing.settle).await;
            if let Some(notice) = controller.settle(store) {
                on_event(SubmissionEvent::Notify(notice));
            }
        }
        Resolution::Failed(notice) => on_event(SubmissionEvent::Notify(notice)),
        Resolution::Ignored => {}
    }

    Ok(outcome)
}
