//! Menu submission form.
//!
//! Owns the controller, the attachment store and the progress timer. The
//! timer handle lives in a `StoredValue`; replacing it with `None` drops the
//! `Interval`, which clears it. That happens before any outcome is applied.

use cardapio::{
    Notification, NotificationCenter, Phase, Resolution, SubmissionController, SubmissionError,
};
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::components::{notify, Dropzone, ProgressBar, SuccessPanel};
use crate::services::{send_to_webhook, ObjectUrlPreviews};
use crate::types::{BrowserFile, UploadStore};
use crate::{PROGRESS_TICK, SETTLE_DELAY, WEBHOOK_URL};

#[component]
pub fn SubmissionForm(notifications: RwSignal<NotificationCenter>) -> impl IntoView {
    let controller = create_rw_signal(SubmissionController::new());
    let store = create_rw_signal(UploadStore::new(ObjectUrlPreviews));
    let ticker = store_value(None::<Interval>);

    let phase = create_memo(move |_| controller.with(|c| c.phase()));
    let busy = Signal::derive(move || matches!(phase.get(), Phase::Submitting | Phase::Completing));
    let progress = Signal::derive(move || controller.with(|c| c.progress()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let attempt = controller.try_update(|c| store.with_untracked(|s| c.begin(s)));
        let request = match attempt {
            Some(Ok(request)) => request,
            Some(Err(SubmissionError::Validation(e))) => {
                notify(notifications, Notification::error(e.to_string()));
                return;
            }
            Some(Err(e)) => {
                log::warn!("{}", e);
                return;
            }
            None => return,
        };

        ticker.set_value(Some(Interval::new(PROGRESS_TICK.as_millis() as u32, move || {
            let mut rng = rand::thread_rng();
            controller.update(|c| {
                c.tick(&mut rng);
            });
        })));

        let files: Vec<BrowserFile> = store.with_untracked(|s| s.files().cloned().collect());

        spawn_local(async move {
            let outcome = send_to_webhook(WEBHOOK_URL, &request, &files).await;
            ticker.set_value(None);

            match controller.try_update(|c| c.resolve(&outcome)) {
                Some(Resolution::Settling) => {
                    TimeoutFuture::new(SETTLE_DELAY.as_millis() as u32).await;
                    let notice = batch(move || {
                        controller
                            .try_update(|c| store.try_update(|s| c.settle(s)))
                            .flatten()
                            .flatten()
                    });
                    if let Some(notice) = notice {
                        notify(notifications, notice);
                    }
                }
                Some(Resolution::Failed(notice)) => notify(notifications, notice),
                Some(Resolution::Ignored) | None => {}
            }
        });
    };

    let form = move || {
        view! {
            <form class="submission-form" on:submit=on_submit>
                <Show when=move || busy.get() fallback=|| view! { }>
                    <ProgressBar progress=progress/>
                </Show>

                <div class="form-row">
                    <div class="form-field">
                        <label>"Secure API Key"</label>
                        <input
                            type="password"
                            placeholder="••••••••••••"
                            prop:value=move || controller.with(|c| c.fields().api_key.clone())
                            on:input=move |ev| {
                                controller.update(|c| c.fields_mut().api_key = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label>"Merchant Identity"</label>
                        <input
                            type="text"
                            placeholder="ID-PRO-001"
                            prop:value=move || controller.with(|c| c.fields().merchant_id.clone())
                            on:input=move |ev| {
                                controller.update(|c| c.fields_mut().merchant_id = event_target_value(&ev))
                            }
                        />
                    </div>
                </div>

                <div class="form-field">
                    <label>"Upload de Matriz"</label>
                    <Dropzone store=store notifications=notifications/>
                </div>

                <div class="form-field">
                    <label>"Descrição / Prompt do Cardápio"</label>
                    <textarea
                        rows=4
                        placeholder="Ex: Categorias principais são: Entradas, Pratos Principais, Bebidas. Complementos incluem: Arroz, Feijão, Saladas. Descreva a estrutura esperada..."
                        prop:value=move || controller.with(|c| c.fields().description.clone())
                        on:input=move |ev| {
                            controller.update(|c| c.fields_mut().description = event_target_value(&ev))
                        }
                    ></textarea>
                </div>

                <button type="submit" class="btn btn-primary submit-button" disabled=move || busy.get()>
                    {move || if busy.get() {
                        format!("CADASTRANDO CARDÁPIO... {:.0}% Concluído", progress.get())
                    } else {
                        "Lançar Cardápio".to_string()
                    }}
                </button>
            </form>
        }
    };

    view! {
        <div class="form-card">
            <Show when=move || phase.get() == Phase::Success fallback=form>
                <SuccessPanel controller=controller/>
            </Show>
        </div>
    }
}
