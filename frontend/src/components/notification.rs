//! Toast notifications.
//!
//! One toast at a time; a new one replaces the old. Each showing schedules
//! its own dismissal, which only clears the toast it was scheduled for.

use cardapio::{Notification, NotificationCenter};
use gloo_timers::callback::Timeout;
use leptos::*;

/// Show `notification` and schedule its auto-dismiss.
pub fn notify(notifications: RwSignal<NotificationCenter>, notification: Notification) {
    let delay = notification.severity.dismiss_after();
    log::info!("{} {}", notification.severity.emoji(), notification.message);

    if let Some(ticket) = notifications.try_update(|center| center.show(notification)) {
        Timeout::new(delay.as_millis() as u32, move || {
            notifications.update(|center| {
                center.dismiss(ticket);
            });
        })
        .forget();
    }
}

#[component]
pub fn Toast(notifications: RwSignal<NotificationCenter>) -> impl IntoView {
    move || {
        notifications.with(|center| center.current().cloned()).map(|notification| {
            let severity = notification.severity;
            view! {
                <div class=format!("notification {}", severity.css_class())>
                    <div class="notification-body">
                        <h4 class="notification-title">{severity.title()}</h4>
                        <p class="notification-message">{notification.message}</p>
                    </div>
                    <button
                        class="notification-close"
                        on:click=move |_| notifications.update(|center| center.close())
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
