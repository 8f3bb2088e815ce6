//! Uploader configuration.
//!
//! Fixed values shared by the browser app and the command-line submitter.
//! Only the webhook endpoint can be overridden at runtime, via [`Settings`].

use std::time::Duration;

/// Default menu automation webhook.
pub const WEBHOOK_URL: &str =
    "https://pseudoimpartial-nonreputable-august.ngrok-free.dev/webhook/receber-dados-cardápio";

/// Environment variable overriding [`WEBHOOK_URL`].
pub const WEBHOOK_URL_ENV: &str = "PIGZ_WEBHOOK_URL";

/// Partner portal page listing a merchant's products.
///
/// `{merchant_id}` is replaced verbatim.
pub const PRODUCTS_URL_TEMPLATE: &str = "https://partner.pigz.com.br/merchant/{merchant_id}/products";

// =============================================================================
// Multipart field names
// =============================================================================

pub const FIELD_API_KEY: &str = "apiKey";
pub const FIELD_MERCHANT_ID: &str = "merchantId";
pub const FIELD_DESCRIPTION: &str = "description";
/// Prefix of positional file fields (`file_0`, `file_1`, ...).
pub const FIELD_FILE_PREFIX: &str = "file_";

// =============================================================================
// Progress simulation
// =============================================================================

/// Progress shown as soon as a request starts.
pub const PROGRESS_INITIAL: f64 = 5.0;

/// Largest random step per tick.
pub const PROGRESS_MAX_INCREMENT: f64 = 15.0;

/// Simulated progress stays strictly below this while a request is outstanding.
pub const PROGRESS_CEILING: f64 = 90.0;

/// Progress shown once the webhook confirms.
pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Interval between simulated progress ticks.
pub const PROGRESS_TICK: Duration = Duration::from_millis(800);

/// Hold on 100% before switching to the success view.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

// =============================================================================
// Notifications
// =============================================================================

/// Auto-dismiss delay for error notifications.
pub const ERROR_DISMISS: Duration = Duration::from_secs(10);

/// Auto-dismiss delay for success and info notifications.
pub const NOTICE_DISMISS: Duration = Duration::from_secs(6);

/// Timer periods driving a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Period of the progress timer.
    pub tick: Duration,
    /// Delay between a confirmed result and the success view.
    pub settle: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick: PROGRESS_TICK,
            settle: SETTLE_DELAY,
        }
    }
}

/// Runtime settings for native callers.
#[cfg(feature = "native")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub webhook_url: String,
}

#[cfg(feature = "native")]
impl Settings {
    /// Read settings from the process environment.
    ///
    /// An unset or blank `PIGZ_WEBHOOK_URL` keeps the default endpoint.
    pub fn from_env() -> Self {
        let webhook_url = std::env::var(WEBHOOK_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| WEBHOOK_URL.to_string());
        Self { webhook_url }
    }
}

#[cfg(feature = "native")]
impl Default for Settings {
    fn default() -> Self {
        Self {
            webhook_url: WEBHOOK_URL.to_string(),
        }
    }
}

/// Products page for a merchant.
pub fn products_url(merchant_id: &str) -> String {
    PRODUCTS_URL_TEMPLATE.replace("{merchant_id}", merchant_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_url() {
        assert_eq!(
            products_url("ID-PRO-001"),
            "https://partner.pigz.com.br/merchant/ID-PRO-001/products"
        );
    }

    #[test]
    fn test_default_timing() {
        let timing = Timing::default();
        assert_eq!(timing.tick, Duration::from_millis(800));
        assert_eq!(timing.settle, Duration::from_millis(500));
    }
}
