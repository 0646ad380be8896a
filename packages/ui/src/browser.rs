//! Thin wrappers over the browser window: alerts and full-page navigation.
//! Native builds log instead.

use api::SubmitError;

use crate::paths;
use crate::strings::failure_message;

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("alert: {}", message);
    }
}

/// Navigate the whole page to `path`.
pub fn go_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("navigate: {}", path);
    }
}

/// Tell the user why a submission did not go through. A missing sign-in
/// alerts `sign_in_message` and sends the user to the login page.
pub fn report_failure(err: SubmitError, sign_in_message: &str, fallback: &str) {
    match err {
        SubmitError::SignInRequired => {
            alert(sign_in_message);
            go_to(paths::LOGIN);
        }
        SubmitError::Api(e) => {
            tracing::warn!("submission failed: {}", e);
            alert(&failure_message(&e, fallback));
        }
    }
}
