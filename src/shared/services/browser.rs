use crate::domain::services::BrowserWindow;

/// Width reported by hosts without a viewport (SSR, desktop tests).
const DESKTOP_WIDTH_PX: f64 = 1280.0;

/// The browser `window`
#[derive(Debug, Default, Clone, Copy)]
pub struct WebWindow;

#[cfg(target_arch = "wasm32")]
impl BrowserWindow for WebWindow {
    fn inner_width(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(DESKTOP_WIDTH_PX)
    }

    fn redirect(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!("No window available for redirect to {}", href);
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            tracing::error!("Failed to redirect to {}: {:?}", href, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BrowserWindow for WebWindow {
    fn inner_width(&self) -> f64 {
        DESKTOP_WIDTH_PX
    }

    fn redirect(&self, href: &str) {
        // No top-level location outside the browser
        tracing::warn!("Top-level redirect not available on this host: {}", href);
    }
}
