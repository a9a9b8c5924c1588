//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Plotly glue lives in `assets/js/figure.js` and is evaluated as globals
//! (no ES modules) once Plotly itself has loaded from the CDN. Dataset
//! downloads go through the browser's `fetch()`.

use anyhow::{anyhow, bail, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

static FIGURE_JS: &str = include_str!("../assets/js/figure.js");

/// Injected when the host page does not already provide Plotly.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[COVID] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Wait for Plotly, then install `renderFigure`/`destroyFigure` on `window`.
/// Call once at app startup.
pub fn init_charts() {
    call_js(&format!(
        "if (typeof Plotly === 'undefined' && !document.getElementById('plotly-js')) {{ \
           var s = document.createElement('script'); s.id = 'plotly-js'; s.src = '{}'; \
           document.head.appendChild(s); }}",
        PLOTLY_CDN
    ));

    let store_js = format!(
        "window.__covidFigureScript = {};",
        serde_json::to_string(FIGURE_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForPlotly = setInterval(function() {
                if (typeof Plotly !== 'undefined') {
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__covidFigureScript);
                    delete window.__covidFigureScript;
                    if (typeof renderFigure !== 'undefined') window.renderFigure = renderFigure;
                    if (typeof destroyFigure !== 'undefined') window.destroyFigure = destroyFigure;
                    window.__covidChartsReady = true;
                    console.log('[COVID] charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Draw a serialized Plotly figure into `container_id`.
///
/// Polls until the glue is installed and the container exists. The figure
/// is embedded as a JS string literal and parsed on the JS side.
pub fn render_figure(container_id: &str, figure_json: &str) {
    let literal = serde_json::to_string(figure_json).unwrap_or_else(|_| "\"{}\"".to_string());
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__covidChartsReady &&
                    typeof window.renderFigure !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderFigure('{container_id}', JSON.parse({literal}));
                    }} catch(e) {{ console.error('[COVID] renderFigure error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Clear whatever is drawn in `container_id`.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyFigure) {{ window.destroyFigure('{0}'); }} \
         else {{ var el = document.getElementById('{0}'); if (el) el.innerHTML = ''; }}",
        container_id
    ));
}

/// GET `url` with the browser's `fetch()` and return the body as text.
pub async fn fetch_csv(url: &str) -> Result<String> {
    log::debug!("GET {}", url);
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {} failed: {:?}", url, e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow!("fetch {} did not return a Response", url))?;
    if !resp.ok() {
        bail!("fetch {} returned HTTP {}", url, resp.status());
    }

    let body = JsFuture::from(resp.text().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("reading {} failed: {:?}", url, e))?;
    body.as_string()
        .ok_or_else(|| anyhow!("{} body is not text", url))
}
