//! HTML shell for the iframe preview.

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

use crate::unit::{JsUnit, WebUnit};

/// `sandbox` attribute of the preview iframe: scripts and dialogs run, but
/// the document gets an opaque origin with no access to host storage.
pub const IFRAME_SANDBOX: &str = "allow-scripts allow-modals";

const LOG_STYLES: &str = r".log {
  padding: 4px 0;
  border-bottom: 1px solid var(--color-bg-secondary);
  white-space: pre-wrap;
  word-break: break-all;
  font-size: 0.875rem;
}
.log.error { color: #FF6347; }
.log.warn { color: #FFD700; }
.log.info { color: #87CEFA; }";

const CONSOLE_CAPTURE: &str = r"const originalConsole = { ...window.console };
const createLog = (args, className) => {
  const el = document.createElement('div');
  el.className = 'log ' + className;
  el.textContent = Array.from(args).map((m) => {
    if (m instanceof Error) { return m.stack || m.message; }
    try { return JSON.stringify(m, null, 2); } catch (e) { return String(m); }
  }).join(' ');
  document.body.appendChild(el);
};
window.console.log = (...args) => { createLog(args, 'log'); originalConsole.log(...args); };
window.console.error = (...args) => { createLog(args, 'error'); originalConsole.error(...args); };
window.console.warn = (...args) => { createLog(args, 'warn'); originalConsole.warn(...args); };
window.console.info = (...args) => { createLog(args, 'info'); originalConsole.info(...args); };
window.addEventListener('error', (event) => { createLog([event.message], 'error'); });";

/// Build the `srcdoc` for a preview iframe.
///
/// With no markup and some script the document switches to script-only
/// mode: monospace body and console output mirrored as visible log lines.
#[must_use]
pub fn preview_document(html: &str, css: &str, js: &str) -> String {
    let script_only = html.is_empty() && !js.is_empty();
    let (font, padding, capture) = if script_only {
        ("var(--font-code)", "padding: 8px; box-sizing: border-box;", CONSOLE_CAPTURE)
    } else {
        ("var(--font-secondary)", "", "")
    };

    format!(
        r"<html>
<head>
<style>
body {{
  font-family: {font};
  color: var(--color-text-primary);
  background-color: var(--color-bg-primary);
  {padding}
  margin: 0;
}}
{LOG_STYLES}
{css}
</style>
</head>
<body>
{html}
<script>
{capture}
try {{
{js}
}} catch (e) {{
  console.error(e);
}}
</script>
</body>
</html>"
    )
}

impl WebUnit {
    #[must_use]
    pub fn preview_document(&self) -> String {
        preview_document(&self.html, &self.css, &self.js)
    }
}

impl JsUnit {
    #[must_use]
    pub fn preview_document(&self) -> String {
        preview_document("", "", &self.js)
    }
}
