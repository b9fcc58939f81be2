use crate::config::AppConfig;
use crate::pwa::manifest::{APP_DESCRIPTION, APP_NAME, THEME_COLOR};
use crate::utils::icon::ICON_GLYPH;

use super::escape;
use super::styles::stylesheet;

pub const MENU_ITEMS: [&str; 4] = ["Dashboard", "Settings", "Help", "About"];
pub const COPYRIGHT: &str = "© 2026 Gait Daily. All rights reserved.";

/// Wraps `body` in the full document: metadata, splash overlay, slide-up
/// menu and the client script that follows the onboarding stream.
pub fn render_document(config: &AppConfig, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="theme-color" content="{theme}">
<meta name="apple-mobile-web-app-capable" content="yes">
<meta name="apple-mobile-web-app-status-bar-style" content="black">
<link rel="manifest" href="/manifest.webmanifest">
<link rel="icon" type="image/svg+xml" href="/api/icon?size=32">
<link rel="apple-touch-icon" href="/api/icon?size=180">
<style>{styles}</style>
</head>
<body>
{splash}
{menu}
<main>{body}</main>
<script>{script}</script>
</body>
</html>
"#,
        title = escape(APP_NAME),
        description = escape(APP_DESCRIPTION),
        theme = THEME_COLOR,
        styles = stylesheet(&config.timing),
        splash = render_splash(config.timing.icon_reveal.is_none()),
        menu = render_menu(),
        body = body,
        script = client_script(config.register_service_worker),
    )
}

fn render_splash(icon_revealed: bool) -> String {
    let class = if icon_revealed {
        "splash icon-revealed"
    } else {
        "splash"
    };
    format!(
        r#"<div id="splash" class="{class}" aria-hidden="true">
  <div class="splash-icon">
    <div class="splash-ring"></div>
    <div class="splash-core">{glyph}</div>
    <div class="splash-ring secondary"></div>
  </div>
</div>"#,
        class = class,
        glyph = escape(ICON_GLYPH),
    )
}

fn render_menu() -> String {
    let buttons: String = MENU_ITEMS
        .iter()
        .map(|item| format!(r#"<button type="button">{}</button>"#, escape(item)))
        .collect();
    format!(
        r#"<div id="menu" class="menu">
  <div class="menu-inner">
    <h2>Welcome</h2>
    <nav>{buttons}</nav>
    <footer><p>{copyright}</p></footer>
  </div>
</div>"#,
        buttons = buttons,
        copyright = escape(COPYRIGHT),
    )
}

const ONBOARDING_SCRIPT: &str = r#"
(function () {
  var splash = document.getElementById('splash');
  var menu = document.getElementById('menu');
  function apply(view) {
    splash.classList.toggle('icon-revealed', view.icon_revealed);
    splash.classList.toggle('is-hidden', !view.splash_visible);
    menu.classList.toggle('is-visible', view.menu_visible);
    if (!view.splash_visible) {
      setTimeout(function () { splash.remove(); }, 1000);
    }
  }
  if (!window.EventSource) {
    apply({ splash_visible: false, menu_visible: true, icon_revealed: true });
    return;
  }
  var events = new EventSource('/api/onboarding');
  events.addEventListener('view', function (e) {
    var view = JSON.parse(e.data);
    apply(view);
    if (view.phase === 'menu_visible') events.close();
  });
  events.onerror = function () {
    events.close();
    apply({ splash_visible: false, menu_visible: true, icon_revealed: true });
  };
})();
"#;

const SERVICE_WORKER_SCRIPT: &str = r#"
if ('serviceWorker' in navigator) {
  window.addEventListener('load', function () {
    navigator.serviceWorker.register('/sw.js', { scope: '/' })
      .then(function (reg) { console.log('Service worker registered:', reg.scope); })
      .catch(function (err) { console.log('Service worker registration failed:', err); });
  });
}
"#;

fn client_script(register_service_worker: bool) -> String {
    let mut script = String::from(ONBOARDING_SCRIPT);
    if register_service_worker {
        script.push_str(SERVICE_WORKER_SCRIPT);
    }
    script
}
