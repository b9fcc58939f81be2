//! Service worker served at `/sw.js`.
//!
//! Navigations go to the network first and fall back to the last cached
//! copy, so the landing page still opens offline after one visit. Generated
//! icons are immutable per size and are served cache-first.

pub const CACHE_NAME: &str = "gait-daily-v1";

pub fn script() -> String {
    format!(
        r#"const CACHE_NAME = '{cache}';
const PRECACHE = ['/', '/manifest.webmanifest', '/api/icon?size=192', '/api/icon?size=512'];

self.addEventListener('install', (event) => {{
  event.waitUntil(
    caches.open(CACHE_NAME).then((cache) => cache.addAll(PRECACHE)).then(() => self.skipWaiting())
  );
}});

self.addEventListener('activate', (event) => {{
  event.waitUntil(
    caches.keys()
      .then((keys) => Promise.all(keys.filter((key) => key !== CACHE_NAME).map((key) => caches.delete(key))))
      .then(() => self.clients.claim())
  );
}});

self.addEventListener('fetch', (event) => {{
  const request = event.request;
  if (request.method !== 'GET') return;
  const url = new URL(request.url);
  if (url.origin !== self.location.origin || url.pathname === '/api/onboarding') return;

  if (url.pathname === '/api/icon') {{
    event.respondWith(
      caches.match(request).then((cached) => cached || fetch(request).then((response) => {{
        const copy = response.clone();
        caches.open(CACHE_NAME).then((cache) => cache.put(request, copy));
        return response;
      }}))
    );
    return;
  }}

  if (request.mode === 'navigate') {{
    event.respondWith(
      fetch(request)
        .then((response) => {{
          const copy = response.clone();
          caches.open(CACHE_NAME).then((cache) => cache.put(request, copy));
          return response;
        }})
        .catch(() => caches.match(request).then((cached) => cached || caches.match('/')))
    );
  }}
}});
"#,
        cache = CACHE_NAME,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_skips_the_event_stream() {
        let js = script();
        assert!(js.starts_with("const CACHE_NAME = 'gait-daily-v1';"));
        assert!(js.contains("url.pathname === '/api/onboarding'"));
        assert!(js.contains("self.addEventListener('fetch'"));
    }
}
