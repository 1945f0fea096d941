/// Cache bucket for the current site version; older buckets are purged on activate
pub const CACHE_NAME: &str = "web-builder-v1";

/// URLs cached on install
pub const PRECACHE_URLS: [&str; 4] = ["/", "/index.html", "/styles.css", "/manifest.json"];

/// Cache-first service worker script
pub fn generate_service_worker() -> String {
    let urls = PRECACHE_URLS
        .iter()
        .map(|url| format!("  '{}'", url))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r#"// Service Worker for Web Builder PWA
const CACHE_NAME = '{cache}';
const urlsToCache = [
{urls}
];

self.addEventListener('install', function(event) {{
  event.waitUntil(
    caches.open(CACHE_NAME)
      .then(function(cache) {{
        console.log('Opened cache');
        return cache.addAll(urlsToCache);
      }})
  );
}});

self.addEventListener('fetch', function(event) {{
  event.respondWith(
    caches.match(event.request)
      .then(function(response) {{
        // Return cached version if available, otherwise fetch from network
        if (response) {{
          return response;
        }}
        return fetch(event.request);
      }}
    )
  );
}});

self.addEventListener('activate', function(event) {{
  event.waitUntil(
    caches.keys().then(function(cacheNames) {{
      return Promise.all(
        cacheNames.map(function(cacheName) {{
          if (cacheName !== CACHE_NAME) {{
            console.log('Deleting old cache:', cacheName);
            return caches.delete(cacheName);
          }}
        }})
      );
    }})
  );
}});
"#,
        cache = CACHE_NAME,
        urls = urls,
    )
}
