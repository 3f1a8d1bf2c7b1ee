use http::HeaderMap;

const FORWARDED_HOST: &str = "x-forwarded-host";

/// Returns the hostname the current client used to reach the site.
///
/// `X-Forwarded-Host` wins over `Host`; any `:port` suffix is dropped and an
/// empty result falls back to `default_host`.
#[must_use]
pub fn request_hostname(headers: &HeaderMap, default_host: &str) -> String {
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
    let host = header(FORWARDED_HOST)
        .or_else(|| header(http::header::HOST.as_str()))
        .unwrap_or_default();
    let hostname = host.split(':').next().unwrap_or_default();

    if hostname.is_empty() {
        default_host.to_owned()
    } else {
        hostname.to_owned()
    }
}
