use url::Url;

const LOOPBACK_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Points loopback-anchored media URLs at the host the client used.
///
/// Relative URLs are resolved against `http://{hostname}:{port}`. URLs on
/// `localhost` or `127.0.0.1` are rewritten to plain HTTP on
/// `hostname:port`; any other host is left alone. Absent or empty input
/// yields `None`. Input that cannot be parsed is returned unchanged.
#[must_use]
pub fn resolve_media_url(url: Option<&str>, hostname: &str, port: u16) -> Option<String> {
    let raw = url.filter(|raw| !raw.is_empty())?;

    match rewrite(raw, hostname, port) {
        Some(resolved) => Some(resolved),
        None => {
            tracing::debug!(url = raw, hostname, port, "Leaving unparsable media URL untouched");
            Some(raw.to_owned())
        }
    }
}

fn rewrite(raw: &str, hostname: &str, port: u16) -> Option<String> {
    // The URL parser would percent-encode whitespace into a relative path;
    // such values are not media links.
    if raw.chars().any(char::is_whitespace) {
        return None;
    }

    let base = Url::parse(&format!("http://{hostname}:{port}")).ok()?;
    let mut parsed = base.join(raw).ok()?;

    let is_loopback = parsed
        .host_str()
        .is_some_and(|host| LOOPBACK_HOSTS.contains(&host));
    if is_loopback {
        parsed.set_scheme("http").ok()?;
        parsed.set_host(Some(hostname)).ok()?;
        parsed.set_port(Some(port)).ok()?;
    }

    Some(parsed.into())
}
