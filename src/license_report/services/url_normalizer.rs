//! Repository URL canonicalization.
//!
//! Registries report repository locations in many shapes
//! (`git+ssh://git@github.com/foo/bar.git`, `git@github.com:foo/bar`,
//! `https://www.github.com/foo/bar`, bare `github.com/foo/bar`). Everything
//! is folded into `https://host/account/repo`.

/// Normalizes an optional repository URL; `None` passes through.
pub fn normalize(url: Option<&str>) -> Option<String> {
    url.map(normalize_url)
}

/// Canonical `https://host/path` form of a repository URL.
///
/// Idempotent: normalizing the result again returns it unchanged.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    let mut rest = strip_scheme(trimmed);
    let had_scheme = rest.len() != trimmed.len();
    rest = strip_user_info(rest);
    if rest
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("www."))
    {
        rest = &rest[4..];
    }
    if let Some(index) = rest.find(['#', '?']) {
        rest = &rest[..index];
    }
    let rest = strip_repository_suffixes(rest);

    let (host, path) = split_host(rest, had_scheme);
    let host = host.to_ascii_lowercase();
    if path.is_empty() {
        format!("https://{}", host)
    } else {
        format!("https://{}/{}", host, path)
    }
}

/// Account (user or organization) segment of a normalized URL.
pub fn account(normalized_url: Option<&str>) -> Option<String> {
    normalized_url?
        .split('/')
        .nth(3)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Truncates a normalized URL to `https://host/account/repo`.
///
/// Go module paths may carry a major-version or sub-package suffix
/// (`github.com/foo/bar/v2`) that is not part of the repository.
pub fn repository_root(normalized_url: &str) -> String {
    normalized_url
        .splitn(6, '/')
        .take(5)
        .collect::<Vec<_>>()
        .join("/")
}

/// Drops any `scheme://` prefix (`https://`, `git+ssh://`, `ssh://`, ...)
fn strip_scheme(url: &str) -> &str {
    match url.split_once("://") {
        Some((scheme, rest))
            if !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) =>
        {
            rest
        }
        _ => url,
    }
}

/// Drops `git@` or `user:token@` in front of the host
fn strip_user_info(url: &str) -> &str {
    let host_end = url.find('/').unwrap_or(url.len());
    match url[..host_end].rfind('@') {
        Some(index) => &url[index + 1..],
        None => url,
    }
}

/// Drops trailing `/` and `.git` until neither is left (`bar/.git/` -> `bar`)
fn strip_repository_suffixes(url: &str) -> &str {
    let mut rest = url;
    loop {
        let trimmed = rest.trim_end_matches('/');
        let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
        if trimmed.len() == rest.len() {
            return rest;
        }
        rest = trimmed;
    }
}

/// Splits `host/path` or scp-style `host:path`.
///
/// A `:digits` segment is a port only when the URL carried a scheme; without
/// one the colon is always the scp path separator (`github.com:1602/repo`).
fn split_host(url: &str, had_scheme: bool) -> (&str, &str) {
    let host_end = url.find('/').unwrap_or(url.len());
    if let Some(colon) = url[..host_end].find(':') {
        let after = &url[colon + 1..];
        if !had_scheme || !after.starts_with(|c: char| c.is_ascii_digit()) {
            return (&url[..colon], after);
        }
    }
    match url.split_once('/') {
        Some((host, path)) => (host, path),
        None => (url, ""),
    }
}
