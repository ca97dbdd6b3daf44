/// Subdomains that can never be claimed by a site, regardless of who asks.
pub const RESERVED_SUBDOMAINS: &[&str] = &[
    "admin",
    "api",
    "app",
    "assets",
    "auth",
    "blog",
    "dashboard",
    "docs",
    "feed",
    "help",
    "login",
    "logout",
    "mail",
    "signup",
    "static",
    "status",
    "support",
    "www",
];

/// Checks whether a subdomain is on the reserved list, case-insensitively.
pub fn is_reserved(subdomain: &str) -> bool {
    let lowered = subdomain.to_ascii_lowercase();
    RESERVED_SUBDOMAINS.contains(&lowered.as_str())
}
