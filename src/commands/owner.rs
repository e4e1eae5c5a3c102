//! Owner identification for `lock --stamp-owner`.

/// Environment variables consulted, in order, for the login name.
const USER_VARS: [&str; 3] = ["USER", "USERNAME", "LOGNAME"];

const UNKNOWN: &str = "unknown";

/// Metadata pairs stamped onto a record by `lock --stamp-owner`.
pub(super) fn owner_stamp() -> [(&'static str, String); 2] {
    [
        ("owner", format!("{}@{}", login_name(), host_name())),
        ("pid", std::process::id().to_string()),
    ]
}

fn login_name() -> String {
    USER_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn host_name() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
