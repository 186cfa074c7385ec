//! Resolution of deploy log document names from a log prefix and an
//! optional network qualifier

/// Computes the document name under which a deploy log is stored.
///
/// The name is the log prefix unchanged when no network is given, and
/// `{prefix}_{network}` otherwise. Distinct `(prefix, network)` pairs
/// resolve to distinct names.
pub fn resolve_log_name(log_prefix: &str, network: Option<&str>) -> String {
    match network {
        Some(network) => format!("{log_prefix}_{network}"),
        None => log_prefix.to_string(),
    }
}
