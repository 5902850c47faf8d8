//! Host-only network adapter model and selection.
//!
//! The hypervisor CLI reports host-only adapters as blank-line-separated
//! paragraphs of `Key: Value` lines. [`parse_adapters`] scans that text into
//! [`AdapterRecord`] values; [`select_adapter`] decides which adapter (if
//! any) sits in the target subnet and whether it needs reconfiguring.

pub mod reconcile;
pub mod vbox;

use serde::Serialize;

/// One parsed host-only network adapter description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdapterRecord {
    /// Adapter label assigned by the hypervisor (e.g. "vboxnet0").
    pub name: String,

    /// Dotted-quad address, empty if the adapter has none assigned.
    pub ip_address: String,
}

/// Which adapter to converge, derived fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetState {
    /// Name of the adapter in the target subnet.
    pub selected_adapter: String,

    /// False only when the adapter already holds the canonical address.
    pub needs_reconfigure: bool,
}

/// Parse the hypervisor's adapter listing into ordered records.
///
/// Line-oriented scanner: each non-blank line joins the current record, a
/// blank line flushes it. Lines split on the first colon with both sides
/// trimmed; only `Name` and `IPAddress` keys are tracked, everything else is
/// ignored without breaking paragraph grouping. The last value wins when a
/// key repeats within a paragraph. Duplicate adapter names are preserved as
/// separate records.
pub fn parse_adapters(output: &str) -> Vec<AdapterRecord> {
    let mut records = Vec::new();
    let mut current: Option<AdapterRecord> = None;

    for line in output.lines() {
        if line.trim().is_empty() {
            if let Some(record) = current.take() {
                records.push(record);
            }
            continue;
        }

        let record = current.get_or_insert_with(AdapterRecord::default);
        if let Some((key, value)) = line.split_once(':') {
            match key.trim() {
                "Name" => record.name = value.trim().to_string(),
                "IPAddress" => record.ip_address = value.trim().to_string(),
                _ => {}
            }
        }
    }

    if let Some(record) = current {
        records.push(record);
    }

    records
}

/// Select the adapter occupying the target subnet, if any.
///
/// The last adapter in listing order whose address starts with `prefix`
/// wins. Returns `None` when no adapter matches — a valid state on a clean
/// host, where the platform will create a fresh adapter later with the
/// declared address.
pub fn select_adapter(
    adapters: &[AdapterRecord],
    prefix: &str,
    canonical: &str,
) -> Option<TargetState> {
    adapters
        .iter()
        .filter(|adapter| adapter.ip_address.starts_with(prefix))
        .last()
        .map(|adapter| TargetState {
            selected_adapter: adapter.name.clone(),
            needs_reconfigure: adapter.ip_address != canonical,
        })
}
