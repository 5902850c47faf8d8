//! Pre-flight host-only network reconciliation.
//!
//! Runs once per bring-up, before the VM boots: inspect the host's host-only
//! adapters, pick the one already in the target subnet, and re-address it to
//! the canonical address only when it differs. Converged hosts see no side
//! effects at all, so repeated bring-ups are safe.

use stacklab_core::config::HostOnlyConfig;
use stacklab_core::error::Result;

use super::select_adapter;
use super::vbox::HostOnlyCtl;

/// Terminal state of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No adapter in the target subnet; the platform will create one later.
    NoAdapter,

    /// The selected adapter already holds the canonical address.
    Converged { adapter: String },

    /// The selected adapter was re-addressed to the canonical address.
    Reconfigured { adapter: String },
}

/// Reconcile the host's host-only adapters against the target network.
///
/// Fatal errors (the listing command failing, or the reconfiguration command
/// exiting non-zero) propagate to the caller and must abort the bring-up.
pub fn reconcile(ctl: &dyn HostOnlyCtl, net: &HostOnlyConfig) -> Result<ReconcileOutcome> {
    let adapters = ctl.list_adapters()?;

    let Some(target) = select_adapter(&adapters, &net.subnet_prefix, &net.address) else {
        tracing::debug!(
            prefix = %net.subnet_prefix,
            "no host-only adapter in target subnet, nothing to adjust"
        );
        return Ok(ReconcileOutcome::NoAdapter);
    };

    if !target.needs_reconfigure {
        tracing::debug!(
            adapter = %target.selected_adapter,
            address = %net.address,
            "host-only adapter already converged"
        );
        return Ok(ReconcileOutcome::Converged {
            adapter: target.selected_adapter,
        });
    }

    ctl.set_address(&target.selected_adapter, &net.address, &net.netmask)?;

    Ok(ReconcileOutcome::Reconfigured {
        adapter: target.selected_adapter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::AdapterRecord;
    use stacklab_core::error::StackError;
    use std::cell::RefCell;

    /// In-memory stand-in for the VBoxManage boundary. `set_address`
    /// mutates the fake adapter table, so convergence across repeated runs
    /// behaves like the real host.
    struct FakeCtl {
        adapters: RefCell<Vec<AdapterRecord>>,
        set_calls: RefCell<Vec<(String, String, String)>>,
        fail_status: Option<i32>,
    }

    impl FakeCtl {
        fn new(adapters: Vec<(&str, &str)>) -> Self {
            Self {
                adapters: RefCell::new(
                    adapters
                        .into_iter()
                        .map(|(name, ip)| AdapterRecord {
                            name: name.to_string(),
                            ip_address: ip.to_string(),
                        })
                        .collect(),
                ),
                set_calls: RefCell::new(Vec::new()),
                fail_status: None,
            }
        }

        fn failing(adapters: Vec<(&str, &str)>, status: i32) -> Self {
            Self {
                fail_status: Some(status),
                ..Self::new(adapters)
            }
        }

        fn set_call_count(&self) -> usize {
            self.set_calls.borrow().len()
        }
    }

    impl HostOnlyCtl for FakeCtl {
        fn list_adapters(&self) -> Result<Vec<AdapterRecord>> {
            Ok(self.adapters.borrow().clone())
        }

        fn set_address(&self, adapter: &str, address: &str, netmask: &str) -> Result<()> {
            self.set_calls.borrow_mut().push((
                adapter.to_string(),
                address.to_string(),
                netmask.to_string(),
            ));

            if let Some(status) = self.fail_status {
                return Err(StackError::Reconfigure {
                    adapter: adapter.to_string(),
                    status,
                    output: "VBoxManage: error: simulated failure".to_string(),
                });
            }

            for record in self.adapters.borrow_mut().iter_mut() {
                if record.name == adapter {
                    record.ip_address = address.to_string();
                }
            }
            Ok(())
        }
    }

    fn net() -> HostOnlyConfig {
        HostOnlyConfig::default()
    }

    #[test]
    fn test_converged_adapter_is_left_alone() {
        let ctl = FakeCtl::new(vec![
            ("vboxnet0", "172.24.4.225"),
            ("vboxnet1", "192.168.27.1"),
        ]);
        let outcome = reconcile(&ctl, &net()).unwrap();
        assert_eq!(
            outcome,
            ReconcileOutcome::Converged {
                adapter: "vboxnet0".to_string()
            }
        );
        assert_eq!(ctl.set_call_count(), 0);
    }

    #[test]
    fn test_mismatched_adapter_is_reconfigured() {
        let ctl = FakeCtl::new(vec![("vboxnet0", "172.24.4.5")]);
        let outcome = reconcile(&ctl, &net()).unwrap();
        assert_eq!(
            outcome,
            ReconcileOutcome::Reconfigured {
                adapter: "vboxnet0".to_string()
            }
        );
        assert_eq!(
            ctl.set_calls.borrow()[0],
            (
                "vboxnet0".to_string(),
                "172.24.4.225".to_string(),
                "255.255.255.0".to_string()
            )
        );
    }

    #[test]
    fn test_no_subnet_match_is_a_silent_skip() {
        let ctl = FakeCtl::new(vec![("vboxnet0", "10.0.0.1")]);
        let outcome = reconcile(&ctl, &net()).unwrap();
        assert_eq!(outcome, ReconcileOutcome::NoAdapter);
        assert_eq!(ctl.set_call_count(), 0);
    }

    #[test]
    fn test_empty_adapter_list_is_a_silent_skip() {
        let ctl = FakeCtl::new(vec![]);
        assert_eq!(reconcile(&ctl, &net()).unwrap(), ReconcileOutcome::NoAdapter);
    }

    #[test]
    fn test_repeated_runs_are_idempotent() {
        let ctl = FakeCtl::new(vec![("vboxnet0", "172.24.4.5")]);

        let first = reconcile(&ctl, &net()).unwrap();
        assert!(matches!(first, ReconcileOutcome::Reconfigured { .. }));
        assert_eq!(ctl.set_call_count(), 1);

        // No external change between runs: the second pass must not issue
        // another reconfiguration call
        let second = reconcile(&ctl, &net()).unwrap();
        assert!(matches!(second, ReconcileOutcome::Converged { .. }));
        assert_eq!(ctl.set_call_count(), 1);
    }

    #[test]
    fn test_last_matching_adapter_wins() {
        let ctl = FakeCtl::new(vec![
            ("vboxnet0", "172.24.4.225"),
            ("vboxnet1", "172.24.4.7"),
        ]);
        let outcome = reconcile(&ctl, &net()).unwrap();
        assert_eq!(
            outcome,
            ReconcileOutcome::Reconfigured {
                adapter: "vboxnet1".to_string()
            }
        );
    }

    #[test]
    fn test_reconfigure_failure_propagates_status() {
        let ctl = FakeCtl::failing(vec![("vboxnet0", "172.24.4.5")], 2);
        let err = reconcile(&ctl, &net()).unwrap_err();
        assert_eq!(err.exit_status(), 2);
    }

    #[test]
    fn test_listing_failure_propagates() {
        struct BrokenCtl;
        impl HostOnlyCtl for BrokenCtl {
            fn list_adapters(&self) -> Result<Vec<AdapterRecord>> {
                Err(StackError::ToolInvocation {
                    command: "VBoxManage list hostonlyifs".to_string(),
                    message: "No such file or directory".to_string(),
                    hint: None,
                })
            }
            fn set_address(&self, _: &str, _: &str, _: &str) -> Result<()> {
                panic!("must not attempt reconfiguration with no adapter data");
            }
        }

        let err = reconcile(&BrokenCtl, &net()).unwrap_err();
        assert!(matches!(err, StackError::ToolInvocation { .. }));
    }
}
