//! `stacklab status` command — Show host-only adapter state.

use std::path::PathBuf;

use clap::Args;

use stacklab_core::config::EnvConfig;
use stacklab_runtime::network::vbox::HostOnlyCtl;
use stacklab_runtime::{select_adapter, VboxManage};

use crate::output;

#[derive(Args)]
pub struct StatusArgs {
    /// Path to the environment configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output adapters as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = EnvConfig::load_or_default(args.config.as_deref())?;
    let adapters = VboxManage::new().list_adapters()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&adapters)?);
        return Ok(());
    }

    let net = &config.hostonly;
    let mut table = output::new_table(&["ADAPTER", "ADDRESS", "TARGET SUBNET"]);
    for adapter in &adapters {
        let address = if adapter.ip_address.is_empty() {
            "-"
        } else {
            adapter.ip_address.as_str()
        };
        let in_subnet = if adapter.ip_address.starts_with(&net.subnet_prefix) {
            "yes"
        } else {
            ""
        };
        table.add_row([adapter.name.as_str(), address, in_subnet]);
    }
    println!("{table}");

    match select_adapter(&adapters, &net.subnet_prefix, &net.address) {
        Some(target) if !target.needs_reconfigure => {
            println!("{} is converged at {}", target.selected_adapter, net.address);
        }
        Some(target) => {
            println!(
                "{} will be reconfigured to {} at bring-up",
                target.selected_adapter, net.address
            );
        }
        None => {
            println!(
                "No host-only adapter matches prefix {}; the platform will create one at bring-up",
                net.subnet_prefix
            );
        }
    }

    Ok(())
}
