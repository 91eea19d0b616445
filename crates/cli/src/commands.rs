//! Subcommand definitions and execution.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;

use bridge::{codec, BridgeEndpoint, BRIDGE_ENDPOINT_PREFIX};
use datastore::{key_path, KvObject};

pub type CommandResult = anyhow::Result<()>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a persisted endpoint record and print a summary
    Inspect {
        /// Path to the record's raw JSON bytes
        file: PathBuf,
    },
    /// Print the store key (or key prefix) for a network
    Key {
        /// Network identifier
        #[arg(long)]
        network: String,
        /// Endpoint identifier; omit to print the network's key prefix
        #[arg(long)]
        endpoint: Option<String>,
    },
}

impl Command {
    pub fn execute(self) -> CommandResult {
        match self {
            Command::Inspect { file } => inspect(&file),
            Command::Key { network, endpoint } => key(&network, endpoint.as_deref()),
        }
    }
}

fn inspect(file: &PathBuf) -> CommandResult {
    let bytes = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let mut ep = BridgeEndpoint::prototype("-");
    codec::endpoint_from_bytes(&mut ep, &bytes)
        .with_context(|| format!("decoding {}", file.display()))?;

    println!("id:          {}", ep.id());
    println!("srcName:     {}", ep.src_name);
    println!("addr:        {}", display_opt(&ep.addr));
    println!("addrv6:      {}", display_opt(&ep.addrv6));
    println!("macAddress:  {}", display_opt(&ep.mac_address));
    match &ep.config {
        None => println!("config:      (none)"),
        Some(config) => {
            println!("config:");
            println!("  MacAddress:   {}", display_opt(&config.mac_address));
            println!("  PortBindings: {}", display_list(&config.port_bindings));
            println!("  ExposedPorts: {}", display_list(&config.exposed_ports));
        }
    }
    match &ep.container_config {
        None => println!("containerConfiguration: (none)"),
        Some(config) => {
            println!("containerConfiguration:");
            println!("  ParentEndpoints: {}", config.parent_endpoints.join(", "));
            println!("  ChildEndpoints:  {}", config.child_endpoints.join(", "));
        }
    }
    println!("portMapping: {}", display_list(&ep.port_mapping));
    Ok(())
}

fn key(network: &str, endpoint: Option<&str>) -> CommandResult {
    let path = match endpoint {
        Some(endpoint) => key_path(&BridgeEndpoint::new(network, endpoint, "").key()),
        None => key_path(&[BRIDGE_ENDPOINT_PREFIX.to_string(), network.to_string()]),
    };
    println!("{path}");
    Ok(())
}

fn display_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "(none)".to_string(),
    }
}

fn display_list<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "(none)".to_string();
    }
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
