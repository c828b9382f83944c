//! Command-line interface: argument definitions and command dispatch.

use crate::config::OutputConfig;
use crate::models::{parse_address, AddressSpace};
use crate::output::{render_capacity, render_explain, render_partitions, Painter};
use crate::processing::{contains, divide_by_capacity, divide_equally, network_details, overlaps};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// cidr-calc - perform various actions on CIDR ranges
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overrides LOG_LEVEL)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// log4rs YAML file to configure logging with
    #[arg(long, global = true)]
    pub log_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Return the count of all addresses in a given CIDR range
    Count { cidr: String },

    /// Check whether an IP address belongs to a CIDR range
    Contains { cidr: String, address: String },

    /// Check if a CIDR range overlaps with another CIDR range
    Overlaps { first: String, second: String },

    /// Divide a CIDR range into N networks, or by host counts with -u
    #[command(visible_aliases = ["d", "div"])]
    Divide {
        cidr: String,

        /// Number of equal networks
        #[arg(allow_negative_numbers = true, required_unless_present = "hosts")]
        divisor: Option<i64>,

        /// Hosts needed per network, e.g. 20,10,30
        #[arg(short = 'u', long = "hosts", alias = "users", value_delimiter = ',')]
        hosts: Vec<u64>,
    },

    /// Provide information about a CIDR range
    Explain {
        cidr: String,

        /// Print the details as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every address in a CIDR range
    List {
        cidr: String,

        /// Refuse ranges with more addresses than this [default: 65536]
        #[arg(long)]
        limit: Option<u64>,
    },

    /// Next network after a CIDR range, with the given prefix length
    Next { cidr: String, prefix: u8 },
}

/// Execute a parsed command, writing results to `out`.
pub fn run(
    command: &Command,
    config: &OutputConfig,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    log::debug!("run {command:?}");
    match command {
        Command::Count { cidr } => {
            let space = AddressSpace::parse(cidr)?;
            writeln!(out, "{}", space.total_address_count())?;
        }
        Command::Contains { cidr, address } => {
            let space = AddressSpace::parse(cidr)?;
            let addr = parse_address(address)?;
            writeln!(out, "{}", contains(&space, addr))?;
        }
        Command::Overlaps { first, second } => {
            let a = AddressSpace::parse(first)?;
            let b = AddressSpace::parse(second)?;
            writeln!(out, "{}", overlaps(&a, &b))?;
        }
        Command::Divide {
            cidr,
            divisor,
            hosts,
        } => {
            let space = AddressSpace::parse(cidr)?;
            if hosts.is_empty() {
                let divisor = divisor.ok_or("Enter at least one divisor")?;
                let networks = divide_equally(&space, divisor)?;
                log::info!("divided {space} into {} networks", networks.len());
                writeln!(out, "{}", render_partitions(&networks))?;
            } else {
                if divisor.is_some() {
                    log::warn!("divisor ignored when dividing by host counts");
                }
                let networks = divide_by_capacity(&space, hosts)?;
                writeln!(out, "{}", render_capacity(&networks, hosts))?;
            }
        }
        Command::Explain { cidr, json } => {
            let space = AddressSpace::parse(cidr)?;
            let details = network_details(&space);
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&details)?)?;
            } else {
                writeln!(out, "{}", render_explain(&details, &Painter::new(config)))?;
            }
        }
        Command::List { cidr, limit } => {
            let space = AddressSpace::parse(cidr)?;
            let count = space.total_address_count();
            let limit = limit.unwrap_or(config.list_limit);
            if count > BigUint::from(limit) {
                return Err(format!(
                    "{space} holds {count} addresses, more than the list limit of {limit}"
                )
                .into());
            }
            for addr in space.addresses() {
                writeln!(out, "{addr}")?;
            }
        }
        Command::Next { cidr, prefix } => {
            let space = AddressSpace::parse(cidr)?;
            writeln!(out, "{}", space.next_subnet(*prefix)?)?;
        }
    }
    Ok(())
}

/// Execute a command against stdout.
pub fn run_to_stdout(command: &Command, config: &OutputConfig) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(command, config, &mut out)?;
    out.flush()?;
    Ok(())
}
