use clap::{Parser, Subcommand};
use mdns_wire_domain::{CliOverrides, RecordType};
use std::net::Ipv4Addr;
use tracing::info;

mod bootstrap;
mod commands;
mod observer;

#[derive(Parser)]
#[command(name = "mdns-wire")]
#[command(version = "0.1.0")]
#[command(about = "mDNS packet codec - listen, query and announce on the local link")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Local interface address used to join the multicast group
    #[arg(short = 'i', long, global = true)]
    interface: Option<Ipv4Addr>,

    /// mDNS port
    #[arg(short = 'p', long, global = true)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every query and record seen on the link
    Listen {
        /// Also hex-dump each datagram
        #[arg(long)]
        raw: bool,
    },
    /// Send one question and print the replies
    Query {
        name: String,

        /// Record type (A, PTR, SRV, TXT, AAAA, HINFO, ANY or TYPEnnn)
        #[arg(short = 't', long = "type", default_value = "A")]
        qtype: RecordType,

        /// Ask for a unicast reply
        #[arg(long)]
        unicast: bool,

        /// Seconds to wait for replies
        #[arg(short = 'w', long, default_value_t = 3)]
        wait: u64,
    },
    /// Send an unsolicited A record
    Announce {
        name: String,
        address: Ipv4Addr,

        /// Record TTL in seconds; 0 announces removal
        #[arg(long, default_value_t = 120)]
        ttl: u32,

        /// Set the cache-flush bit
        #[arg(long)]
        flush: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        interface: cli.interface,
        port: cli.port,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting mdns-wire v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Listen { raw } => commands::listen::run(&config, raw).await,
        Command::Query {
            name,
            qtype,
            unicast,
            wait,
        } => commands::query::run(&config, &name, qtype, unicast, wait).await,
        Command::Announce {
            name,
            address,
            ttl,
            flush,
        } => commands::announce::run(&config, &name, address, ttl, flush).await,
    }
}
