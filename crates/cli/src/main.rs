use clap::{Parser, Subcommand};
use redis_dns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod server;

const AFTER_HELP: &str = "\
Examples:
  $ redis-dns server
  $ redis-dns add A redis-dns.com 127.0.0.1 CNAME redis-dns.com www.redis-dns.com blah.redis-dns.com
  $ redis-dns remove A redis-dns.com 127.0.0.1

Record:
  <type> <name...> <ip...>      A, AAAA
  CNAME <target> <alias...>
  <type> <name> <value...>      NS, PTR, TXT";

#[derive(Parser)]
#[command(name = "redis-dns")]
#[command(version)]
#[command(about = "Redis DNS - Authoritative DNS server answering from Redis")]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Redis connection URL
    #[arg(long, value_name = "URL", global = true)]
    redis_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the DNS server
    #[command(visible_alias = "s")]
    Server {
        /// UDP port, 0 disables UDP
        #[arg(short = 'u', long)]
        udp_port: Option<u16>,

        /// TCP port, 0 disables TCP
        #[arg(short = 't', long)]
        tcp_port: Option<u16>,

        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// Serve from a process-local store instead of Redis
        #[arg(long)]
        in_memory: bool,
    },

    /// Add dns entries
    #[command(visible_alias = "a")]
    Add {
        #[arg(value_name = "RECORD", required = true)]
        records: Vec<String>,
    },

    /// Remove dns entries
    #[command(visible_alias = "r")]
    Remove {
        #[arg(value_name = "RECORD", required = true)]
        records: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cli_overrides = CliOverrides {
        store_url: cli.redis_url.clone(),
        log_level: cli.log_level.clone(),
        ..Default::default()
    };
    if let Command::Server {
        udp_port,
        tcp_port,
        bind,
        ..
    } = &cli.command
    {
        cli_overrides.udp_port = *udp_port;
        cli_overrides.tcp_port = *tcp_port;
        cli_overrides.bind_address = bind.clone();
    }

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    match cli.command {
        Command::Server { in_memory, .. } => {
            info!("Starting Redis DNS Server v{}", env!("CARGO_PKG_VERSION"));
            config.validate_listeners()?;

            let store = bootstrap::connect_store(&config.store, in_memory).await?;
            server::run_dns_server(&config, store).await?;

            info!("Server shutdown complete");
        }
        Command::Add { records } => {
            let store = bootstrap::connect_store(&config.store, false).await?;
            commands::add(store, &config, &records).await?;
        }
        Command::Remove { records } => {
            let store = bootstrap::connect_store(&config.store, false).await?;
            commands::remove(store, &config, &records).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flag_after_records() {
        let cli = Cli::try_parse_from([
            "redis-dns",
            "add",
            "A",
            "x.com",
            "1.2.3.4",
            "--redis-url",
            "redis://h",
        ])
        .unwrap();

        assert_eq!(cli.redis_url.as_deref(), Some("redis://h"));
        let Command::Add { records } = cli.command else {
            panic!("expected add");
        };
        assert_eq!(records, vec!["A", "x.com", "1.2.3.4"]);
    }

    #[test]
    fn test_aliases_and_required_records() {
        let cli = Cli::try_parse_from(["redis-dns", "r", "CNAME", "a.com", "b.com"]).unwrap();
        assert!(matches!(cli.command, Command::Remove { .. }));

        assert!(Cli::try_parse_from(["redis-dns", "add"]).is_err());
    }
}
