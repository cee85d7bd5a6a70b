use clap::{Parser, Subcommand};
use minidns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod client;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "minidns")]
#[command(version)]
#[command(about = "minidns - static A-record DNS server and client over UDP")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error) or an EnvFilter directive;
    /// takes precedence over RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer A queries from the configured records
    Serve {
        /// UDP port to listen on
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,
    },

    /// Interactive lookup prompt
    Client {
        /// Server address (host:port)
        #[arg(short = 's', long)]
        server: Option<String>,

        /// Seconds to wait for each reply
        #[arg(short = 't', long)]
        timeout: Option<u64>,
    },

    /// Resolve the given names once and exit
    Lookup {
        #[arg(required = true, value_name = "DOMAIN")]
        domains: Vec<String>,

        /// Server address (host:port)
        #[arg(short = 's', long)]
        server: Option<String>,

        /// Seconds to wait for each reply
        #[arg(short = 't', long)]
        timeout: Option<u64>,

        /// Print one JSON object per name instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Write to this file instead of stdout
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<String>,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            log_level: self.log_level.clone(),
            ..CliOverrides::default()
        };

        match &self.command {
            Command::Serve { port, bind } => {
                overrides.port = *port;
                overrides.bind_address = bind.clone();
            }
            Command::Client { server, timeout } | Command::Lookup { server, timeout, .. } => {
                overrides.server = server.clone();
                overrides.query_timeout = *timeout;
            }
            Command::Config { .. } => {}
        }

        overrides
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config, cli.log_level.as_deref());

    match cli.command {
        Command::Serve { .. } => {
            info!("Starting minidns server v{}", env!("CARGO_PKG_VERSION"));

            let services = di::DnsServices::new(&config);
            server::start_dns_server(config.server.listen_addr(), services.handler).await?;
        }
        Command::Client { .. } => {
            let services = di::ClientServices::new(&config).await?;
            client::run_repl(&services.lookup, services.timeout_secs).await?;
        }
        Command::Lookup { domains, json, .. } => {
            let services = di::ClientServices::new(&config).await?;
            let failures =
                client::run_lookups(&services.lookup, &domains, json, services.timeout_secs).await?;
            if failures > 0 {
                anyhow::bail!("{} of {} lookups failed", failures, domains.len());
            }
        }
        Command::Config { output } => {
            match output {
                Some(path) => {
                    config.save(&path)?;
                    info!(path = %path, "Configuration written");
                }
                None => print!("{}", config.to_toml()?),
            }
        }
    }

    Ok(())
}
