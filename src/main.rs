use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use dnsq::transport::{DEFAULT_PORT, DEFAULT_SERVER, DEFAULT_TCP_THRESHOLD};
use dnsq::{
    is_valid_domain, lookup, parse_query, Config, Output, QuerySource, TransactionTable,
    DEFAULT_OUTPUT,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dnsq")]
#[command(about = "Send DNS queries and print the first answer of each reply")]
struct Cli {
    /// A query such as `example.com A`, or a file with one query per line
    query: Vec<String>,

    /// DNS server to query
    #[arg(short, long, default_value = DEFAULT_SERVER)]
    server: String,

    /// DNS server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Queries longer than this many bytes are sent over TCP
    #[arg(long, default_value_t = DEFAULT_TCP_THRESHOLD)]
    tcp_threshold: usize,

    /// File answers are appended to when queries come from a file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            server: cli.server.clone(),
            port: cli.port,
            tcp_threshold: cli.tcp_threshold,
            output: cli.output.clone(),
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dnsq={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = Config::from(&cli);

    let Some(source) = QuerySource::detect(&cli.query) else {
        bail!("Please provide a file name or a direct query.");
    };

    let output = match source {
        QuerySource::File(_) => Output::File(config.output.clone()),
        QuerySource::Args(_) => Output::Console,
    };

    let mut table = TransactionTable::new();

    for line in source.read().await? {
        let Some((domain, record_type)) = parse_query(&line) else {
            output.display(&format!("Invalid format for query: {line}"));
            continue;
        };

        if record_type.parse::<dnsq::RecordType>().is_err() {
            output.display(&format!("Unsupported query type: {record_type}"));
            continue;
        }

        if !is_valid_domain(domain) {
            output.display(&format!("Domain name format is invalid: {domain}"));
            continue;
        }

        output.display(&format!("Querying {domain} with type {record_type}"));
        info!(domain, record_type, server = %config.server, "sending query");

        match lookup(domain, record_type, &config, &mut table).await {
            Ok(outcome) => output.report(&outcome, &table).await?,
            // No retry, move on to the next query
            Err(e) => error!(error = %e, domain, "query failed"),
        }
    }

    output.display(&format!(
        "Final state of transaction table: {}",
        table.to_json()?
    ));

    Ok(())
}
