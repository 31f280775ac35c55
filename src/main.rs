use lead_search_client::client::LeadsClient;
use lead_search_client::config::Config;
use lead_search_client::controller::SearchController;
use lead_search_client::models::{Country, DisplayLead, FormEdit};
use lead_search_client::view::{render_leads, render_status};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage:
  lead-search search [--category S] [--zipcode S] [--radius N] [--max-results N] [--country br|us|ca] [--json]
  lead-search list [--json]

Environment:
  BACKEND_SEARCH_URL    base URL of the search service (or VITE_BACKEND_SEARCH_URL)
  BACKEND_API_URL       base URL of the lead listing service (or VITE_BACKEND_API_URL)
  REQUEST_TIMEOUT_SECS  optional request timeout";

/// Usage text followed by the accepted `--country` values.
fn usage() -> String {
    let mut text = format!("{}\n\nCountries:", USAGE);
    for country in Country::ALL {
        text.push_str(&format!("\n  {}  {}", country.as_str(), country.display_name()));
    }
    text
}

enum Command {
    Search(Vec<FormEdit>),
    List,
    Help,
}

struct Args {
    command: Command,
    json: bool,
}

fn parse_args<I>(mut args: I) -> anyhow::Result<Args>
where
    I: Iterator<Item = String>,
{
    let mut json = false;
    let mut command = match args.next().as_deref() {
        Some("search") => Command::Search(Vec::new()),
        Some("list") => Command::List,
        Some("-h") | Some("--help") | None => Command::Help,
        Some(other) => anyhow::bail!("Unknown command: {}", other),
    };

    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| anyhow::anyhow!("Missing value for {}", flag))
        };
        let edit = match a.as_str() {
            "--json" => {
                json = true;
                continue;
            }
            "-h" | "--help" => {
                command = Command::Help;
                continue;
            }
            "--category" => FormEdit::Category(value("--category")?),
            "--zipcode" => FormEdit::PostalCode(value("--zipcode")?),
            "--radius" => FormEdit::Radius(
                value("--radius")?
                    .parse::<u32>()
                    .map_err(|_| anyhow::anyhow!("--radius must be a non-negative integer"))?,
            ),
            "--max-results" => {
                let n: u32 = value("--max-results")?
                    .parse()
                    .map_err(|_| anyhow::anyhow!("--max-results must be a positive integer"))?;
                if n == 0 {
                    anyhow::bail!("--max-results must be a positive integer");
                }
                FormEdit::MaxResults(n)
            }
            "--country" => FormEdit::Country(
                value("--country")?
                    .parse::<Country>()
                    .map_err(|e| anyhow::anyhow!(e))?,
            ),
            _ => anyhow::bail!("Unknown arg: {}", a),
        };
        match &mut command {
            Command::Search(edits) => edits.push(edit),
            _ => anyhow::bail!("{} is only valid with the search command", a),
        }
    }

    Ok(Args { command, json })
}

fn print_leads(leads: &[DisplayLead], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(leads)?);
    } else {
        println!("{}", render_leads(leads));
    }
    Ok(())
}

/// Runs one search or listing from the command line.
///
/// Backend failures are reported through the status line and do not change
/// the exit code; only configuration and argument errors do.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_search_client=info,lead_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if let Command::Help = args.command {
        eprintln!("{}", usage());
        return Ok(());
    }

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    let client = LeadsClient::new(&config)?;
    let controller = SearchController::new(client);

    match args.command {
        Command::Search(edits) => {
            for edit in edits {
                controller.edit(edit);
            }
            controller.submit().await;
            let session = controller.snapshot();
            println!("{}", render_status(&session.status));
            if !session.leads.is_empty() || !session.status.is_error() {
                print_leads(&session.leads, args.json)?;
            }
        }
        Command::List => {
            let leads = controller.refresh_leads().await;
            let status = controller.snapshot().status;
            if status.is_error() {
                println!("{}", render_status(&status));
            }
            print_leads(&leads, args.json)?;
        }
        Command::Help => {}
    }

    Ok(())
}
