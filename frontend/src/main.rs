//! `eventdesk` entry-point: wires CLI commands to screens and the console sink.

use std::env;
use std::io;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use frontend::config::{ClientConfig, DEFAULT_BASE_URL};
use frontend::domain::outcome::RequestOutcome;
use frontend::domain::ports::{ApiGateway, OutcomeSink};
use frontend::outbound::gateway::HttpRequestGateway;
use frontend::render::ConsoleSink;
use frontend::screens::events::EventStatus;
use frontend::screens::reservations::BookingStatus;
use frontend::screens::{clients, events, reservations};

/// `eventdesk` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "eventdesk",
    about = "Console front-end for the EventManagement REST API",
    version
)]
struct CliArgs {
    /// Backend origin. Falls back to `EVENTDESK_BASE_URL` when omitted.
    #[arg(long = "base-url", value_name = "url", global = true)]
    base_url: Option<String>,
    /// Overall request timeout in seconds.
    #[arg(long, value_name = "seconds", default_value_t = 30, global = true)]
    timeout: u64,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Client directory operations.
    #[command(subcommand)]
    Clients(ClientsCommand),
    /// Event catalogue operations.
    #[command(subcommand)]
    Events(EventsCommand),
    /// Ticket reservation operations.
    #[command(subcommand)]
    Reservations(ReservationsCommand),
}

#[derive(Debug, Subcommand)]
enum ClientsCommand {
    /// Register a client with passport details.
    Create {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        passport_series: String,
        #[arg(long)]
        passport_number: String,
    },
    /// Fetch one client by identifier.
    Get { id: u64 },
    /// List every client.
    List,
    /// Search clients by a free-text term.
    Search { term: String },
    /// Update a client's main data.
    Update {
        id: u64,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Replace a client's passport.
    UpdatePassport {
        id: u64,
        #[arg(long)]
        series: String,
        #[arg(long)]
        number: String,
    },
    /// Delete a client.
    Delete { id: u64 },
}

#[derive(Debug, Subcommand)]
enum EventsCommand {
    /// Create an event.
    Create {
        #[arg(long)]
        name: String,
        /// Event date as `yyyy-mm-dd`.
        #[arg(long)]
        date: String,
        #[arg(long)]
        seats: u32,
        /// Ticket price as a decimal string, e.g. `1500.00`.
        #[arg(long)]
        price: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Fetch one event by identifier.
    Get { id: u64 },
    /// List every event.
    List,
    /// Update an event's status (planned, ongoing, canceled, completed).
    SetStatus { id: u64, status: EventStatus },
    /// Fetch aggregated reservation statistics for an event.
    Statistics { id: u64 },
    /// Delete an event.
    Delete { id: u64 },
}

#[derive(Debug, Subcommand)]
enum ReservationsCommand {
    /// Reserve tickets for a client and event.
    Create {
        #[arg(long)]
        client_id: u64,
        #[arg(long)]
        event_id: u64,
        #[arg(long)]
        tickets: u32,
        /// Initial booking status (confirmed, canceled, pending); the
        /// backend default applies when omitted.
        #[arg(long)]
        status: Option<BookingStatus>,
    },
    /// Fetch one reservation by identifier.
    Get { id: u64 },
    /// List every reservation.
    List,
    /// Confirm a pending reservation.
    Confirm { id: u64 },
    /// Cancel a reservation.
    Cancel { id: u64 },
    /// Purge old canceled reservations.
    Cleanup,
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let base_url = resolve_base_url(args.base_url)?;
    let config = ClientConfig::new(base_url).with_timeout(Duration::from_secs(args.timeout));
    let gateway = HttpRequestGateway::new(config)
        .map_err(|error| io::Error::other(format!("create HTTP gateway: {error}")))?;

    let outcome = run_command(&gateway, args.command).await;

    let mut sink = ConsoleSink::new(io::stdout().lock());
    sink.present(&outcome).map_err(io::Error::other)?;

    if !outcome.is_success() {
        process::exit(1);
    }
    Ok(())
}

fn resolve_base_url(flag: Option<String>) -> io::Result<Url> {
    let raw = flag
        .or_else(|| env::var("EVENTDESK_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
    Url::parse(&raw).map_err(|error| io::Error::other(format!("invalid base URL {raw}: {error}")))
}

async fn run_command(gateway: &dyn ApiGateway, command: Command) -> RequestOutcome {
    match command {
        Command::Clients(command) => run_clients_command(gateway, command).await,
        Command::Events(command) => run_events_command(gateway, command).await,
        Command::Reservations(command) => run_reservations_command(gateway, command).await,
    }
}

async fn run_clients_command(gateway: &dyn ApiGateway, command: ClientsCommand) -> RequestOutcome {
    match command {
        ClientsCommand::Create {
            full_name,
            phone,
            email,
            passport_series,
            passport_number,
        } => {
            let input = clients::NewClient {
                full_name,
                phone_number: phone,
                email,
                passport: clients::Passport {
                    series: passport_series,
                    number: passport_number,
                },
            };
            clients::create(gateway, &input).await
        }
        ClientsCommand::Get { id } => clients::fetch(gateway, id).await,
        ClientsCommand::List => clients::list(gateway).await,
        ClientsCommand::Search { term } => clients::search(gateway, &term).await,
        ClientsCommand::Update {
            id,
            full_name,
            phone,
            email,
        } => {
            let input = clients::ClientUpdate {
                full_name,
                phone_number: phone,
                email,
            };
            clients::update(gateway, id, &input).await
        }
        ClientsCommand::UpdatePassport { id, series, number } => {
            let passport = clients::Passport { series, number };
            clients::replace_passport(gateway, id, &passport).await
        }
        ClientsCommand::Delete { id } => clients::delete(gateway, id).await,
    }
}

async fn run_events_command(gateway: &dyn ApiGateway, command: EventsCommand) -> RequestOutcome {
    match command {
        EventsCommand::Create {
            name,
            date,
            seats,
            price,
            description,
        } => {
            let input = events::NewEvent {
                name,
                date,
                number_of_seats: seats,
                ticket_price: price,
                description,
            };
            events::create(gateway, &input).await
        }
        EventsCommand::Get { id } => events::fetch(gateway, id).await,
        EventsCommand::List => events::list(gateway).await,
        EventsCommand::SetStatus { id, status } => events::set_status(gateway, id, status).await,
        EventsCommand::Statistics { id } => events::statistics(gateway, id).await,
        EventsCommand::Delete { id } => events::delete(gateway, id).await,
    }
}

async fn run_reservations_command(
    gateway: &dyn ApiGateway,
    command: ReservationsCommand,
) -> RequestOutcome {
    match command {
        ReservationsCommand::Create {
            client_id,
            event_id,
            tickets,
            status,
        } => {
            let input = reservations::NewReservation {
                client_id,
                event_id,
                number_of_tickets: tickets,
                booking_status: status,
            };
            reservations::create(gateway, &input).await
        }
        ReservationsCommand::Get { id } => reservations::fetch(gateway, id).await,
        ReservationsCommand::List => reservations::list(gateway).await,
        ReservationsCommand::Confirm { id } => reservations::confirm(gateway, id).await,
        ReservationsCommand::Cancel { id } => reservations::cancel(gateway, id).await,
        ReservationsCommand::Cleanup => reservations::cleanup(gateway).await,
    }
}
