use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

use trading_dashboard::client::DashboardClient;
use trading_dashboard::config::DashboardConfig;
use trading_dashboard::domain::account::FundsAction;
use trading_dashboard::domain::trader::TraderField;
use trading_dashboard::render;
use trading_dashboard::router;
use trading_dashboard::shared::{LoadState, TraderId};
use trading_dashboard::view::{
    self, ActionOutcome, MountedView, QuotesView, TraderAccountView, TraderDirectoryView,
};

/// Trader administration dashboard.
#[derive(Parser, Debug)]
#[command(name = "trading-dashboard")]
#[command(about = "Trader administration dashboard", long_about = None)]
struct Cli {
    /// Backend base URL (overrides TRADING_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Per-request timeout in seconds (overrides TRADING_API_TIMEOUT_SECS).
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open a dashboard path, e.g. `/`, `/dashboard` or `/trader/42`.
    Open { path: String },
    /// Trader directory.
    Traders {
        #[command(subcommand)]
        command: TradersCommand,
    },
    /// A single trader's account.
    Account {
        #[command(subcommand)]
        command: AccountCommand,
    },
    /// Daily quotes list.
    Quotes,
}

#[derive(Subcommand, Debug)]
enum TradersCommand {
    List,
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        country: String,
        /// Date of birth, YYYY-MM-DD.
        #[arg(long)]
        dob: String,
    },
    Delete {
        id: TraderId,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum AccountCommand {
    Show { id: TraderId },
    Deposit { id: TraderId, amount: String },
    Withdraw { id: TraderId, amount: String },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<DashboardConfig> {
    let mut config = DashboardConfig::from_env().context("invalid environment configuration")?;
    if let Some(url) = &cli.api_url {
        config.api_url = url.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        if secs == 0 {
            bail!("--timeout-secs must be positive");
        }
        config.timeout = Duration::from_secs(secs);
    }
    config.validate()?;
    Ok(config)
}

fn finish(outcome: ActionOutcome) -> anyhow::Result<()> {
    outcome.into_result().context("request not completed")
}

async fn open(client: &DashboardClient, path: &str) -> anyhow::Result<()> {
    let route = router::navigate(path)?;
    let output = match view::mount(client, route).await {
        MountedView::Directory(v) => render::directory(&v.snapshot().await),
        MountedView::Account(v) => render::account(&v.snapshot().await),
        MountedView::Quotes(v) => render::quotes(&v.snapshot().await),
    };
    print!("{}", output);
    Ok(())
}

async fn traders(client: &DashboardClient, command: TradersCommand) -> anyhow::Result<()> {
    let view = TraderDirectoryView::new(client.clone());
    let outcome = match command {
        TradersCommand::List => {
            view.load().await;
            match view.snapshot().await.load_state() {
                LoadState::Failed { reason } => ActionOutcome::Failed(reason.clone()),
                _ => ActionOutcome::Done,
            }
        }
        TradersCommand::Add {
            first_name,
            last_name,
            email,
            country,
            dob,
        } => {
            view.open_add().await;
            for field in [
                TraderField::FirstName(first_name),
                TraderField::LastName(last_name),
                TraderField::Email(email),
                TraderField::Country(country),
                TraderField::Dob(dob),
            ] {
                view.set_field(field).await;
            }
            view.confirm_add().await
        }
        TradersCommand::Delete { id, yes } => {
            if !yes {
                bail!("refusing to delete trader {} without --yes", id);
            }
            view.request_delete(id).await;
            view.confirm_delete().await
        }
    };
    print!("{}", render::directory(&view.snapshot().await));
    finish(outcome)
}

async fn account(client: &DashboardClient, command: AccountCommand) -> anyhow::Result<()> {
    let (id, funds) = match command {
        AccountCommand::Show { id } => (id, None),
        AccountCommand::Deposit { id, amount } => (id, Some((FundsAction::Deposit, amount))),
        AccountCommand::Withdraw { id, amount } => (id, Some((FundsAction::Withdraw, amount))),
    };

    let view = TraderAccountView::new(client.clone(), id);
    view.load().await;
    let outcome = match funds {
        None => ActionOutcome::Done,
        Some((action, amount)) => {
            view.open(action).await;
            view.set_pending_amount(action, &amount).await;
            view.confirm(action).await
        }
    };
    print!("{}", render::account(&view.snapshot().await));
    finish(outcome)
}

async fn quotes(client: &DashboardClient) -> anyhow::Result<()> {
    let view = QuotesView::new(client.clone());
    view.load().await;
    let state = view.snapshot().await;
    print!("{}", render::quotes(&state));
    if state.load_state().is_failed() {
        bail!("could not load quotes");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let client = DashboardClient::from_config(&config)?;
    tracing::debug!(base_url = client.base_url(), "Dashboard client ready");

    match cli.command {
        Commands::Open { path } => open(&client, &path).await,
        Commands::Traders { command } => traders(&client, command).await,
        Commands::Account { command } => account(&client, command).await,
        Commands::Quotes => quotes(&client).await,
    }
}
