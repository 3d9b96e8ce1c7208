use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use orderflow::application::engine::OrderEngine;
use orderflow::domain::command::{CommandType, OrderCommand};
use orderflow::domain::order::{OrderId, status_label};
use orderflow::domain::ports::{OrderStoreBox, PaymentGatewayBox};
use orderflow::error::OrderError;
use orderflow::infrastructure::gateway::{FixedGateway, RandomGateway};
use orderflow::infrastructure::in_memory::InMemoryOrderStore;
use orderflow::interfaces::csv::command_reader::CommandReader;
use orderflow::interfaces::csv::report_writer::ReportWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ForcedOutcome {
    Approve,
    Decline,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input commands CSV file
    input: PathBuf,

    /// Force every payment to a fixed outcome instead of simulating one.
    #[arg(long, value_enum)]
    outcome: Option<ForcedOutcome>,

    /// Simulated gateway latency per payment, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Print the status of a single order instead of the full report.
    #[arg(long)]
    status: Option<OrderId>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let gateway: PaymentGatewayBox = match cli.outcome {
        Some(ForcedOutcome::Approve) => Box::new(FixedGateway::new(true)),
        Some(ForcedOutcome::Decline) => Box::new(FixedGateway::new(false)),
        None => Box::new(RandomGateway::with_delay(Duration::from_millis(
            cli.delay_ms,
        ))),
    };
    let store: OrderStoreBox = Box::new(InMemoryOrderStore::new());
    let engine = OrderEngine::new(store, gateway);

    // Process commands
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for cmd_result in reader.commands() {
        match cmd_result {
            Ok(cmd) => {
                if let Err(e) = run_command(&engine, cmd).await {
                    eprintln!("Error processing command: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    if let Some(id) = cli.status {
        let status = engine.order_status(id).await.into_diagnostic()?;
        println!("{},{}", id, status_label(status));
        return Ok(());
    }

    // Collect final state from engine
    let orders = engine.into_results().await.into_diagnostic()?;

    // Output final state
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_orders(orders).into_diagnostic()?;

    Ok(())
}

async fn run_command(engine: &OrderEngine, cmd: OrderCommand) -> orderflow::error::Result<()> {
    match cmd.op {
        CommandType::Create => {
            let amount = cmd
                .amount
                .ok_or_else(|| OrderError::CommandError("create requires an amount".to_string()))?;
            engine.create_order(cmd.order, amount).await?;
        }
        CommandType::Pay => {
            engine.process_payment(cmd.order).await?;
        }
    }
    Ok(())
}
