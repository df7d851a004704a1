use clap::Parser;
use orders::{err, Order, OrderStore};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing_subscriber::EnvFilter;

/// Inserts sample orders, then reads, updates, aggregates and deletes them.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Store to run against: `dynamodb://host:port`, `dynamodb://` or `memory://`
    #[arg(
        long,
        env = "ORDERS_DATABASE_URL",
        default_value = "dynamodb://localhost:8000"
    )]
    url: String,

    /// Drop and recreate the `Orders` table first
    #[arg(long)]
    reset: bool,

    /// JSON file with the orders to insert instead of the built-in samples
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Customer whose order amounts are summed
    #[arg(long, default_value = "C1")]
    customer: String,

    /// Status change to apply, as `ORDER_ID=STATUS`
    #[arg(long, default_value = "O2=Shipped")]
    update: StatusUpdate,

    /// Order to delete
    #[arg(long, default_value = "O4")]
    delete: String,
}

#[derive(Debug, Clone)]
struct StatusUpdate {
    order_id: String,
    status: String,
}

impl FromStr for StatusUpdate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((order_id, status)) if !order_id.is_empty() && !status.is_empty() => {
                Ok(StatusUpdate {
                    order_id: order_id.to_string(),
                    status: status.to_string(),
                })
            }
            _ => Err(format!("expected ORDER_ID=STATUS, got `{s}`")),
        }
    }
}

#[tokio::main]
async fn main() -> orders::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orders=info,warn")),
        )
        .init();

    let args = Args::parse();

    let orders = match &args.seed {
        Some(path) => load_seed(path)?,
        None => sample_orders(),
    };

    tracing::info!(url = %args.url, "connecting");
    let store = OrderStore::connect(&args.url).await?;

    if args.reset {
        println!("==> store.reset_table()");
        store.reset_table().await?;
    }

    println!("==> store.batch_insert()");
    let count = store.batch_insert(&orders).await?;
    println!("{count} orders inserted");

    println!("==> store.scan_all()");
    print_orders(&store.scan_all().await?);

    let StatusUpdate { order_id, status } = &args.update;
    println!("==> store.update_status({order_id:?}, {status:?})");
    if store.update_status(order_id, status).await? {
        println!("Order {order_id} updated to {status}");
    } else {
        println!("Order {order_id} not found; nothing updated");
    }

    println!("==> store.aggregate_by_customer({:?})", args.customer);
    let total = store.aggregate_by_customer(&args.customer).await?;
    println!("Total amount spent by customer {}: {total}", args.customer);

    println!("==> store.delete({:?})", args.delete);
    store.delete(&args.delete).await?;
    println!("Order {} deleted", args.delete);

    println!("==> store.scan_all()");
    print_orders(&store.scan_all().await?);

    Ok(())
}

fn sample_orders() -> Vec<Order> {
    vec![
        Order::new("O1", "C1", 100, "Completed"),
        Order::new("O2", "C1", 200, "Pending"),
        Order::new("O3", "C2", 150, "Completed"),
        Order::new("O4", "C3", 300, "Shipped"),
    ]
}

fn load_seed(path: &Path) -> orders::Result<Vec<Order>> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| err!("invalid seed file {}: {e}", path.display()))
}

fn print_orders(orders: &[Order]) {
    println!("All orders:");
    for order in orders {
        println!(
            "OrderID: {}, CustomerID: {}, Amount: {}, Status: {}",
            order.order_id, order.customer_id, order.amount, order.status
        );
    }
}
