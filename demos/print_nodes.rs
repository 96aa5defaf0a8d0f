//! Queries a controller and prints its node inventory.
//!
//! Usage: `print_nodes [host] [port]`. On large clusters the output is
//! elided: the first 10 entries, every 200th entry, and the last entry.
//! Elision is a caller policy; the library itself always renders
//! everything.

use slurm_client::{DEFAULT_CONTROLLER_PORT, NodeInfoReply, SlurmClient, SlurmResult};

#[tokio::main]
async fn main() -> SlurmResult<()> {
    let host = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "localhost".to_string());
    let port = std::env::args()
        .nth(2)
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_CONTROLLER_PORT);

    let client = SlurmClient::builder().host(host)?.port(port)?.build()?;

    match client.load_node_info(0).await? {
        NodeInfoReply::Status(code) => println!("controller returned code {}", code),
        NodeInfoReply::Inventory(snapshot) => {
            if snapshot.record_count() <= 100 {
                println!("{}", snapshot);
            } else {
                println!(
                    "Nodes updated at {}, record count {}",
                    snapshot.last_update,
                    snapshot.record_count()
                );
                for (i, record) in snapshot.records.iter().enumerate() {
                    if i < 10 || i % 200 == 0 || i + 1 == snapshot.record_count() {
                        println!("{}", record);
                    } else if i == 10 || i % 200 == 1 {
                        println!("skipping...");
                    }
                }
            }
        }
    }

    Ok(())
}
