use migration::Migrator;
use sea_orm_migration::cli;

/// `cargo run -p migration -- up` and friends; reads `DATABASE_URL`,
/// optionally from a local `.env`.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    cli::run_cli(Migrator).await;
}
