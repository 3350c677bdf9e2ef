#[tokio::main]
async fn main() -> anyhow::Result<()> {
    palladium_api::app::run_cli().await
}
