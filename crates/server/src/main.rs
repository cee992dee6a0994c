#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ragstack_server::start().await
}
