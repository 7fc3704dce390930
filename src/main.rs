#[tokio::main]
async fn main() -> anyhow::Result<()> {
    crowdpitch_gateway::run().await
}
