#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wordwise_backend::run().await
}
