#[tokio::main]
async fn main() -> std::io::Result<()> {
    sailing_sim::run_with_config().await
}
