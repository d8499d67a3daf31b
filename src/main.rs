#[tokio::main]
async fn main() {
    attenease::run().await;
}
