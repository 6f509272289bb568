#[tokio::main]
async fn main() {
    if let Err(e) = shotchart::start_server().await {
        eprintln!("shotchart: {e}");
        std::process::exit(1);
    }
}
