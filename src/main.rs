#[tokio::main]
async fn main() {
    if let Err(e) = portainer_control_lib::run().await {
        eprintln!("portainer_control: {}", e);
        std::process::exit(1);
    }
}
