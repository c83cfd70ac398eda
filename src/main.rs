mod cli;
mod config;
mod gateways;
mod print;
mod progress;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run()
}
