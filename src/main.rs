use anxiety_questionnaire::{config::Config, dialogue};
use dotenv::dotenv;
use log::error;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env file is fine, the environment may already be set
    dotenv().ok();

    pretty_env_logger::init();
    log::info!("Starting questionnaire...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {}", err);
            std::process::exit(2);
        }
    };

    let input = BufReader::new(tokio::io::stdin());
    if let Err(err) = dialogue::run(input, tokio::io::stdout(), config).await {
        error!("dialogue aborted: {}", err);
        std::process::exit(1);
    }
}
