use chat_cli::{ApiKey, ConsolePrompt, LlmError, OpenAiClient, OpenAiConfig, chat, telemetry};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let config = match OpenAiConfig::from_api_key(ApiKey::Default) {
        Ok(config) => config,
        Err(e @ LlmError::MissingApiKey { .. }) => {
            println!("{e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    telemetry::init("warn");

    let client = OpenAiClient::new(config)?;
    let mut prompt = ConsolePrompt::stdio();
    let mut stdout = std::io::stdout();

    chat::run_once(&mut prompt, &client, &mut stdout).await?;

    Ok(())
}
