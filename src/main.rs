use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fitcoach::{
    ChatRepl, ChatTransport, CompletionClient, CompletionConfig, MockTransport, OpenAiClient,
};

#[derive(Parser)]
#[command(name = "fitcoach")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Use the offline mock transport instead of the OpenAI API
    #[arg(long)]
    mock: bool,

    /// Override the model name (default: gpt-4o, or OPENAI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Override the API base URL (default: https://api.openai.com, or OPENAI_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Send a single message and print the reply instead of starting the chat loop
    #[arg(short, long)]
    message: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = CompletionConfig::from_env();
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    let transport: Arc<dyn ChatTransport> = if cli.mock {
        info!("Using mock transport (offline canned replies)");
        Arc::new(MockTransport::new())
    } else {
        // A blank key is fine here: the client reports CREDENTIAL_MISSING as
        // a result instead of failing at startup.
        Arc::new(OpenAiClient::from_config(&config))
    };

    // Mock sessions should not trip the credential check.
    if cli.mock {
        config = config.with_api_key("mock");
    }

    let client = CompletionClient::new(config, transport);
    let mut repl = ChatRepl::new(client);

    if let Some(message) = cli.message {
        let reply = repl.handle_utterance(&message).await;
        println!("{reply}");
        return Ok(());
    }

    repl.run().await?;

    Ok(())
}
