use std::io::{self, BufRead, Write};

use crate::application::CompletionClient;
use crate::domain::{ChatMessage, CompletionResult, DomainError, Transcript};

/// Interactive chat loop over stdin/stdout.
///
/// Owns the ordered transcript and invokes the completion client once per
/// submitted utterance. Replies are rendered in submission order because the
/// loop awaits each exchange before prompting again; the core itself imposes
/// no sequencing.
pub struct ChatRepl {
    client: CompletionClient,
    transcript: Transcript,
}

impl ChatRepl {
    pub fn new(client: CompletionClient) -> Self {
        Self {
            client,
            transcript: Transcript::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Run the loop until EOF or `/quit`.
    pub async fn run(&mut self) -> Result<(), DomainError> {
        println!("FitCoach — your fitness and nutrition assistant.");
        println!("Type your question and press Enter. Type /quit to exit.\n");

        let stdin = io::stdin();

        loop {
            print!("you> ");
            io::stdout().flush()?;

            let mut input = String::new();
            if stdin.lock().read_line(&mut input)? == 0 {
                break; // EOF
            }

            let trimmed = input.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == "/quit" || trimmed == "/exit" {
                println!("Goodbye!");
                break;
            }

            let reply = self.handle_utterance(trimmed).await;
            println!("coach> {reply}\n");
        }

        Ok(())
    }

    /// Record the utterance, run one completion, record and return the
    /// rendered reply.
    pub async fn handle_utterance(&mut self, utterance: &str) -> String {
        self.transcript.push(ChatMessage::user(utterance));

        let result = self.client.complete(utterance).await;
        let rendered = Self::render_reply(&result);

        self.transcript.push(ChatMessage::assistant(rendered.clone()));
        rendered
    }

    /// Failures are shown verbatim with an `Error:` prefix; successful
    /// replies pass through untouched.
    fn render_reply(result: &CompletionResult) -> String {
        if result.is_success() {
            result.text().to_string()
        } else {
            format!("Error: {}", result.text())
        }
    }
}
