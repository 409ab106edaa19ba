// agency/examples/operation_prompt.rs

use agency::{AgencyError, Context, Message, Operation, OperationConfig, Shared};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AgencyError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Operation Example ---");

  // The handler reads the live configuration on every call.
  let mut chat = Operation::<Message, AgencyError>::new(
    |_ctx: Context, input: Message, config: Shared<OperationConfig<Message>>| async move {
      let (prompt, turns) = {
        let cfg = config.read();
        (cfg.prompt.clone(), cfg.messages.len())
      };
      if input.is_empty() {
        return Err(AgencyError::msg("empty input"));
      }
      Ok(Message::assistant(format!("{} ({} prior turns): {}", prompt, turns, input.text())))
    },
  );

  chat
    .set_prompt(format_args!("You are a {} assistant", "helpful"))
    .set_messages(vec![Message::system("Answer briefly."), Message::user("Hi!")]);

  let reply = chat.execute(Context::new(), Message::user("What is Rust?")).await?;
  info!("reply: {}", reply);

  // Mutate through the live handle; the next execution sees it.
  chat.config().write().messages.push(reply);
  let reply = chat.execute(Context::new(), Message::user("And Cargo?")).await?;
  info!("reply: {}", reply);

  if let Err(err) = chat.execute(Context::new(), Message::default()).await {
    info!("failed as expected: {}", err);
  }

  Ok(())
}
