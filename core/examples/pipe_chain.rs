// agency/examples/pipe_chain.rs

use agency::{new_pipe_config, with_prompt, AgencyError, Context, Message, Pipe, PipeOption, Role};
use tracing::info;

// Stands in for a call to a text model backend.
fn fake_model(name: &'static str) -> Pipe<Message, AgencyError> {
  Pipe::new(move |ctx: Context, input: Message, options: Vec<PipeOption>| async move {
    ctx.check()?;
    let config = new_pipe_config(&options);
    let reply = format!("[{}] {} <- {}", name, config.prompt, input.text());
    Ok::<_, AgencyError>(Message::assistant(reply))
  })
}

#[tokio::main]
async fn main() -> Result<(), AgencyError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Pipe Chain Example ---");

  let draft = fake_model("draft").with_options([with_prompt("Write a haiku about")]);
  let critique = fake_model("critic").with_options([with_prompt(format_args!("Rate 1-{}:", 10))]);
  let polish = fake_model("editor").with_options([with_prompt("Polish")]);

  let pipeline = draft
    .intercept(|msg: &Message, _options: &[PipeOption]| info!(role = %msg.role(), "draft produced: {}", msg.text()))
    .then(critique)
    .intercept(|msg: &Message, _options: &[PipeOption]| info!("critique produced: {}", msg.text()))
    .then(polish);

  let output = pipeline.execute(Context::new(), Message::user("rust")).await?;
  assert_eq!(output.role(), Role::Assistant);
  info!("final: {}", output);

  // A cancelled context is honoured by handlers that check it.
  let ctx = Context::new();
  ctx.cancel();
  match pipeline.execute(ctx, Message::user("again")).await {
    Err(AgencyError::Cancelled) => info!("second run cancelled as expected"),
    other => info!(?other, "unexpected result"),
  }

  Ok(())
}
