// tests/pipe_options_tests.rs
mod common;

use agency::{new_pipe_config, with_prompt, AgencyError, Context, Message, Pipe, PipeConfig, PipeOption};
use common::*;
use parking_lot::Mutex;
use std::sync::Arc;

fn set_prompt_option(prompt: &'static str) -> PipeOption {
  PipeOption::new(move |config: &mut PipeConfig| config.prompt = prompt.to_string())
}

/// Pipe whose handler records the prompt decoded from the options it got.
fn prompt_recording_pipe(seen: Arc<Mutex<Vec<String>>>) -> Pipe<i64, TestError> {
  Pipe::new(move |_ctx: Context, input: i64, options: Vec<PipeOption>| {
    seen.lock().push(new_pipe_config(&options).prompt);
    async move { Ok::<_, TestError>(input) }
  })
}

#[test]
fn test_new_pipe_config_without_options_is_default() {
  let no_options: Vec<PipeOption> = Vec::new();
  let config = new_pipe_config(&no_options);
  assert_eq!(config, PipeConfig::default());
  assert!(config.prompt.is_empty());
}

#[test]
fn test_options_apply_in_order_last_write_wins() {
  let options = vec![with_prompt("first"), set_prompt_option("second"), with_prompt("third")];
  assert_eq!(new_pipe_config(&options).prompt, "third");

  let reversed: Vec<PipeOption> = options.iter().rev().cloned().collect();
  assert_eq!(PipeConfig::from_options(&reversed).prompt, "first");
}

#[test]
fn test_with_prompt_formats_arguments() {
  let option = with_prompt(format_args!("Summarize in {} words for {}", 50, "executives"));
  let mut config = PipeConfig::default();
  option.apply(&mut config);
  assert_eq!(config.prompt, "Summarize in 50 words for executives");
}

#[tokio::test]
async fn test_with_options_binds_options_to_handler() {
  setup_tracing();
  let seen = Arc::new(Mutex::new(Vec::new()));
  let pipe = prompt_recording_pipe(seen.clone());

  let bound = pipe.with_options([with_prompt("pinned")]);
  assert_eq!(bound.execute(Context::new(), 1).await, Ok(1));

  // The receiver is unchanged: executing it directly passes no options.
  assert_eq!(pipe.execute(Context::new(), 1).await, Ok(1));

  assert_eq!(*seen.lock(), vec!["pinned".to_string(), String::new()]);
}

#[tokio::test]
async fn test_with_options_forwards_exactly_bound_options() {
  setup_tracing();
  let counts = Arc::new(Mutex::new(Vec::new()));
  let counts_in_handler = counts.clone();
  let pipe = Pipe::<i64, TestError>::new(move |_ctx: Context, input: i64, options: Vec<PipeOption>| {
    let config = new_pipe_config(&options);
    counts_in_handler.lock().push((options.len(), config.prompt));
    async move { Ok::<_, TestError>(input) }
  });

  let bound = pipe.with_options(vec![with_prompt("one"), with_prompt("two")]);
  bound.execute(Context::new(), 0).await.unwrap();

  // Re-binding the already bound pipe does not reach the inner handler.
  let rebound = bound.with_options([with_prompt("ignored")]);
  rebound.execute(Context::new(), 0).await.unwrap();

  assert_eq!(*counts.lock(), vec![(2, "two".to_string()), (2, "two".to_string())]);
}

#[tokio::test]
async fn test_bound_pipes_inside_composition_keep_their_options() {
  setup_tracing();
  let seen = Arc::new(Mutex::new(Vec::new()));
  let pipeline = prompt_recording_pipe(seen.clone())
    .with_options([with_prompt("draft")])
    .then(prompt_recording_pipe(seen.clone()).with_options([with_prompt("refine")]))
    .then(prompt_recording_pipe(seen.clone()));

  pipeline.execute(Context::new(), 7).await.unwrap();
  assert_eq!(*seen.lock(), vec!["draft".to_string(), "refine".to_string(), String::new()]);
}

#[tokio::test]
async fn test_with_options_keeps_interceptor() {
  setup_tracing();
  let log = new_call_log();
  let pipe = recording_pipe("A", log.clone(), |x| x + 1).intercept(recording_interceptor("I", log.clone()));

  let bound = pipe.with_options([with_prompt("p")]);
  assert!(bound.has_interceptor());

  let pipeline = bound.then(recording_pipe("B", log.clone(), |x| x * 10));
  assert_eq!(pipeline.execute(Context::new(), 1).await, Ok(20));
  assert_eq!(calls(&log), vec!["A", "I:2", "B"]);
}

#[tokio::test]
async fn test_interceptor_receives_options_of_composed_handler() {
  setup_tracing();
  let observed = Arc::new(Mutex::new(Vec::new()));
  let observed_in_interceptor = observed.clone();
  let log = new_call_log();

  let composed = recording_pipe("A", log.clone(), |x| x)
    .intercept(move |_msg: &i64, options: &[PipeOption]| {
      observed_in_interceptor.lock().push(new_pipe_config(options).prompt);
    })
    .then(recording_pipe("B", log.clone(), |x| x));

  // Plain execution hands the interceptor no options.
  composed.execute(Context::new(), 0).await.unwrap();
  // Options bound onto the composed pipe reach its interceptor.
  composed
    .with_options([with_prompt("observed")])
    .execute(Context::new(), 0)
    .await
    .unwrap();

  assert_eq!(*observed.lock(), vec![String::new(), "observed".to_string()]);
}

#[tokio::test]
async fn test_message_pipe_uses_prompt_from_options() {
  setup_tracing();
  let pipe = Pipe::<Message, AgencyError>::new(|_ctx: Context, input: Message, options: Vec<PipeOption>| async move {
    let config = new_pipe_config(&options);
    Ok::<_, AgencyError>(Message::assistant(format!("{} {}", config.prompt, input.text())))
  });

  let output = pipe
    .with_options([with_prompt(format_args!("Translate to {}:", "German"))])
    .execute(Context::new(), Message::user("hello"))
    .await
    .unwrap();
  assert_eq!(output.text(), "Translate to German: hello");
}
