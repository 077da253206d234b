use clap::{Arg, ArgAction, Command, value_parser};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use yasashii::FuriganaEngine;
use yasashii_llm::{
    GroqProvider, LlmConfig, LlmError, MockMode, MockSimplifier, PromptBuilder, Simplifier,
    config::api_key_from_env, load_examples_from_file,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let matches = Command::new("yasashii-llm")
        .version("0.1.0")
        .about("Rewrite Japanese into yasashii nihongo with furigana")
        .arg(
            Arg::new("text")
                .help("Text to simplify (reads stdin when omitted)")
                .index(1)
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Read the text from a file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the echo mock instead of the Groq API")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output form")
                .value_parser(["bracket", "ruby", "plain", "pairs", "html"])
                .default_value("bracket"),
        )
        .arg(
            Arg::new("examples")
                .long("examples")
                .short('e')
                .help("JSON file of few-shot examples")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("num-examples")
                .long("num-examples")
                .short('n')
                .help("How many few-shot examples to include in the prompt")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("prompt-only")
                .long("prompt-only")
                .help("Print the prompt that would be sent and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show detailed progress and request logs")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let text = match (
        matches.get_one::<String>("text"),
        matches.get_one::<PathBuf>("file"),
    ) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut config = LlmConfig::from_env()?;
    if let Some(n) = matches.get_one::<usize>("num-examples") {
        config.num_examples = *n;
    }

    let mut prompts = PromptBuilder::default();
    if let Some(path) = matches.get_one::<PathBuf>("examples") {
        let examples = load_examples_from_file(path)?;
        if verbose {
            eprintln!("📚 Loaded {} examples from {}", examples.len(), path.display());
        }
        prompts.with_examples(examples);
    }

    if matches.get_flag("prompt-only") {
        println!("{}", prompts.build_prompt(text.trim(), config.num_examples));
        return Ok(());
    }

    let provider: Box<dyn Simplifier> = if matches.get_flag("mock") {
        Box::new(MockSimplifier::new(MockMode::Echo))
    } else {
        match api_key_from_env() {
            Ok(api_key) => Box::new(GroqProvider::new(api_key, config)?.with_prompts(prompts)),
            Err(LlmError::MissingApiKey) => {
                eprintln!("❌ GROQ_API_KEY is not set");
                eprintln!("   Set it with: export GROQ_API_KEY=your_api_key");
                eprintln!("   Or use --mock to use the echo mock");
                return Err(LlmError::MissingApiKey.into());
            }
            Err(e) => return Err(e.into()),
        }
    };

    if verbose {
        eprintln!("📝 Source: \"{}\"", text.trim());
        eprintln!("🤖 Provider: {}", provider.provider_name());
    }

    let annotated = match provider.simplify(&text).await {
        Ok(annotated) => annotated,
        Err(LlmError::EmptyInput) => {
            eprintln!("❌ Nothing to simplify: the input is empty");
            return Err(LlmError::EmptyInput.into());
        }
        Err(e) => {
            eprintln!("❌ Simplification failed: {}", e);
            return Err(e.into());
        }
    };

    let engine = FuriganaEngine::new();
    if verbose {
        eprintln!(
            "✅ {} annotated spans",
            engine.parse(&annotated).span_count()
        );
    }

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("bracket");
    match format {
        "ruby" => println!("{}", engine.to_ruby(&annotated)),
        "plain" => println!("{}", engine.strip(&annotated)),
        "pairs" => {
            for pair in engine.pairs(&annotated) {
                println!("{}\t{}", pair.base, pair.reading);
            }
        }
        "html" => println!("{}", engine.document(&annotated)),
        _ => println!("{}", annotated),
    }

    Ok(())
}
