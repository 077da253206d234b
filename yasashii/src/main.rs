use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Read;
use yasashii::{DocumentTemplate, FuriganaEngine, StripPolicy};

fn input_arg() -> Arg {
    Arg::new("file")
        .help("Input file with bracket readings (stdin when omitted or '-')")
        .index(1)
}

fn read_input(matches: &ArgMatches) -> std::io::Result<String> {
    match matches.get_one::<String>("file").map(String::as_str) {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("yasashii")
        .version("0.1.0")
        .about("Convert text with bracket furigana, e.g. 在留(ざいりゅう)カード")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("ruby")
                .about("Rewrite readings as <ruby> markup")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("strip")
                .about("Remove readings, keeping the base text")
                .arg(input_arg())
                .arg(
                    Arg::new("spans-only")
                        .long("spans-only")
                        .help("Only remove readings that follow a kanji run")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("pairs")
                .about("List (base, reading) pairs in order of appearance")
                .arg(input_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print pairs as a JSON array")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("display")
                .about("Render the styled inline HTML block")
                .arg(input_arg())
                .arg(
                    Arg::new("line-height")
                        .long("line-height")
                        .help("CSS line height of the block")
                        .value_parser(clap::value_parser!(f64))
                        .default_value("2.0"),
                ),
        )
        .subcommand(
            Command::new("document")
                .about("Render a standalone HTML document")
                .arg(input_arg())
                .arg(
                    Arg::new("title")
                        .long("title")
                        .short('t')
                        .help("Document title and heading"),
                ),
        )
        .subcommand(
            Command::new("all")
                .about("Print every rendering as JSON")
                .arg(input_arg()),
        )
        .get_matches();

    let mut engine = FuriganaEngine::new();

    match matches.subcommand() {
        Some(("ruby", sub)) => {
            let text = read_input(sub)?;
            print!("{}", engine.to_ruby(&text));
        }
        Some(("strip", sub)) => {
            let text = read_input(sub)?;
            let policy = if sub.get_flag("spans-only") {
                StripPolicy::SpansOnly
            } else {
                StripPolicy::AnyReading
            };
            print!("{}", engine.strip_with(&text, policy));
        }
        Some(("pairs", sub)) => {
            let text = read_input(sub)?;
            let pairs = engine.pairs(&text);
            if sub.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&pairs)?);
            } else {
                for pair in &pairs {
                    println!("{}", pair);
                }
            }
        }
        Some(("display", sub)) => {
            let text = read_input(sub)?;
            let line_height = sub
                .get_one::<f64>("line-height")
                .copied()
                .unwrap_or(yasashii::DEFAULT_LINE_HEIGHT);
            print!("{}", engine.display_with_line_height(&text, line_height));
        }
        Some(("document", sub)) => {
            let text = read_input(sub)?;
            if let Some(title) = sub.get_one::<String>("title") {
                engine.with_document_template(DocumentTemplate {
                    title: title.clone(),
                    ..DocumentTemplate::default()
                });
            }
            println!("{}", engine.document(&text));
        }
        Some(("all", sub)) => {
            let text = read_input(sub)?;
            println!("{}", serde_json::to_string_pretty(&engine.renditions(&text))?);
        }
        _ => unreachable!("subcommand_required"),
    }

    Ok(())
}
