/// Preview: interactive generation shell for trying out a lexicon.
///
/// Usage: preview --lexicon <path> [--seed <n>] [--workers <n>]
///
/// Commands:
///   gen [n]  generate n sentences (default 1)
///   verbose [n]  generate n sentences with their components as JSON
///   words [role]  list the lexicon, optionally filtered by role
///   seed <n>  reseed the engine
///   help  list commands
///   quit  exit

use linja_engine::{Engine, LexicalRole};
use std::io::{self, BufRead, Write};

/// Largest batch the shell will request at once.
const MAX_COUNT: usize = 50;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut lexicon_path = None;
    let mut seed: Option<u64> = None;
    let mut workers: Option<usize> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lexicon" if i + 1 < args.len() => {
                i += 1;
                lexicon_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                match parse_flag::<u64>("--seed", &args[i]) {
                    Ok(value) => seed = Some(value),
                    Err(e) => {
                        eprintln!("{}", e);
                        print_usage();
                        std::process::exit(1);
                    }
                }
            }
            "--workers" if i + 1 < args.len() => {
                i += 1;
                match parse_flag::<usize>("--workers", &args[i]) {
                    Ok(value) => workers = Some(value),
                    Err(e) => {
                        eprintln!("{}", e);
                        print_usage();
                        std::process::exit(1);
                    }
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let lexicon_path = match lexicon_path {
        Some(path) => path,
        None => {
            eprintln!("Missing --lexicon <path>");
            print_usage();
            std::process::exit(1);
        }
    };

    let mut engine = match build_engine(&lexicon_path, seed, workers) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    println!("Loaded {} words", engine.word_count());
    match seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: random"),
    }
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("pona!");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "gen" | "verbose" => {
                let count = match parse_count(parts.get(1).copied()) {
                    Some(count) => count,
                    None => {
                        println!("count must be between 1 and {}", MAX_COUNT);
                        continue;
                    }
                };

                let sentences = match engine.generate_sentences(count) {
                    Ok(sentences) => sentences,
                    Err(e) => {
                        println!("ERROR: {}", e);
                        continue;
                    }
                };

                if cmd == "gen" {
                    for sentence in &sentences {
                        println!("{}", sentence.text);
                    }
                } else {
                    let verbose: Vec<_> = sentences.iter().map(|s| s.verbose()).collect();
                    match serde_json::to_string_pretty(&verbose) {
                        Ok(json) => println!("{}", json),
                        Err(e) => println!("ERROR: {}", e),
                    }
                }
            }
            "words" => {
                let role = match parts.get(1) {
                    Some(name) => match LexicalRole::from_name(name) {
                        Some(role) => Some(role),
                        None => {
                            println!("Unknown role: {}", name);
                            println!("  roles: particle, content, preverb, preposition, pronoun");
                            continue;
                        }
                    },
                    None => None,
                };
                print_words(&engine, role);
            }
            "seed" => {
                if parts.len() < 2 {
                    println!("Usage: seed <n>");
                    continue;
                }
                match parts[1].parse::<u64>() {
                    Ok(s) => match build_engine(&lexicon_path, Some(s), workers) {
                        Ok(reseeded) => {
                            engine = reseeded;
                            println!("Seed set to {}", s);
                        }
                        Err(e) => println!("ERROR: {}", e),
                    },
                    Err(_) => {
                        println!("Invalid seed: {}", parts[1]);
                    }
                }
            }
            _ => {
                println!("Unknown command: {}. Type 'help' for commands.", cmd);
            }
        }
    }
}

fn build_engine(
    lexicon_path: &str,
    seed: Option<u64>,
    workers: Option<usize>,
) -> Result<Engine, linja_engine::EngineError> {
    let mut builder = Engine::builder().dictionary(lexicon_path);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    if let Some(workers) = workers {
        builder = builder.workers(workers);
    }
    builder.build()
}

fn parse_flag<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, raw))
}

fn parse_count(raw: Option<&str>) -> Option<usize> {
    match raw {
        None => Some(1),
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if (1..=MAX_COUNT).contains(&n) => Some(n),
            _ => None,
        },
    }
}

fn print_words(engine: &Engine, role: Option<LexicalRole>) {
    let roles: Vec<LexicalRole> = match role {
        Some(role) => vec![role],
        None => LexicalRole::ALL.to_vec(),
    };
    for role in roles {
        let words = engine.index().words(role);
        println!("{} ({}): {}", role, words.len(), words.join(" "));
    }
}

fn print_usage() {
    println!("Usage: preview --lexicon <path> [--seed <n>] [--workers <n>]");
}

fn print_help() {
    println!("Commands:");
    println!("  gen [n]        generate n sentences (1-{})", MAX_COUNT);
    println!("  verbose [n]    generate n sentences with components as JSON");
    println!("  words [role]   list words, optionally for one role");
    println!("  seed <n>       reseed the engine");
    println!("  help           show this list");
    println!("  quit           exit");
}
