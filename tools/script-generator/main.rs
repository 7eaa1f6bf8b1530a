use clap::Parser;
use dialflow::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fs;

/// A CLI tool to generate random call scripts for a dialflow menu
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the menu JSON file to walk
    #[arg(default_value = "data/menu.json")]
    menu: String,

    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_script.json")]
    output: String,

    /// The maximum number of caller actions in the script
    #[arg(long, default_value_t = 12)]
    max_steps: usize,

    /// Probability of pressing a key the current menu does not accept
    #[arg(long, default_value_t = 0.15)]
    invalid_rate: f64,

    /// Probability of speaking a keyword instead of pressing the key
    #[arg(long, default_value_t = 0.3)]
    speech_rate: f64,

    /// Seed for a reproducible script
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Add validation to ensure the rates are probabilities
    for (name, rate) in [
        ("--invalid-rate", cli.invalid_rate),
        ("--speech-rate", cli.speech_rate),
    ] {
        if !(0.0..=1.0).contains(&rate) {
            eprintln!("Error: {} ({}) must be between 0 and 1", name, rate);
            std::process::exit(1);
        }
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let json = fs::read_to_string(&cli.menu)?;
    let tree = MenuCompiler::builder(MenuDefinition::from_json(&json)?)
        .build()
        .compile()?;

    println!(
        "Generating a call script over '{}' (up to {} actions)...",
        cli.menu, cli.max_steps
    );

    let script = generate_script(&tree, &cli, &mut rng);

    fs::write(&cli.output, script.to_json()?)?;

    println!(
        "Successfully generated {} action(s) and saved them to '{}'",
        script.len(),
        cli.output
    );

    Ok(())
}

/// Walks the menu at random, mirroring the engine's exact matching as it goes.
fn generate_script(tree: &MenuTree, cli: &Cli, rng: &mut StdRng) -> CallScript {
    let mut inputs = Vec::new();
    let mut current = tree.root_node();

    while inputs.len() < cli.max_steps && !current.is_terminal() {
        if rng.random_bool(cli.invalid_rate) {
            if let Some(symbol) = unused_key(current, rng) {
                inputs.push(ScriptedInput::Key(symbol));
                continue;
            }
        }

        let Some(option) = current.options.choose(rng) else {
            break;
        };

        let spoken = option.keywords.choose(rng);
        let input = match (spoken, key_symbol(&option.key)) {
            (Some(word), _) if rng.random_bool(cli.speech_rate) => {
                ScriptedInput::Say(word.clone())
            }
            (_, Some(symbol)) => ScriptedInput::Key(symbol),
            (Some(word), None) => ScriptedInput::Say(word.clone()),
            (None, None) => ScriptedInput::Say(option.key.clone()),
        };
        inputs.push(input);
        current = tree.node(option.target);
    }

    println!("-> Walk ended at '{}'.", current.id);
    CallScript { inputs }
}

/// The keypad symbol whose press submits exactly `key`, if there is one.
fn key_symbol(key: &str) -> Option<DtmfSymbol> {
    key.parse::<DtmfSymbol>()
        .ok()
        .filter(|symbol| symbol.to_string() == key)
}

/// Picks a keypad symbol that the node does not accept, if one exists.
fn unused_key(node: &MenuNode, rng: &mut StdRng) -> Option<DtmfSymbol> {
    let unused: Vec<DtmfSymbol> = DtmfSymbol::KEYPAD
        .into_iter()
        .filter(|s| node.option_keys().all(|k| k != s.to_string()))
        .collect();
    unused.choose(rng).copied()
}
