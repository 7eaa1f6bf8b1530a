use clap::{ArgAction, Parser, ValueEnum};
use dialflow::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// --- Table Format ---
// The flat layout used by the browser mockups: one object per screen, keyed by
// id, with `options` mapping a key to the next screen. Only used here for conversion.

#[derive(Deserialize)]
struct RawMenuTable(serde_json::Map<String, serde_json::Value>);

#[derive(Deserialize)]
struct RawScreen {
    #[serde(alias = "text")]
    prompt: String,
    #[serde(default)]
    options: serde_json::Map<String, serde_json::Value>,
}

impl IntoMenu for RawMenuTable {
    fn into_menu(self) -> std::result::Result<MenuDefinition, ConversionError> {
        let nodes = self
            .0
            .into_iter()
            .map(|(id, value)| {
                let screen: RawScreen = serde_json::from_value(value).map_err(|e| {
                    ConversionError::ValidationError(format!("Screen '{}': {}", id, e))
                })?;
                let options = screen
                    .options
                    .into_iter()
                    .map(|(key, target)| match target {
                        serde_json::Value::String(target) => Ok(OptionDefinition {
                            key,
                            target,
                            keywords: vec![],
                        }),
                        other => Err(ConversionError::ValidationError(format!(
                            "Screen '{}': option '{}' must name a screen, found {}",
                            id, key, other
                        ))),
                    })
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(MenuNodeDefinition {
                    id,
                    prompt: screen.prompt,
                    options,
                })
            })
            .collect::<std::result::Result<Vec<_>, ConversionError>>()?;

        Ok(MenuDefinition { root: None, nodes })
    }
}

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    Exact,
    Substring,
}

impl From<ModeCli> for MatchingMode {
    fn from(mode: ModeCli) -> Self {
        match mode {
            ModeCli::Exact => MatchingMode::Exact,
            ModeCli::Substring => MatchingMode::Substring,
        }
    }
}

// --- Console Collaborators ---

struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn on_transition(&mut self, node: &MenuNode, outcome: Option<&TransitionResult>) {
        match outcome {
            Some(result) if !result.matched => {
                println!("  [{}] invalid input", node.id);
            }
            _ => {
                let keys: Vec<&str> = node.option_keys().collect();
                if node.is_terminal() {
                    println!("  [{}] (end of menu)", node.id);
                } else {
                    println!("  [{}] options: {}", node.id, keys.join(" "));
                }
            }
        }
    }
}

struct ConsoleVoice;

impl VoiceIo for ConsoleVoice {
    fn speak(&mut self, text: &str) {
        println!("  voice: {}", text);
    }

    fn start_listening(&mut self) {
        tracing::trace!("listening");
    }
}

struct ConsoleTones;

impl TonePlayer for ConsoleTones {
    fn play_tone(&mut self, tone: &DtmfTone) {
        println!(
            "  tone:  {} ({} Hz + {} Hz, {} ms)",
            tone.symbol, tone.freq_low, tone.freq_high, tone.duration_ms
        );
    }
}

/// Walk an IVR menu from a scripted or interactive call
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the menu JSON file (or a compiled menu with --compiled)
    menu_path: Option<String>,
    /// Optional path to a call script JSON file to replay
    script_path: Option<String>,

    /// Path to an engine config JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// The input matching mode, overriding the config file
    #[arg(short, long, value_enum)]
    mode: Option<ModeCli>,

    /// Start the call at this node instead of the menu's root
    #[arg(long)]
    root: Option<String>,

    /// Treat the menu path as a compiled artifact (its root is fixed)
    #[arg(long, conflicts_with = "root")]
    compiled: bool,

    /// Write the compiled menu to this path
    #[arg(long)]
    save: Option<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn,dialflow=info",
        1 => "info,dialflow=debug",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();

    let menu_path = cli
        .menu_path
        .clone()
        .unwrap_or_else(|| "data/menu.json".to_string());

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EngineConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.matching_mode = mode.into();
    }
    if let Some(root) = &cli.root {
        config.root = Some(root.clone());
    }

    let load_start = Instant::now();
    let tree = if cli.compiled {
        let compiled = CompiledMenu::from_file(&menu_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load compiled menu: {}", e)));
        if cli.mode.is_none() {
            config.matching_mode = compiled.matching_mode;
        }
        if let Some(root) = config.root.take() {
            tracing::warn!(
                "ignoring configured root '{}': compiled menu starts at '{}'",
                root,
                compiled.tree.root_node().id
            );
        }
        compiled.tree
    } else {
        compile_menu(&menu_path, &config)
    };
    let load_duration = load_start.elapsed();

    println!(
        "Menu loaded: {} nodes, root '{}', {} matching ({:?})",
        tree.len(),
        tree.root_node().id,
        config.matching_mode,
        load_duration
    );

    if let Some(save_path) = &cli.save {
        CompiledMenu::new(tree.clone(), config.matching_mode)
            .save(save_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save compiled menu: {}", e)));
        println!("  -> Wrote compiled menu to '{}'", save_path);
    }

    let tree = Arc::new(tree);
    if cli.human {
        run_interactive(tree, &config);
    } else {
        run_script(tree, &config, cli.script_path);
    }
}

/// Reads and compiles a menu file in either the node-list or the table layout.
fn compile_menu(path: &str, config: &EngineConfig) -> MenuTree {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read menu file '{}': {}", path, e)));

    let value: serde_json::Value = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse menu JSON: {}", e)));

    let definition = if value.get("nodes").is_some() {
        serde_json::from_value::<MenuDefinition>(value)
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid menu definition: {}", e)))
    } else {
        let table: RawMenuTable = serde_json::from_value(value)
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid menu table: {}", e)));
        table
            .into_menu()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert menu table: {}", e)))
    };

    let mut builder = MenuCompiler::builder(definition);
    if let Some(root) = &config.root {
        builder = builder.with_root(root);
    }
    builder
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Menu compilation failed: {}", e)))
}

/// Replays a call script and prints the outcome.
fn run_script(tree: Arc<MenuTree>, config: &EngineConfig, script_path: Option<String>) {
    let script = match script_path {
        Some(path) => CallScript::from_file(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load call script '{}': {}", path, e))
        }),
        None => {
            println!("No call script provided. Using the default script.");
            CallScript::default()
        }
    };

    let mut session = CallSession::new(tree, config, ConsolePresenter, ConsoleVoice, ConsoleTones);

    println!("\nStarting call...");
    let call_start = Instant::now();
    session.begin();
    let results = session.replay(&script);
    let call_duration = call_start.elapsed();

    let finished = session.is_finished();
    let final_node = session.engine().current_node().id.clone();
    let transcript = session.end();

    println!("\nCall Finished!");
    if finished {
        println!("  -> Routed to: {}", final_node);
    } else {
        println!("  -> Call abandoned at: {}", final_node);
    }
    println!("  -> Route: {}", TranscriptFormatter::format_path(&transcript));

    println!("\n--- Transcript ---");
    println!("{}", TranscriptFormatter::format(&transcript));

    println!("\n--- Summary ---");
    println!("Scripted Inputs:   {}", script.len());
    println!("Submitted:         {}", results.len());
    println!("Rejected:          {}", transcript.rejected_count());
    println!("Call Duration:     {:?}", call_duration);
    println!();
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(tree: Arc<MenuTree>, config: &EngineConfig) {
    println!("--- dialflow Interactive Mode ---");
    println!("Type a keypad symbol to press it, any other text to say it.");
    println!("Commands: :back, :restart, :quit\n");

    let mut session = CallSession::new(tree, config, ConsolePresenter, ConsoleVoice, ConsoleTones);
    session.begin();

    let stdin = io::stdin();
    loop {
        // Console speech completes as soon as it is printed.
        session.on_speech_finished();
        if session.is_finished() {
            println!("\nCall routed. Use :restart to call again or :quit to exit.");
        }

        let Some(line) = prompt_for_input(&stdin) else {
            break;
        };

        match line.as_str() {
            "" => continue,
            ":quit" | ":q" => break,
            ":restart" => session.begin(),
            ":back" => {
                if !session.on_back() {
                    println!("  Already at the start of the menu.");
                }
            }
            text => match text.parse::<DtmfSymbol>() {
                Ok(symbol) => {
                    session.on_key(symbol);
                }
                Err(_) => {
                    session.on_recognized(text);
                }
            },
        }
    }

    let transcript = session.end();
    println!("\n--- Transcript ---");
    println!("{}", TranscriptFormatter::format(&transcript));
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(stdin: &io::Stdin) -> Option<String> {
    print!("> ");
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_menu_rejects_root_override() {
        let result = Cli::try_parse_from(["dialflow-cli", "menu.bin", "--compiled", "--root", "sales"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["dialflow-cli", "menu.bin", "--compiled"]).unwrap();
        assert!(cli.compiled && cli.root.is_none());
    }
}
