use clap::{Parser, Subcommand};
use motif::color::{ColorDelta, ColorEngine, ColorFields, hex_from_named_color};
use motif::expression::{ExpressionEditor, ExpressionEvent, ExpressionTree};
use std::fs;
use std::time::Instant;
use tracing::Level;

/// Inspect colors and edit condition expressions from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print engine logs (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a hex string or CSS color name into hex, RGB and HSV
    Color {
        input: String,
        /// Color used as the fallback for invalid input
        #[arg(short, long)]
        previous: Option<String>,
    },
    /// Shift the HSV components of a color, saturating at the range limits
    Nudge {
        hex: String,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        hue: i32,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        saturation: i32,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        value: i32,
    },
    /// Load an expression tree (JSON or binary snapshot), apply edits and print it
    Tree {
        path: String,
        /// JSON file holding an array of editor events to apply in order
        #[arg(short, long)]
        events: Option<String>,
        #[arg(long)]
        add_condition: bool,
        #[arg(long)]
        add_group: bool,
        /// Delete the root node at this position
        #[arg(long)]
        delete: Option<usize>,
        /// Write the resulting tree as JSON
        #[arg(short, long)]
        output: Option<String>,
        /// Write the resulting tree as a binary snapshot
        #[arg(long)]
        snapshot: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Color { input, previous } => run_color(&input, previous.as_deref()),
        Command::Nudge {
            hex,
            hue,
            saturation,
            value,
        } => run_nudge(
            &hex,
            ColorDelta {
                hue,
                saturation,
                value,
            },
        ),
        Command::Tree {
            path,
            events,
            add_condition,
            add_group,
            delete,
            output,
            snapshot,
        } => {
            let mut events = match events {
                Some(events_path) => load_events(&events_path),
                None => Vec::new(),
            };
            if add_condition {
                events.push(ExpressionEvent::AddCondition { group: None });
            }
            if add_group {
                events.push(ExpressionEvent::AddGroup);
            }
            if let Some(index) = delete {
                events.push(ExpressionEvent::Delete {
                    path: motif::expression::NodePath::Root(index),
                });
            }
            run_tree(&path, &events, output.as_deref(), snapshot.as_deref());
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_color(input: &str, previous: Option<&str>) {
    let engine = ColorEngine::new();
    let previous = previous.map(|hex| engine.from_fields(&ColorFields::hex(hex), None));

    let fields = match hex_from_named_color(input) {
        Some(hex) => ColorFields::hex(hex).with_name(input.trim()),
        None => ColorFields::hex(input),
    };
    let color = engine.from_fields(&fields, previous.as_ref());
    print_color(&color);
}

fn run_nudge(hex: &str, delta: ColorDelta) {
    let engine = ColorEngine::new();
    let start = engine.from_fields(&ColorFields::hex(hex), None);
    if start.has_errors() {
        exit_with_error(&format!("'{}' is not a valid hex color", hex));
    }
    let nudged = engine.apply_delta(&delta, &start);
    println!(
        "From:   {} (hsv {}, {}, {})",
        start.hex, start.hsv.hue, start.hsv.saturation, start.hsv.value
    );
    print_color(&nudged);
}

fn print_color(color: &motif::color::Color) {
    let hex = if color.is_transparent() {
        "(transparent)"
    } else {
        color.hex.as_str()
    };
    println!("Hex:    {}", hex);
    if let Some(name) = &color.name {
        println!("Name:   {}", name);
    }
    println!("RGB:    {}, {}, {}", color.rgb.red, color.rgb.green, color.rgb.blue);
    println!("HSV:    {}, {}, {}", color.hsv.hue, color.hsv.saturation, color.hsv.value);
    if color.has_errors() {
        let fields: Vec<String> = color.errors.iter().map(|f| f.to_string()).collect();
        println!("Errors: {}", fields.join(", "));
    }
}

fn load_tree(path: &str) -> ExpressionTree {
    if path.ends_with(".json") {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read tree file '{}': {}", path, e))
        });
        ExpressionTree::from_json(&json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse tree: {}", e)))
    } else {
        ExpressionTree::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load snapshot: {}", e)))
    }
}

fn load_events(path: &str) -> Vec<ExpressionEvent> {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read events file '{}': {}", path, e))
    });
    serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse events JSON: {}", e)))
}

fn run_tree(path: &str, events: &[ExpressionEvent], output: Option<&str>, snapshot: Option<&str>) {
    let start = Instant::now();
    let mut editor = ExpressionEditor::new(load_tree(path));

    for (i, event) in events.iter().enumerate() {
        if let Err(e) = editor.dispatch(event) {
            exit_with_error(&format!("Event {} could not be applied: {}", i + 1, e));
        }
    }
    let edit_duration = start.elapsed();
    let tree = editor.into_tree();

    println!("{}", tree.display());
    println!("Logic:  {}", tree.describe());
    println!("Edits:  {} applied in {:?}", events.len(), edit_duration);

    if let Some(output) = output {
        let json = tree
            .to_json()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize tree: {}", e)));
        fs::write(output, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", output, e))
        });
        println!("Saved JSON to '{}'", output);
    }
    if let Some(snapshot) = snapshot {
        tree.save(snapshot)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save snapshot: {}", e)));
        println!("Saved snapshot to '{}'", snapshot);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
