use clap::Parser;
use motif::color::{Color, ColorEngine, ColorFields};
use motif::expression::{Condition, ExpressionTree, Group, Node, TriggerType};
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::{Rng, rng};
use serde::Serialize;
use std::fs;

const RESOURCES: &[&str] = &["temperature", "pressure", "humidity", "status", "region", "owner"];
const OPERATORS: &[&str] = &["eq", "neq", "gt", "lt", "gte", "lte", "contains"];

/// A CLI tool to generate expression trees and colors for testing hosts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_fixtures.json")]
    output: String,

    /// The number of expression trees to generate
    #[arg(long, default_value_t = 10)]
    trees: usize,

    /// The maximum number of root nodes per tree
    #[arg(long, default_value_t = 6)]
    max_nodes: usize,

    /// The number of colors to generate
    #[arg(long, default_value_t = 20)]
    colors: usize,
}

#[derive(Serialize)]
struct Fixtures {
    trees: Vec<ExpressionTree>,
    colors: Vec<Color>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rng();

    if cli.max_nodes == 0 {
        eprintln!("Error: --max-nodes must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating {} trees (up to {} root nodes) and {} colors...",
        cli.trees, cli.max_nodes, cli.colors
    );

    let trees = (0..cli.trees)
        .map(|_| generate_tree(&mut rng, cli.max_nodes))
        .collect();
    println!("-> Generated expression trees.");
    let colors = generate_colors(&mut rng, cli.colors);
    println!("-> Generated colors.");

    let json_output = serde_json::to_string_pretty(&Fixtures { trees, colors })?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved fixtures to '{}'", cli.output);

    Ok(())
}

fn random_trigger(rng: &mut ThreadRng) -> TriggerType {
    // Mostly `all`/`any`, as in real forms.
    match rng.random_range(0..10) {
        0..=3 => TriggerType::All,
        4..=7 => TriggerType::Any,
        8 => TriggerType::Custom,
        _ => TriggerType::Always,
    }
}

fn random_condition(rng: &mut ThreadRng) -> Condition {
    if rng.random_bool(0.1) {
        return Condition::default();
    }
    let resource = RESOURCES.choose(rng).copied().unwrap_or_default();
    let operator = OPERATORS.choose(rng).copied().unwrap_or_default();
    Condition::new(resource, operator, rng.random_range(0..100).to_string())
}

fn custom_logic_for(len: usize) -> String {
    (1..=len)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" OR ")
}

fn generate_tree(rng: &mut ThreadRng, max_nodes: usize) -> ExpressionTree {
    let len = rng.random_range(1..=max_nodes);
    let conditions = (0..len)
        .map(|_| {
            if rng.random_bool(0.25) {
                let trigger_type = random_trigger(rng);
                let conditions: Vec<Condition> = (0..rng.random_range(1..=3))
                    .map(|_| random_condition(rng))
                    .collect();
                let custom_logic = if trigger_type == TriggerType::Custom {
                    custom_logic_for(conditions.len())
                } else {
                    String::new()
                };
                Node::Group(Group {
                    trigger_type,
                    custom_logic,
                    conditions,
                })
            } else {
                Node::Condition(random_condition(rng))
            }
        })
        .collect();

    let trigger_type = random_trigger(rng);
    let tree = ExpressionTree::new(trigger_type, conditions);
    if trigger_type == TriggerType::Custom {
        let logic = custom_logic_for(tree.len());
        tree.with_custom_logic(logic)
    } else {
        tree
    }
}

/// Random opaque colors, with the occasional transparent one.
fn generate_colors(rng: &mut ThreadRng, count: usize) -> Vec<Color> {
    let engine = ColorEngine::new();
    (0..count)
        .map(|_| {
            if rng.random_bool(0.05) {
                return engine.from_fields(&ColorFields::hex(""), None);
            }
            let fields = ColorFields::hsv(
                f64::from(rng.random_range(0..360u16)),
                f64::from(rng.random_range(0..=100u8)),
                f64::from(rng.random_range(0..=100u8)),
            );
            engine.from_fields(&fields, None)
        })
        .collect()
}
