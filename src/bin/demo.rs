use anyhow::{ensure, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use avl_tree::AvlTree;

/// Exercises the AVL tree with a sequence of operations and prints the
/// results.
#[derive(Parser, Debug)]
#[command(name = "avl-demo", about = "Demonstrates the AVL tree operations")]
struct Cli {
    /// Values to insert (defaults to the standard demonstration sequence).
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Value to delete after the first traversal.
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    delete: i64,

    /// Lower bound of the range count query.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    range_low: i64,

    /// Upper bound of the range count query.
    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    range_high: i64,

    /// Log every tree operation as it runs.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let values = if cli.values.is_empty() {
        vec![1, 2, 3, 12, 0, 56, -3, -5, 4, 9]
    } else {
        cli.values
    };

    let mut tree = AvlTree::new();
    for value in &values {
        let inserted = tree.insert(*value);
        debug!(value, inserted, "insert");
    }
    info!(
        len = tree.len(),
        height = tree.height(),
        "tree built"
    );

    println!("In-order traversal of the AVL tree:");
    println!("{tree}");

    println!("Level-order traversal of the AVL tree:");
    for value in tree.iter_level_order() {
        print!("{value} ");
    }
    println!();

    let larger_than_5 = tree.count_greater_than(&5);
    println!("There are {larger_than_5} nodes larger than 5.");

    let root = tree.root_value()?;
    match tree.successor(root) {
        Some(successor) => println!("Root node: {root}, its successor: {successor}"),
        None => println!("Root node: {root}, it has no successor"),
    }

    if let (Some(max), Some(min)) = (tree.max(), tree.min()) {
        println!("Largest node: {max}");
        println!("Smallest node: {min}");
    }

    println!("Deleting node with value {}:", cli.delete);
    if tree.remove(&cli.delete) {
        println!("Node with value {} deleted.", cli.delete);
    } else {
        println!("Node with value {} not found.", cli.delete);
    }

    println!("In-order traversal of the AVL tree:");
    println!("{tree}");

    let in_range = tree.count_in_range(&cli.range_low, &cli.range_high);
    println!(
        "Number of nodes between {} and {}: {in_range}",
        cli.range_low, cli.range_high
    );

    ensure!(tree.validate(), "tree left unbalanced or out of order");
    info!(len = tree.len(), height = tree.height(), "done");

    Ok(())
}
