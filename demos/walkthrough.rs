//! Builds a tree from random keys, unbalances it with larger keys, and rebalances it, printing
//! the tree and its traversals along the way.
//!
//! ```text
//! cargo run --example walkthrough -- --count 10 --seed 7
//! RUST_LOG=rebalance_bst=debug cargo run --example walkthrough
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rebalance_bst::{Error, Key, Node, Tree};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "walkthrough", about = "Walk a binary search tree through a rebalance")]
struct Cli {
    /// How many random keys to draw for each batch.
    #[arg(long, default_value_t = 10)]
    count: usize,
    /// Seed for the random keys. Drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let keys: Vec<Key> = (0..cli.count).map(|_| rng.gen_range(0..100)).collect();
    let mut tree = Tree::from_keys(keys);

    report(&tree);
    print_traversals(&tree)?;

    for _ in 0..cli.count {
        tree.insert(rng.gen_range(100..200));
    }
    report(&tree);

    tree.rebalance();
    report(&tree);
    print_traversals(&tree)?;

    Ok(())
}

fn report(tree: &Tree) {
    print!("{tree}");
    println!("Is the tree balanced? {}", tree.is_balanced());
}

fn print_traversals(tree: &Tree) -> Result<(), Error> {
    let mut print = |node: &Node| println!("{}", node.key());

    println!("Level Order:");
    tree.level_order(Some(&mut print))?;
    println!("Pre Order:");
    tree.pre_order(Some(&mut print))?;
    println!("Post Order:");
    tree.post_order(Some(&mut print))?;
    println!("In Order:");
    tree.in_order(Some(&mut print))?;

    Ok(())
}
