//! Iterator-protocol demonstration.
//!
//! Runs each sequence producer the way the original snippets' usage
//! blocks do: ten pulls from a cycle, a counter bounded by the caller,
//! an in-order tree walk, and — when a path is given — the file-backed
//! line sequence.
//!
//! Run with: cargo run --bin protocol_demo [path/to/file.txt]

use lazyseq::{closures, BinaryTree, Counter, Cycle, FileLines, Producer, TreeNode};

fn main() {
    println!("=== Lazy sequence producers ===\n");

    // =========================================================================
    // Cyclic sequence over a fixed backing vector
    // =========================================================================
    println!("Cycle over [1, 2, 3], ten pulls:");
    println!("{}", "=".repeat(60));
    let pulls: Vec<i32> = Cycle::new(vec![1, 2, 3]).take(10).collect();
    println!("  {:?}", pulls);

    // =========================================================================
    // Infinite counter, bounded by the caller
    // =========================================================================
    println!("\nCounter from 10, stopping past 20:");
    println!("{}", "=".repeat(60));
    let bounded: Vec<i64> = Counter::new(10).take_while(|&n| n <= 20).collect();
    println!("  {:?}", bounded);

    // =========================================================================
    // Lazy in-order tree traversal
    // =========================================================================
    println!("\nIn-order walk of the reference tree:");
    println!("{}", "=".repeat(60));
    let mut root = TreeNode::new(1);
    let mut left = TreeNode::new(2);
    left.left = Some(Box::new(TreeNode::new(4)));
    left.right = Some(Box::new(TreeNode::new(5)));
    root.left = Some(Box::new(left));
    root.right = Some(Box::new(TreeNode::new(3)));
    let tree = BinaryTree::new(root);

    for value in &tree {
        print!("{} ", value);
    }
    println!();

    // =========================================================================
    // Nested-closure capture
    // =========================================================================
    println!("\nNested closure: adder(9)(10)");
    println!("{}", "=".repeat(60));
    let adding = closures::adder(9);
    println!("  {}", adding(10));

    // =========================================================================
    // File-backed line sequence (optional)
    // =========================================================================
    if let Some(path) = std::env::args().nth(1) {
        println!("\nLines of {}:", path);
        println!("{}", "=".repeat(60));
        match FileLines::new(path).start() {
            Ok(cursor) => {
                for line in cursor {
                    match line {
                        Ok(line) => println!("  {}", line),
                        Err(err) => {
                            eprintln!("  read error: {}", err);
                            break;
                        }
                    }
                }
            }
            Err(err) => eprintln!("  {}", err),
        }
    } else {
        println!("\n(pass a file path to demo the file-backed producer)");
    }
}
