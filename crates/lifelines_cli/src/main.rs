//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lifelines_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use lifelines_core::{Life, TreeView};

fn main() {
    let tree = TreeView::new(Life::sample_data());
    println!("lifelines_core version={}", lifelines_core::core_version());
    println!(
        "sample_data moments={} story_lines={}",
        tree.root().moments.len(),
        tree.root().story_lines.len()
    );
}
