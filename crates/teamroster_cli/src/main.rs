//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `teamroster_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use teamroster_core::{export_csv, filter_members, MemoryKeyValueStore, RosterStore};

fn main() {
    println!("teamroster_core version={}", teamroster_core::core_version());

    match RosterStore::load(MemoryKeyValueStore::new()) {
        Ok(store) => {
            println!("team size={}", store.len());
            println!(
                "filter 'react' hits={}",
                filter_members(store.members(), "react").count()
            );
            println!("csv bytes={}", export_csv(store.members()).len());
        }
        Err(err) => {
            eprintln!("failed to load roster: {err}");
            std::process::exit(1);
        }
    }
}
