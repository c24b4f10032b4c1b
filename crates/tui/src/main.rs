mod renderer;

use anyhow::Result;
use flashblocks_core::{BuildingId, ConstructionEngine};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: flashblocks [burj|eiffel|empire]");
        return Ok(());
    }

    // Unknown keys fail here, before any arithmetic sees them.
    let initial = match args.get(1) {
        Some(key) => key.parse::<BuildingId>()?,
        None => BuildingId::EiffelTower,
    };

    let engine = ConstructionEngine::new(initial);
    renderer::run(engine)
}
