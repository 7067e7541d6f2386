use std::env;
use std::process;
use trellis::document::parse_extent;
use trellis::{LayoutDocument, TrellisError};

/// Lays out a JSON layout document and prints the bounds of every named
/// node as JSON.
fn main() -> Result<(), TrellisError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 && args.len() != 4 {
        eprintln!("Lays out a JSON layout document and prints named node bounds.");
        eprintln!();
        eprintln!("Usage: {} <path/to/layout.json> [width height]", args[0]);
        eprintln!();
        eprintln!("Width and height accept lengths such as 300 or 300px, or 'auto'");
        eprintln!("for an unbounded axis. They override the document's 'available'.");
        process::exit(1);
    }

    let document = LayoutDocument::from_path(&args[1])?;
    let mut loaded = document.build()?;
    if args.len() == 4 {
        loaded.available.width = parse_extent(&args[2])?;
        loaded.available.height = parse_extent(&args[3])?;
    }

    let desired = loaded.layout()?;
    log::info!(
        "Laid out {} node(s); desired size {}x{}",
        loaded.tree.len(),
        desired.width,
        desired.height
    );

    println!("{}", serde_json::to_string_pretty(&loaded.named_bounds())?);
    Ok(())
}
