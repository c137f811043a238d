//! # gallerywall CLI
//!
//! Usage:
//!   gallerywall gallery.json -o layout.json
//!   echo '{ ... }' | gallerywall
//!   gallerywall --example > gallery.json
//!
//! Set `RUST_LOG=gallerywall=debug` to see packing decisions on stderr.

use std::env;
use std::fs;
use std::io::{self, Read, Write};

use gallerywall::LayoutError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_gallery_json());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(EnvFilter::from_default_env())
        .init();
}

fn run(args: &[String]) -> Result<(), LayoutError> {
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).map_err(|source| LayoutError::Io {
            path: args[1].clone(),
            source,
        })?
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| LayoutError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        buf
    };

    let output = gallerywall::layout_json(&input)?;

    match args.windows(2).find(|w| w[0] == "-o").map(|w| w[1].clone()) {
        Some(path) => {
            fs::write(&path, &output).map_err(|source| LayoutError::Io {
                path: path.clone(),
                source,
            })?;
            eprintln!("✓ Written {} bytes to {}", output.len(), path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output).map_err(|source| LayoutError::Io {
                path: "<stdout>".to_string(),
                source,
            })?;
        }
    }
    Ok(())
}

fn example_gallery_json() -> &'static str {
    r##"{
  "viewportWidth": 1024,
  "seed": 2024,
  "maxImbalance": 120,
  "config": {
    "gap": 20,
    "balanceThreshold": 150,
    "variantDistribution": { "small": 40, "medium": 35, "large": 25 }
  },
  "items": [
    { "id": "aura-001", "title": "Monsoon Over Konkan", "medium": "Acrylic on canvas" },
    { "id": "aura-002", "title": "Temple Bells", "medium": "Watercolor" },
    { "id": "aura-003", "title": "Saffron Hour", "medium": "Oil on linen", "variant": "large" },
    { "id": "aura-004", "title": "Fishing Boats at Malpe", "medium": "Gouache" },
    { "id": "aura-005", "title": "Areca Grove", "medium": "Ink and wash" },
    { "id": "aura-006", "title": "Laterite Steps", "medium": "Acrylic on board" },
    { "id": "aura-007", "title": "Night Market", "medium": "Mixed media" },
    { "id": "aura-008", "title": "Kolam Study II", "medium": "Charcoal", "variant": "small" },
    { "id": "aura-009", "title": "Backwater Light", "medium": "Oil on canvas" },
    { "id": "aura-010", "title": "Jasmine Seller", "medium": "Watercolor" }
  ]
}
"##
}
