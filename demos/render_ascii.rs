//! Print every visible layer of an encoding as a character grid.
//!
//! Run with `cargo run --example render_ascii -- <hex> [frame]` (or set
//! `ECA_GENOME_HEX` / `ECA_GENOME_FRAME`). Set `RUST_LOG=eca_genome=trace` to
//! see codec and construction events.

use std::env;
use std::process::ExitCode;

use eca_genome::{Encoding, LayerGeometry, construct};
use tracing_subscriber::EnvFilter;

const DEFAULT_HEX: &str = "0000810100015a0185c7470145219d13fb2f001ec7a30b3b0d54f67b31e14e58";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let hex = args
        .next()
        .or_else(|| env::var("ECA_GENOME_HEX").ok())
        .unwrap_or_else(|| DEFAULT_HEX.to_owned());
    let frame = args
        .next()
        .or_else(|| env::var("ECA_GENOME_FRAME").ok())
        .and_then(|raw| raw.parse::<u8>().ok());

    let encoding = match hex.parse::<Encoding>() {
        Ok(encoding) => encoding,
        Err(err) => {
            eprintln!("invalid encoding: {err}");
            return ExitCode::FAILURE;
        }
    };
    let encoding = frame.map_or(encoding, |frame| encoding.with_frame(frame));
    let doc = match encoding.decode() {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("cannot decode {}: {err}", encoding.short_hex());
            return ExitCode::FAILURE;
        }
    };

    println!("encoding {} frame {}", encoding.short_hex(), doc.frame);
    for (index, layer) in doc.visible_layers() {
        let geometry = LayerGeometry::of(layer);
        let mut grid = vec![vec!['.'; geometry.columns]; geometry.rows];
        for cell in construct(layer, doc.frame) {
            grid[cell.y][cell.x] = char::from_digit(u32::from(cell.color), 16).unwrap_or('?');
        }

        println!();
        println!(
            "layer {index}: {}x{} rule {} {} {} {}",
            geometry.columns, geometry.rows, layer.rule, layer.skip_mode, layer.fill, layer.flip
        );
        for row in grid {
            println!("{}", row.into_iter().collect::<String>());
        }
    }

    ExitCode::SUCCESS
}
