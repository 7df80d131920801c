// File: crates/demo/src/main.rs
// Summary: Demo steps a cross-representation border transition and composes stacked borders.

use anyhow::{Context, Result};
use border_core::{Border, BorderDirectional, BorderSide, BoxBorder, BoxShape, Color};

fn main() -> Result<()> {
    // Frame count from CLI or a small default
    let frames: usize = match std::env::args().nth(1) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid frame count '{raw}'"))?,
        None => 8,
    };
    if frames == 0 {
        anyhow::bail!("frame count must be at least 1");
    }

    let from = BoxBorder::Axis(Border::all(BorderSide::new(Color::RED, 1.0)));
    let to = BoxBorder::Directional(BorderDirectional::new(
        BorderSide::new(Color::RED, 1.0),
        BorderSide::new(Color::BLUE, 2.0),
        BorderSide::new(Color::BLUE, 2.0),
        BorderSide::new(Color::RED, 1.0),
    ));

    println!("Transition over {frames} frames:");
    println!("  from: {from}");
    println!("  to:   {to}");
    for i in 0..=frames {
        let t = i as f32 / frames as f32;
        if let Some(frame) = BoxBorder::lerp(Some(&from), Some(&to), t) {
            let insets = frame.dimensions();
            println!("  t={t:.2}  h={:.2} v={:.2}  {frame}", insets.hsum(), insets.vsum());
        }
    }

    // Stacking two specifications: a mergeable pair collapses into one border.
    let base = BoxBorder::Axis(Border::all(BorderSide::new(Color::WHITE, 2.0)));
    let shape = BoxShape::default();
    println!("base: {base} ({shape:?} outline, uniform={})", base.is_uniform());
    let accent = BoxBorder::Axis(Border::all(BorderSide::new(Color::WHITE, 1.0)));
    match base.add(&accent) {
        Some(merged) => println!("white + white -> {merged}"),
        None => println!("white + white -> not combinable, paint layered"),
    }

    // Clashing colors are rejected; the caller falls back to layering.
    let clash = BoxBorder::Axis(Border::all(BorderSide::new(Color::GREEN, 1.0)));
    match base.add(&clash) {
        Some(merged) => println!("white + green -> {merged}"),
        None => println!("white + green -> not combinable, paint layered"),
    }

    Ok(())
}
