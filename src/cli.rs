// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for inspecting layouts
//!
//! `scanshell layout` composes the graph for a configuration given on the
//! command line and prints it, optionally resolved against a container size.

use scanshell::constants::ui;
use scanshell::layout::{Frames, LayoutGraph, Size, SurfaceId};
use scanshell::{Appearance, ReaderView, ViewConfiguration};
use serde::Serialize;

/// Average glyph width relative to the font size, used to estimate wrapping
const AVERAGE_GLYPH_WIDTH: f32 = 0.5;

#[derive(Serialize)]
struct LayoutReport<'a> {
    configuration: &'a ViewConfiguration,
    graph: &'a LayoutGraph,
    #[serde(skip_serializing_if = "Option::is_none")]
    frames: Option<Frames>,
}

/// Print the layout graph for `config`
pub fn print_layout(
    config: ViewConfiguration,
    container: Option<(f32, f32)>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = ReaderView::new(config, Appearance::default())?;
    let hint = view.config().hint().map(str::to_string);

    let frames = container.map(|(width, height)| {
        view.resolve(Size::new(width, height), |_, available| {
            estimate_text_height(hint.as_deref().unwrap_or_default(), available)
        })
    });

    if json {
        let report = LayoutReport {
            configuration: view.config(),
            graph: view.graph(),
            frames,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Constraints ({}):", view.graph().len());
    for constraint in view.graph().constraints() {
        println!("  {}", constraint);
    }

    if let Some(frames) = frames {
        println!();
        println!("Frames:");
        for (surface, rect) in frames.iter() {
            if surface == SurfaceId::Container {
                continue;
            }
            println!(
                "  {:<20} x={:<7.1} y={:<7.1} w={:<7.1} h={:.1}",
                surface.name(),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );
        }
    }

    Ok(())
}

/// Rough wrapped height of the hint label without a font system
fn estimate_text_height(text: &str, width: f32) -> f32 {
    let line_height = ui::HINT_TEXT_SIZE * ui::HINT_LINE_SPACING;
    if text.is_empty() || width <= 0.0 {
        return line_height;
    }
    let glyphs_per_line = (width / (ui::HINT_TEXT_SIZE * AVERAGE_GLYPH_WIDTH))
        .floor()
        .max(1.0);
    let lines = (text.chars().count() as f32 / glyphs_per_line)
        .ceil()
        .max(1.0);
    lines * line_height
}
