//! Render a marker map to a PNG without any UI.
//!
//! ```text
//! cargo run --example headless -- [preset | props.json | features.geojson] [out.png] [WIDTHxHEIGHT]
//! ```
//!
//! Set `TRACKLY_MAP_CONFIG` to a render config file to restyle the map.

use anyhow::{bail, Context};
use trackly_map::{
    data::{geojson::markers_from_geojson_str, markers::props_from_file},
    MapProps, MarkerMap, MarkerPreset, RasterSurface, RenderConfig,
};

fn load_props(source: &str) -> anyhow::Result<MapProps> {
    if let Ok(preset) = source.parse::<MarkerPreset>() {
        return Ok(preset.props());
    }
    if source.ends_with(".geojson") {
        let json = std::fs::read_to_string(source).with_context(|| format!("reading {source}"))?;
        return Ok(MapProps::new(markers_from_geojson_str(&json)?));
    }
    props_from_file(source).with_context(|| format!("loading {source}"))
}

fn parse_size(size: &str) -> anyhow::Result<(u32, u32)> {
    let Some((width, height)) = size.split_once('x') else {
        bail!("expected WIDTHxHEIGHT, got {size:?}");
    };
    Ok((width.parse()?, height.parse()?))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let source = args.next().unwrap_or_else(|| MarkerPreset::Mobility.name().to_string());
    let output = args.next().unwrap_or_else(|| "trackly-map.png".to_string());
    let props = load_props(&source)?;

    let (width, height) = match args.next() {
        Some(size) => parse_size(&size)?,
        None => (800, props.height.resolve(800.0).round() as u32),
    };

    let mut map = MarkerMap::new(RenderConfig::from_env()?);
    let mut surface = RasterSurface::new(width, height);
    let report = map.render(&props, &mut surface)?;

    println!("Rendered {} markers on {width}x{height}", report.glyphs.len());
    for glyph in &report.glyphs {
        println!(
            "  {:<20} at ({:>7.1}, {:>7.1}) r={}",
            glyph.label, glyph.center.x, glyph.center.y, glyph.radius
        );
    }

    surface.save_png(&output)?;
    println!("Saved {output}");
    Ok(())
}
