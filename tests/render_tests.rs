#![cfg(feature = "render")]

use trackly_map::{
    constants::{BACKGROUND_COLOR, GRID_COLOR},
    prelude::*,
};

fn centro() -> Marker {
    Marker::new(19.4326, -99.1332, "Centro", "#8B1538").with_size(MarkerSize::Large)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render(props: &MapProps, width: u32, height: u32) -> RasterSurface {
    init_logging();
    let mut map = MarkerMap::default();
    let mut surface = RasterSurface::new(width, height);
    map.render(props, &mut surface).unwrap();
    surface
}

#[test]
fn test_centro_scenario() {
    init_logging();
    let props = MapProps::new(vec![centro()]);
    let mut map = MarkerMap::default();
    let mut surface = RasterSurface::new(400, 400);
    let report = map.render(&props, &mut surface).unwrap();

    let glyph = &report.glyphs[0];
    assert_eq!(glyph.center, Point::new(200.0, 200.0));
    assert_eq!(glyph.radius, 12.0);

    assert_eq!(surface.pixel(200, 200), Some(Color::rgb(0x8B, 0x15, 0x38)));

    let labels = surface.labels();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].text, "Centro");
    assert_eq!(labels[0].position, Point::new(200.0, 183.0));
}

#[test]
fn test_marker_at_center_lands_mid_surface() {
    let props = MapPropsBuilder::new()
        .center(19.42, -99.12)
        .marker(Marker::new(19.42, -99.12, "Zona Sur", "#E91E63"))
        .build()
        .unwrap();

    for (width, height) in [(400, 400), (640, 320), (101, 57)] {
        let mut map = MarkerMap::default();
        let mut surface = RecordingSurface::new(width, height);
        let report = map.render(&props, &mut surface).unwrap();
        assert_eq!(
            report.glyphs[0].center,
            Point::new(width as f64 / 2.0, height as f64 / 2.0)
        );
    }
}

#[test]
fn test_radii_are_ordered_by_size() {
    let props = MapProps::new(vec![
        Marker::new(19.43, -99.14, "s", "#000").with_size(MarkerSize::Small),
        Marker::new(19.43, -99.13, "m", "#000").with_size(MarkerSize::Medium),
        Marker::new(19.43, -99.12, "l", "#000").with_size(MarkerSize::Large),
    ]);
    let mut map = MarkerMap::default();
    let report = map
        .render(&props, &mut RecordingSurface::new(400, 400))
        .unwrap();

    let radii: Vec<f32> = report.glyphs.iter().map(|glyph| glyph.radius).collect();
    assert_eq!(radii, vec![6.0, 8.0, 12.0]);
}

#[test]
fn test_rendering_twice_is_pixel_identical() {
    let props = MarkerPreset::Roi.props();
    let mut map = MarkerMap::default();
    let mut surface = RasterSurface::new(480, 360);

    map.render(&props, &mut surface).unwrap();
    let first = surface.image().clone();
    map.render(&props, &mut surface).unwrap();

    assert_eq!(first.as_raw(), surface.image().as_raw());
    assert_eq!(first.as_raw(), render(&props, 480, 360).image().as_raw());
}

#[test]
fn test_last_marker_wins_on_overlap() {
    let props = MapProps::new(vec![
        Marker::new(19.4326, -99.1332, "first", "#16a34a"),
        Marker::new(19.4326, -99.1332, "second", "#eab308"),
    ]);
    let surface = render(&props, 200, 200);
    assert_eq!(surface.pixel(100, 100), Some(Color::rgb(0xea, 0xb3, 0x08)));

    let swapped = MapProps::new(props.markers.iter().rev().cloned().collect());
    let surface = render(&swapped, 200, 200);
    assert_eq!(surface.pixel(100, 100), Some(Color::rgb(0x16, 0xa3, 0x4a)));
}

#[test]
fn test_empty_map_is_background_and_grid() {
    let surface = render(&MapProps::default(), 300, 200);

    assert!(surface.labels().is_empty());
    assert_eq!(surface.pixel(25, 25), Some(BACKGROUND_COLOR));
    assert_eq!(surface.pixel(49, 25), Some(BACKGROUND_COLOR));
    assert_eq!(surface.pixel(50, 25), Some(GRID_COLOR));
    assert_eq!(surface.pixel(25, 150), Some(GRID_COLOR));

    // Lines start at the origin
    assert_eq!(surface.pixel(0, 25), Some(GRID_COLOR));
    assert_eq!(surface.pixel(25, 0), Some(GRID_COLOR));

    for (x, y, pixel) in surface.image().enumerate_pixels() {
        let color = Color::rgba(pixel[0], pixel[1], pixel[2], pixel[3]);
        let on_grid = x % 50 == 0 || y % 50 == 0;
        let expected = if on_grid { GRID_COLOR } else { BACKGROUND_COLOR };
        assert_eq!(color, expected, "pixel ({x}, {y})");
    }
}

#[test]
fn test_offscreen_markers_are_clipped() {
    let props = MapProps::new(vec![Marker::new(20.5, -98.0, "far", "#8B1538")]);
    let mut map = MarkerMap::default();
    let mut surface = RasterSurface::new(200, 200);
    let report = map.render(&props, &mut surface).unwrap();

    assert!(report.glyphs[0].center.x > 200.0);
    assert!(surface
        .image()
        .pixels()
        .all(|p| Color::rgba(p[0], p[1], p[2], p[3]) != Color::rgb(0x8B, 0x15, 0x38)));
}

#[test]
fn test_resize_follows_container() {
    let props = MapProps::new(vec![centro()]);
    let mut map = MarkerMap::default();
    let mut surface = RasterSurface::new(400, 400);
    map.render(&props, &mut surface).unwrap();

    surface.set_container_size(Some((120, 80)));
    map.render(&props, &mut surface).unwrap();
    assert_eq!(surface.image().dimensions(), (120, 80));
    assert_eq!(surface.pixel(60, 40), Some(Color::rgb(0x8B, 0x15, 0x38)));

    surface.set_container_size(None);
    assert!(matches!(
        map.render(&props, &mut surface),
        Err(MapError::SurfaceNotReady)
    ));
    assert_eq!(surface.image().dimensions(), (120, 80));
}

#[test]
fn test_save_png() {
    let surface = render(&MarkerPreset::Mobility.props(), 320, 240);
    let path = std::env::temp_dir().join(format!("trackly-map-{}.png", std::process::id()));
    surface.save_png(&path).unwrap();

    let reloaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(reloaded.as_raw(), surface.image().as_raw());
    std::fs::remove_file(path).unwrap();
}
