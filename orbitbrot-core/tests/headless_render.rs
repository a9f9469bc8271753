use orbitbrot_core::{escape_time, iterate_orbit, IterationResult, Viewport};

/// Classify every pixel of a viewport into a flat Vec.
fn classify_grid(viewport: &Viewport) -> Vec<IterationResult> {
    let mut results = Vec::with_capacity((viewport.width * viewport.height) as usize);
    for py in 0..viewport.height {
        for px in 0..viewport.width {
            results.push(escape_time(viewport.pixel_to_complex(px, py)));
        }
    }
    results
}

#[test]
fn default_view_has_interior_and_exterior() {
    let viewport = Viewport::default_view(100, 75);
    let results = classify_grid(&viewport);

    assert_eq!(results.len(), 100 * 75);
    let interior = results.iter().filter(|r| r.is_interior()).count();
    assert!(interior > 0, "should have some interior points");
    assert!(interior < results.len(), "should have some escaped points");
}

#[test]
fn shortcut_matches_brute_force_for_every_pixel() {
    let viewport = Viewport::default_view(96, 72);
    for py in 0..viewport.height {
        for px in 0..viewport.width {
            let c = viewport.pixel_to_complex(px, py);
            assert_eq!(
                escape_time(c).is_interior(),
                iterate_orbit(c).is_interior(),
                "classification differs at pixel ({px}, {py})"
            );
        }
    }
}

#[test]
fn classification_is_deterministic() {
    let mut viewport = Viewport::default_view(80, 60);
    viewport.zoom_view(8.0, 20.0, 31.0);

    assert_eq!(classify_grid(&viewport), classify_grid(&viewport));
}

#[test]
fn screen_center_of_default_view_is_interior() {
    let mut viewport = Viewport::default_view(800, 600);
    viewport.set_view(-0.7, 0.0, 1.0);
    assert!(escape_time(viewport.pixel_to_complex(400, 300)).is_interior());
}
