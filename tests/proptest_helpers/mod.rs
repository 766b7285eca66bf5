#![allow(dead_code)]

use labelcrop::geom::{CropWindow, NormalizedRect};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub const EPS: f64 = 1e-9;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(256);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Class tags as they appear in real label files.
pub fn arb_class_id() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..80).prop_map(|id| id.to_string()),
        "[a-z]{1,8}",
    ]
}

/// Any rectangle whose corners stay inside the unit square.
pub fn arb_rect() -> impl Strategy<Value = NormalizedRect> {
    (arb_class_id(), 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0).prop_map(
        |(class_id, a, b, c, d)| {
            let (x1, x2) = (a.min(c), a.max(c));
            let (y1, y2) = (b.min(d), b.max(d));
            NormalizedRect::new(
                class_id,
                (x1 + x2) / 2.0,
                (y1 + y2) / 2.0,
                x2 - x1,
                y2 - y1,
            )
        },
    )
}

/// Rectangles with unconstrained (but finite) center and size.
pub fn arb_loose_rect() -> impl Strategy<Value = NormalizedRect> {
    (arb_class_id(), -2.0f64..3.0, -2.0f64..3.0, 0.0f64..3.0, 0.0f64..3.0)
        .prop_map(|(class_id, cx, cy, w, h)| NormalizedRect::new(class_id, cx, cy, w, h))
}

pub fn arb_window() -> impl Strategy<Value = CropWindow> {
    (0.0f64..0.9, 0.0f64..0.9, 0.05f64..1.0, 0.05f64..1.0).prop_map(|(x, y, fw, fh)| {
        let width = (1.0 - x) * fw;
        let height = (1.0 - y) * fh;
        CropWindow::new(x, y, width, height).expect("generated window is valid")
    })
}

pub fn arb_margin() -> impl Strategy<Value = f64> {
    0.0f64..0.45
}

pub fn assert_rect_close(
    actual: &NormalizedRect,
    expected: &NormalizedRect,
    eps: f64,
) -> Result<(), String> {
    if actual.class_id != expected.class_id {
        return Err(format!(
            "class_id {} != {}",
            actual.class_id, expected.class_id
        ));
    }
    for (a, e, field) in [
        (actual.center_x, expected.center_x, "center_x"),
        (actual.center_y, expected.center_y, "center_y"),
        (actual.width, expected.width, "width"),
        (actual.height, expected.height, "height"),
    ] {
        if (a - e).abs() > eps {
            return Err(format!("{field}: {a} != {e} (eps {eps})"));
        }
    }
    Ok(())
}
