use wasm_bindgen::prelude::*;
use geo_types::Coord;
use crate::error::OverlapError;
use crate::export::layout_feature_collection;
use crate::intersection::circle_intersection_points;
use crate::population::DiseaseTest;
use crate::solver::SeparationSolver;
use crate::venn::{VennConfig, VennLayout};

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: OverlapError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Center distance for two circles that should overlap by `overlap`.
#[wasm_bindgen]
pub fn find_separation(radius_a: f64, radius_b: f64, overlap: f64) -> Result<f64, JsValue> {
    SeparationSolver::new()
        .find_separation(radius_a, radius_b, overlap)
        .map_err(to_js)
}

/// Intersection points as `[x, x', y, y']`.
#[wasm_bindgen]
pub fn circle_intersection(
    x0: f64,
    y0: f64,
    r0: f64,
    x1: f64,
    y1: f64,
    r1: f64,
) -> Result<Vec<f64>, JsValue> {
    intersection_coords(x0, y0, r0, x1, y1, r1).map_err(to_js)
}

fn intersection_coords(
    x0: f64,
    y0: f64,
    r0: f64,
    x1: f64,
    y1: f64,
    r1: f64,
) -> Result<Vec<f64>, OverlapError> {
    let [p, q] =
        circle_intersection_points(Coord { x: x0, y: y0 }, r0, Coord { x: x1, y: y1 }, r1)?;
    Ok(vec![p.x, q.x, p.y, q.y])
}

fn layout_for(
    total_population: f64,
    pct_diseased: f64,
    pct_accuracy: f64,
) -> Result<(DiseaseTest, VennLayout), OverlapError> {
    let test = DiseaseTest::from_percentages(total_population, pct_diseased, pct_accuracy)?;
    let layout = VennLayout::compute(&test.breakdown(), &VennConfig::new())?;
    Ok((test, layout))
}

/// Full layout (circles, overlap, separation) as a plain JS object.
#[wasm_bindgen]
pub fn venn_layout(
    total_population: f64,
    pct_diseased: f64,
    pct_accuracy: f64,
) -> Result<JsValue, JsValue> {
    let (_, layout) = layout_for(total_population, pct_diseased, pct_accuracy).map_err(to_js)?;
    serde_wasm_bindgen::to_value(&layout)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize layout: {}", e)))
}

/// Region polygons of the layout as a GeoJSON FeatureCollection string.
#[wasm_bindgen]
pub fn venn_layout_geojson(
    total_population: f64,
    pct_diseased: f64,
    pct_accuracy: f64,
) -> Result<String, JsValue> {
    let (test, layout) = layout_for(total_population, pct_diseased, pct_accuracy).map_err(to_js)?;
    let fc = layout_feature_collection(&layout, &test.breakdown()).map_err(to_js)?;
    Ok(fc.to_string())
}

// JsValue only works on a wasm target, so native tests stay on the Ok paths.
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_circle_intersection_flattens_x_then_y() {
        let flat = circle_intersection(0.0, 0.0, 4.0, 3.0, 0.0, 5.0).unwrap();
        assert_eq!(flat.len(), 4);
        for (got, want) in flat.iter().zip([0.0, 0.0, 4.0, -4.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_intersection_coords_report_bad_radius() {
        let err = intersection_coords(0.0, 0.0, -5.0, 1.0, 0.0, 3.0).unwrap_err();
        assert!(matches!(err, OverlapError::InvalidInput(_)));
    }

    #[test]
    fn test_find_separation_matches_solver() {
        let d = find_separation(250.0, 150.0, 10_000.0).unwrap();
        let expected = SeparationSolver::new().find_separation(250.0, 150.0, 10_000.0).unwrap();
        assert_eq!(d, expected);
    }

    #[test]
    fn test_geojson_string_has_every_region() {
        let text = venn_layout_geojson(100_000.0, 1.0, 90.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().map(|f| f.len()), Some(3));
    }

    #[test]
    fn test_layout_for_rejects_bad_percentages() {
        assert!(layout_for(100_000.0, 0.0, 90.0).is_err());
        let (test, layout) = layout_for(100_000.0, 1.0, 90.0).unwrap();
        assert_eq!(test.prevalence, 0.01);
        assert_eq!(layout.positive.radius, 250.0);
    }
}
