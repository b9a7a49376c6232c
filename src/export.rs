use crate::error::Result;
use crate::population::PopulationBreakdown;
use crate::venn::{Region, VennLayout};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

/// Straight edges used per arc when regions are flattened to polygons.
pub const SEGMENTS_PER_ARC: usize = 64;

/// GeoJSON features for every non-empty region of the layout.
///
/// Each feature carries the region id, the head count it stands for and the
/// SVG path data of its exact arc outline.
pub fn layout_feature_collection(
    layout: &VennLayout,
    breakdown: &PopulationBreakdown,
) -> Result<FeatureCollection> {
    let mut features = Vec::new();

    for region in Region::ALL {
        let outline = layout.outline(region)?;
        let Some(poly) = outline.to_polygon(SEGMENTS_PER_ARC) else {
            log::debug!("region {} has no outline, skipping", region.id());
            continue;
        };

        let mut properties = JsonObject::new();
        properties.insert("region".to_string(), json!(region.id()));
        properties.insert("count".to_string(), json!(region.count(breakdown)));
        properties.insert("path".to_string(), json!(outline.path_data()));

        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::from(&poly))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
