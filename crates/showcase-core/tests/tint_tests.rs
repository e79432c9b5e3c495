use glam::Vec3;
use showcase_core::tint::{hover_emissive, Emissive, HoverHighlight, Material};
use showcase_core::*;

fn emissives(materials: &[Box<dyn Material>]) -> Vec<Option<Emissive>> {
    materials
        .iter()
        .map(|m| m.as_tintable().map(|t| t.emissive()))
        .collect()
}

#[test]
fn hover_colour_keeps_brighter_originals() {
    let dim = hover_emissive(Emissive::NONE);
    assert_eq!(dim.color, Vec3::from_array(HOVER_EMISSIVE_RGB));
    assert_eq!(dim.intensity, HOVER_MIN_INTENSITY);

    let bright = hover_emissive(Emissive {
        color: Vec3::ONE,
        intensity: 2.0,
    });
    assert_eq!(bright.intensity, 2.0);
}

#[test]
fn hover_tints_then_restores_saved_emissives() {
    let mut materials = ProceduralAssets.materials();
    let original = emissives(&materials);
    let mut highlight = HoverHighlight::new();

    assert!(highlight.update(true, true, &mut materials));
    let lit = emissives(&materials);
    for (before, after) in original.iter().zip(&lit) {
        match (before, after) {
            (Some(b), Some(a)) => {
                assert_eq!(a.color, Vec3::from_array(HOVER_EMISSIVE_RGB));
                assert_eq!(a.intensity, b.intensity.max(HOVER_MIN_INTENSITY));
            }
            (None, None) => {}
            _ => panic!("tintability changed"),
        }
    }

    // staying hovered does not re-save the tinted values
    assert!(highlight.update(true, true, &mut materials));
    assert!(!highlight.update(false, true, &mut materials));
    assert_eq!(emissives(&materials), original);
}

#[test]
fn disabling_hover_restores_immediately() {
    let mut materials = ProceduralAssets.materials();
    let original = emissives(&materials);
    let mut highlight = HoverHighlight::new();
    highlight.update(true, true, &mut materials);
    assert!(!highlight.update(true, false, &mut materials));
    assert!(!highlight.is_lit());
    assert_eq!(emissives(&materials), original);
    assert_eq!(highlight.saved(2), None);
}
