//! Conversion graph between the six named spaces
//!
//! A fixed table of directed edges, each a pure function from one space to
//! another. Any-to-any conversion walks the graph from the source node,
//! computing every reachable space exactly once.
//!
//! ```text
//! CielchD50 ⇄ CielabD50 ⇄ XyzD50 ⇄ XyzD65 ⇄ OklabD65 ⇄ OklchD65
//! ```
//!
//! D50 ↔ D65 uses Bradford adaptation between the ICC D50 white and the
//! D65 white, so either white maps exactly onto the other.

use std::sync::LazyLock;

use crate::color::{D50, D65, Lab, LchDouble, Oklab};
use crate::generic::GenericColor;
use crate::math::{Matrix3x3, bradford_matrix};
use crate::space::ColorSpace;

static D50_TO_D65: LazyLock<Matrix3x3> = LazyLock::new(|| bradford_matrix(&D50, &D65));
static D65_TO_D50: LazyLock<Matrix3x3> = LazyLock::new(|| bradford_matrix(&D65, &D50));

/// One directed edge of the graph
#[derive(Debug, Clone, Copy)]
pub struct Conversion {
    pub from: ColorSpace,
    pub to: ColorSpace,
    pub function: fn(&GenericColor) -> GenericColor,
}

/// The edge table
pub static CONVERSIONS: [Conversion; 10] = [
    Conversion {
        from: ColorSpace::XyzD50,
        to: ColorSpace::XyzD65,
        function: xyz_d50_to_xyz_d65,
    },
    Conversion {
        from: ColorSpace::XyzD65,
        to: ColorSpace::XyzD50,
        function: xyz_d65_to_xyz_d50,
    },
    Conversion {
        from: ColorSpace::OklabD65,
        to: ColorSpace::XyzD65,
        function: oklab_to_xyz_d65,
    },
    Conversion {
        from: ColorSpace::XyzD65,
        to: ColorSpace::OklabD65,
        function: xyz_d65_to_oklab,
    },
    Conversion {
        from: ColorSpace::XyzD50,
        to: ColorSpace::CielabD50,
        function: xyz_d50_to_cielab_d50,
    },
    Conversion {
        from: ColorSpace::CielabD50,
        to: ColorSpace::XyzD50,
        function: cielab_d50_to_xyz_d50,
    },
    Conversion {
        from: ColorSpace::CielchD50,
        to: ColorSpace::CielabD50,
        function: polar_to_cartesian,
    },
    Conversion {
        from: ColorSpace::OklchD65,
        to: ColorSpace::OklabD65,
        function: polar_to_cartesian,
    },
    Conversion {
        from: ColorSpace::CielabD50,
        to: ColorSpace::CielchD50,
        function: cartesian_to_polar,
    },
    Conversion {
        from: ColorSpace::OklabD65,
        to: ColorSpace::OklchD65,
        function: cartesian_to_polar,
    },
];

/// Edges leaving `space`
pub fn conversions_from(space: ColorSpace) -> impl Iterator<Item = &'static Conversion> {
    CONVERSIONS.iter().filter(move |c| c.from == space)
}

/// A value in every space it was converted to
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConversionMap {
    values: [Option<GenericColor>; 6],
}

impl ConversionMap {
    pub fn get(&self, space: ColorSpace) -> Option<GenericColor> {
        self.values[space.index()]
    }

    pub fn contains(&self, space: ColorSpace) -> bool {
        self.values[space.index()].is_some()
    }

    fn insert(&mut self, space: ColorSpace, value: GenericColor) {
        self.values[space.index()] = Some(value);
    }

    /// Number of spaces present
    pub fn len(&self) -> usize {
        self.values.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present entries in [`ColorSpace::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (ColorSpace, GenericColor)> + '_ {
        ColorSpace::ALL
            .iter()
            .zip(self.values.iter())
            .filter_map(|(space, value)| value.map(|v| (*space, v)))
    }
}

/// Convert `value` from `source` into every reachable space, source included
///
/// Each space is computed once: from whichever node reaches it first in a
/// depth-first walk of [`CONVERSIONS`].
pub fn all_conversions(source: ColorSpace, value: GenericColor) -> ConversionMap {
    let mut result = ConversionMap::default();
    result.insert(source, value);
    visit(&mut result, source, value);
    result
}

fn visit(result: &mut ConversionMap, space: ColorSpace, value: GenericColor) {
    for edge in conversions_from(space) {
        if result.contains(edge.to) {
            continue;
        }
        let converted = (edge.function)(&value);
        result.insert(edge.to, converted);
        visit(result, edge.to, converted);
    }
}

/// Convert to a single target space
///
/// Always `Some` for the built-in table; `None` would mean `to` is not
/// reachable from `from`.
pub fn convert(from: ColorSpace, to: ColorSpace, value: GenericColor) -> Option<GenericColor> {
    if from == to {
        return Some(value);
    }
    all_conversions(from, value).get(to)
}

fn xyz_d50_to_xyz_d65(value: &GenericColor) -> GenericColor {
    GenericColor::from_trio(D50_TO_D65.multiply_vec(value.to_trio()))
}

fn xyz_d65_to_xyz_d50(value: &GenericColor) -> GenericColor {
    GenericColor::from_trio(D65_TO_D50.multiply_vec(value.to_trio()))
}

fn oklab_to_xyz_d65(value: &GenericColor) -> GenericColor {
    value.reinterpret_as_oklab().to_xyz_d65().into()
}

fn xyz_d65_to_oklab(value: &GenericColor) -> GenericColor {
    Oklab::from_xyz_d65(value.reinterpret_as_xyz()).into()
}

fn xyz_d50_to_cielab_d50(value: &GenericColor) -> GenericColor {
    Lab::from_xyz(value.reinterpret_as_xyz()).into()
}

fn cielab_d50_to_xyz_d50(value: &GenericColor) -> GenericColor {
    value.reinterpret_as_lab().to_xyz().into()
}

fn polar_to_cartesian(value: &GenericColor) -> GenericColor {
    GenericColor::from_trio(value.reinterpret_as_lch().to_cartesian())
}

fn cartesian_to_polar(value: &GenericColor) -> GenericColor {
    LchDouble::from_cartesian(value.first, value.second, value.third).into()
}

/// CIELCh D50 → CIELab D50 → XYZ D50
pub fn cielch_d50_to_xyz_d50(lch: LchDouble) -> GenericColor {
    cielab_d50_to_xyz_d50(&polar_to_cartesian(&lch.into()))
}

/// XYZ D50 → CIELab D50 → CIELCh D50
pub fn xyz_d50_to_cielch_d50(xyz: GenericColor) -> LchDouble {
    cartesian_to_polar(&xyz_d50_to_cielab_d50(&xyz)).reinterpret_as_lch()
}

/// Oklch → Oklab → XYZ D65 → XYZ D50
pub fn oklch_d65_to_xyz_d50(lch: LchDouble) -> GenericColor {
    xyz_d65_to_xyz_d50(&oklab_to_xyz_d65(&polar_to_cartesian(&lch.into())))
}

/// XYZ D50 → XYZ D65 → Oklab → Oklch
pub fn xyz_d50_to_oklch_d65(xyz: GenericColor) -> LchDouble {
    cartesian_to_polar(&xyz_d65_to_oklab(&xyz_d50_to_xyz_d65(&xyz))).reinterpret_as_lch()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: GenericColor, b: GenericColor, tolerance: f64) {
        for (x, y) in a.to_trio().iter().zip(b.to_trio()) {
            assert!((x - y).abs() < tolerance, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_edge_table_shape() {
        assert_eq!(CONVERSIONS.len(), 10);
        for space in ColorSpace::ALL {
            assert!(conversions_from(space).count() >= 1, "{} has no outgoing edge", space);
        }
        assert_eq!(conversions_from(ColorSpace::XyzD50).count(), 2);
        assert_eq!(conversions_from(ColorSpace::CielchD50).count(), 1);
    }

    #[test]
    fn test_all_conversions_is_total() {
        for source in ColorSpace::ALL {
            let map = all_conversions(source, GenericColor::new(0.3, 0.2, 0.1));
            assert_eq!(map.len(), 6, "from {}", source);
            assert_eq!(map.get(source), Some(GenericColor::new(0.3, 0.2, 0.1)));
        }
    }

    #[test]
    fn test_white_maps_to_neutral() {
        let map = all_conversions(ColorSpace::XyzD50, D50.xyz.into());
        let lab = map.get(ColorSpace::CielabD50).unwrap();
        assert_close(lab, GenericColor::new(100.0, 0.0, 0.0), 1e-9);

        let d65 = map.get(ColorSpace::XyzD65).unwrap();
        assert_close(d65, D65.xyz.into(), 1e-12);

        let oklab = map.get(ColorSpace::OklabD65).unwrap();
        assert!((oklab.first - 1.0).abs() < 1e-4);
        assert!(map.get(ColorSpace::OklchD65).unwrap().second < 1e-4);
    }

    #[test]
    fn test_three_hops_from_lch() {
        let lch = GenericColor::new(60.0, 40.0, 250.0);
        let map = all_conversions(ColorSpace::CielchD50, lch);
        let back = all_conversions(ColorSpace::XyzD65, map.get(ColorSpace::XyzD65).unwrap());
        assert_close(back.get(ColorSpace::CielchD50).unwrap(), lch, 1e-9);
    }

    #[test]
    fn test_chains_agree_with_graph() {
        let lch = LchDouble::new(55.0, 35.0, 40.0);
        let xyz = cielch_d50_to_xyz_d50(lch);
        let via_graph = convert(ColorSpace::CielchD50, ColorSpace::XyzD50, lch.into()).unwrap();
        assert_close(xyz, via_graph, 1e-12);

        let oklch = xyz_d50_to_oklch_d65(xyz);
        let via_graph = convert(ColorSpace::XyzD50, ColorSpace::OklchD65, xyz).unwrap();
        assert_close(oklch.into(), via_graph, 1e-12);

        let back = oklch_d65_to_xyz_d50(oklch);
        assert_close(back, xyz, 1e-9);
        let back = xyz_d50_to_cielch_d50(back);
        assert_close(back.into(), lch.into(), 1e-7);
    }

    #[test]
    fn test_polar_hue_range() {
        let lch = cartesian_to_polar(&GenericColor::new(50.0, 0.0, -10.0));
        assert!((lch.third - 270.0).abs() < 1e-12);
        assert!((lch.second - 10.0).abs() < 1e-12);

        let lab = polar_to_cartesian(&GenericColor::new(50.0, 10.0, 90.0));
        assert!(lab.second.abs() < 1e-12);
        assert!((lab.third - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_conversion() {
        let v = GenericColor::new(1.0, 2.0, 3.0);
        assert_eq!(convert(ColorSpace::OklchD65, ColorSpace::OklchD65, v), Some(v));
    }

    #[test]
    fn test_iter_order() {
        let map = all_conversions(ColorSpace::OklchD65, GenericColor::new(0.5, 0.1, 30.0));
        let spaces: Vec<_> = map.iter().map(|(s, _)| s).collect();
        assert_eq!(spaces, ColorSpace::ALL);
    }
}
