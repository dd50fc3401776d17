use std::fmt;

use super::range::{Curve, ScrollRange};
use super::spring::{Spring, SpringConfig};
use crate::scroll::TravelDistance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    X,
    Y,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Px,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Px => write!(f, "{}px", self.value),
            Unit::Percent => write!(f, "{}%", self.value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyCurve {
    pub property: Property,
    pub unit: Unit,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MotionSpec<K> {
    entries: Vec<(K, Vec<PropertyCurve>)>,
}

impl<K: Copy + PartialEq> MotionSpec<K> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn insert(&mut self, element: K, curve: PropertyCurve) {
        match self.entries.iter_mut().find(|(k, _)| *k == element) {
            Some((_, curves)) => curves.push(curve),
            None => self.entries.push((element, vec![curve])),
        }
    }

    pub fn curves(&self, element: K) -> &[PropertyCurve] {
        self.entries
            .iter()
            .find(|(k, _)| *k == element)
            .map(|(_, curves)| curves.as_slice())
            .unwrap_or(&[])
    }
}

impl<K: Copy + PartialEq> Default for MotionSpec<K> {
    fn default() -> Self {
        Self::new()
    }
}

// Properties without a curve stay `None` and are left to the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementStyle {
    pub opacity: Option<f64>,
    pub x: Option<Length>,
    pub y: Option<Length>,
    pub scale: Option<f64>,
}

impl ElementStyle {
    pub fn to_css(&self) -> String {
        let mut transforms = Vec::new();
        if let Some(x) = self.x {
            transforms.push(format!("translateX({})", x));
        }
        if let Some(y) = self.y {
            transforms.push(format!("translateY({})", y));
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({})", scale));
        }

        let mut css = String::new();
        if !transforms.is_empty() {
            css.push_str(&format!("transform: {};", transforms.join(" ")));
        }
        if let Some(opacity) = self.opacity {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(&format!("opacity: {};", opacity));
        }
        css
    }
}

/// Maps progress onto styles and owns the smoothing spring of the master
/// track translation. A new mapper starts at rest at offset 0.
#[derive(Debug, Clone)]
pub struct MotionMapper {
    spring: Spring,
}

impl MotionMapper {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            spring: Spring::new(config),
        }
    }

    pub fn evaluate(progress: f64, curve: &Curve) -> f64 {
        curve.sample(progress)
    }

    // When two curves target the same property the later one wins.
    pub fn style_for(progress: f64, curves: &[PropertyCurve]) -> ElementStyle {
        let mut style = ElementStyle::default();
        for pc in curves {
            let value = Self::evaluate(progress, &pc.curve);
            match pc.property {
                Property::Opacity => style.opacity = Some(value),
                Property::Scale => style.scale = Some(value),
                Property::X => style.x = Some(Length { value, unit: pc.unit }),
                Property::Y => style.y = Some(Length { value, unit: pc.unit }),
            }
        }
        style
    }

    /// Unsmoothed track offset: 0 at progress 0, `-travel` at progress 1.
    pub fn track_target(progress: f64, travel: TravelDistance) -> f64 {
        match Curve::new(ScrollRange::FULL, 0.0, -travel.get()) {
            Ok(curve) => Self::evaluate(progress, &curve),
            Err(_) => 0.0,
        }
    }

    pub fn retarget(&mut self, progress: f64, travel: TravelDistance) {
        self.spring.set_target(Self::track_target(progress, travel));
    }

    pub fn step(&mut self, dt: f64) -> f64 {
        self.spring.step(dt)
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }
}

impl Default for MotionMapper {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(property: Property, unit: Unit, range: (f64, f64), out: (f64, f64)) -> PropertyCurve {
        PropertyCurve {
            property,
            unit,
            curve: Curve::new(ScrollRange::new(range.0, range.1).unwrap(), out.0, out.1).unwrap(),
        }
    }

    #[test]
    fn test_shared_range_curves_are_independent() {
        let curves = [
            pc(Property::Opacity, Unit::Px, (0.1, 0.2), (0.0, 1.0)),
            pc(Property::X, Unit::Px, (0.1, 0.2), (100.0, 0.0)),
        ];
        let style = MotionMapper::style_for(0.15, &curves);
        assert!((style.opacity.unwrap() - 0.5).abs() < 1e-9);
        assert!((style.x.unwrap().value - 50.0).abs() < 1e-9);
        assert_eq!(style.scale, None);
        assert_eq!(style.y, None);
    }

    #[test]
    fn test_style_css() {
        let curves = [
            pc(Property::Scale, Unit::Px, (0.3, 0.45), (1.2, 1.0)),
            pc(Property::X, Unit::Percent, (0.3, 0.45), (-10.0, 0.0)),
        ];
        let style = MotionMapper::style_for(0.0, &curves);
        assert_eq!(style.to_css(), "transform: translateX(-10%) scale(1.2);");

        let contact = [
            pc(Property::Opacity, Unit::Px, (0.85, 0.92), (0.0, 1.0)),
            pc(Property::Y, Unit::Px, (0.85, 0.92), (50.0, 0.0)),
        ];
        assert_eq!(
            MotionMapper::style_for(1.0, &contact).to_css(),
            "transform: translateY(0px); opacity: 1;"
        );
    }

    #[test]
    fn test_empty_style_has_no_css() {
        assert_eq!(MotionMapper::style_for(0.5, &[]).to_css(), "");
    }

    #[test]
    fn test_track_target_endpoints() {
        let travel = TravelDistance::between(6000.0, 1000.0);
        assert_eq!(MotionMapper::track_target(0.0, travel), 0.0);
        assert_eq!(MotionMapper::track_target(1.0, travel), -5000.0);
        assert!((MotionMapper::track_target(0.5, travel) + 2500.0).abs() < 1e-9);
    }

    #[test]
    fn test_track_settles_on_last_section() {
        let travel = TravelDistance::between(6000.0, 1000.0);
        let mut mapper = MotionMapper::default();
        mapper.retarget(1.0, travel);
        for _ in 0..600 {
            mapper.step(1.0 / 60.0);
        }
        assert!(mapper.is_settled());
        assert_eq!(mapper.step(1.0 / 60.0), -5000.0);
    }

    #[test]
    fn test_zero_travel_keeps_track_still() {
        let mut mapper = MotionMapper::default();
        mapper.retarget(0.7, TravelDistance::ZERO);
        assert_eq!(mapper.step(1.0 / 60.0), 0.0);
        assert!(mapper.is_settled());
    }

    #[test]
    fn test_motion_spec_groups_by_element() {
        let mut spec = MotionSpec::new();
        spec.insert(1u8, pc(Property::Opacity, Unit::Px, (0.1, 0.2), (0.0, 1.0)));
        spec.insert(2u8, pc(Property::Scale, Unit::Px, (0.1, 0.25), (1.2, 1.0)));
        spec.insert(1u8, pc(Property::X, Unit::Px, (0.1, 0.2), (100.0, 0.0)));
        assert_eq!(spec.curves(1).len(), 2);
        assert_eq!(spec.curves(2).len(), 1);
        assert!(spec.curves(3).is_empty());
        assert_eq!(spec.curves(1)[1].property, Property::X);
    }
}
