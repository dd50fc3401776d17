use log::warn;

use crate::error::MotionError;
use crate::motion::{Curve, MotionSpec, Property, PropertyCurve, ScrollRange, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Serene,
    Haven,
    Nexus,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    ScrollHint,
    AboutImage,
    AboutText,
    SereneImage,
    SereneText,
    HavenImage,
    HavenText,
    NexusImage,
    NexusText,
    ContactBlock,
}

pub struct CurveDecl {
    pub property: Property,
    pub unit: Unit,
    pub range: (f64, f64),
    pub output: (f64, f64),
}

pub struct ElementMotion {
    pub element: ElementId,
    pub curves: &'static [CurveDecl],
}

pub struct SectionMotion {
    pub section: SectionId,
    pub window: (f64, f64),
    pub elements: &'static [ElementMotion],
}

const fn curve(property: Property, unit: Unit, range: (f64, f64), output: (f64, f64)) -> CurveDecl {
    CurveDecl { property, unit, range, output }
}

const fn opacity_in(range: (f64, f64)) -> CurveDecl {
    curve(Property::Opacity, Unit::Px, range, (0.0, 1.0))
}

const fn settle_scale(range: (f64, f64)) -> CurveDecl {
    curve(Property::Scale, Unit::Px, range, (1.2, 1.0))
}

pub const MOTION_TABLE: &[SectionMotion] = &[
    SectionMotion {
        section: SectionId::Hero,
        window: (0.0, 0.08),
        elements: &[ElementMotion {
            element: ElementId::ScrollHint,
            curves: &[curve(Property::Opacity, Unit::Px, (0.0, 0.08), (1.0, 0.0))],
        }],
    },
    SectionMotion {
        section: SectionId::About,
        window: (0.1, 0.25),
        elements: &[
            ElementMotion {
                element: ElementId::AboutImage,
                curves: &[settle_scale((0.1, 0.25))],
            },
            ElementMotion {
                element: ElementId::AboutText,
                curves: &[
                    opacity_in((0.1, 0.2)),
                    curve(Property::X, Unit::Px, (0.1, 0.2), (100.0, 0.0)),
                ],
            },
        ],
    },
    SectionMotion {
        section: SectionId::Serene,
        window: (0.3, 0.45),
        elements: &[
            ElementMotion {
                element: ElementId::SereneImage,
                curves: &[
                    settle_scale((0.3, 0.45)),
                    curve(Property::X, Unit::Percent, (0.3, 0.45), (-10.0, 0.0)),
                ],
            },
            ElementMotion {
                element: ElementId::SereneText,
                curves: &[
                    opacity_in((0.3, 0.38)),
                    curve(Property::X, Unit::Px, (0.3, 0.38), (100.0, 0.0)),
                ],
            },
        ],
    },
    SectionMotion {
        section: SectionId::Haven,
        window: (0.48, 0.63),
        elements: &[
            ElementMotion {
                element: ElementId::HavenText,
                curves: &[
                    opacity_in((0.48, 0.56)),
                    curve(Property::X, Unit::Px, (0.48, 0.56), (-100.0, 0.0)),
                ],
            },
            ElementMotion {
                element: ElementId::HavenImage,
                curves: &[
                    settle_scale((0.48, 0.63)),
                    curve(Property::X, Unit::Percent, (0.48, 0.63), (10.0, 0.0)),
                ],
            },
        ],
    },
    SectionMotion {
        section: SectionId::Nexus,
        window: (0.66, 0.81),
        elements: &[
            ElementMotion {
                element: ElementId::NexusImage,
                curves: &[
                    settle_scale((0.66, 0.81)),
                    curve(Property::X, Unit::Percent, (0.66, 0.81), (-10.0, 0.0)),
                ],
            },
            ElementMotion {
                element: ElementId::NexusText,
                curves: &[
                    opacity_in((0.66, 0.74)),
                    curve(Property::X, Unit::Px, (0.66, 0.74), (100.0, 0.0)),
                ],
            },
        ],
    },
    SectionMotion {
        section: SectionId::Contact,
        window: (0.85, 0.92),
        elements: &[ElementMotion {
            element: ElementId::ContactBlock,
            curves: &[
                opacity_in((0.85, 0.92)),
                curve(Property::Y, Unit::Px, (0.85, 0.92), (50.0, 0.0)),
            ],
        }],
    },
];

impl CurveDecl {
    pub fn build(&self) -> Result<PropertyCurve, MotionError> {
        let range = ScrollRange::new(self.range.0, self.range.1)?;
        let curve = Curve::new(range, self.output.0, self.output.1)?;
        Ok(PropertyCurve {
            property: self.property,
            unit: self.unit,
            curve,
        })
    }

    pub fn build_within(&self, window: (f64, f64)) -> Result<PropertyCurve, MotionError> {
        let bounds = ScrollRange::new(window.0, window.1)?;
        let built = self.build()?;
        if !bounds.contains(&built.curve.range()) {
            return Err(MotionError::OutsideWindow {
                range: self.range,
                window,
            });
        }
        Ok(built)
    }
}

/// Broken entries are logged and skipped; the element then stays at its
/// stylesheet defaults.
pub fn build_motion_spec(table: &[SectionMotion]) -> MotionSpec<ElementId> {
    let mut spec = MotionSpec::new();
    for section in table {
        for element in section.elements {
            for decl in element.curves {
                match decl.build_within(section.window) {
                    Ok(curve) => spec.insert(element.element, curve),
                    Err(err) => warn!(
                        "Skipping {:?} curve for {:?} in {:?}: {}",
                        decl.property, element.element, section.section, err
                    ),
                }
            }
        }
    }
    spec
}

pub fn motion_spec() -> MotionSpec<ElementId> {
    build_motion_spec(MOTION_TABLE)
}

pub struct NavTarget {
    pub label: &'static str,
    pub viewport_factor: f64,
}

impl NavTarget {
    pub fn scroll_top(&self, viewport_height: f64) -> f64 {
        (viewport_height * self.viewport_factor).max(0.0)
    }
}

// Hand-tuned against the section boundaries; not derived from MOTION_TABLE.
pub const NAV_TARGETS: &[NavTarget] = &[
    NavTarget { label: "Accueil", viewport_factor: 0.0 },
    NavTarget { label: "L'Agence", viewport_factor: 1.2 },
    NavTarget { label: "Projets", viewport_factor: 2.4 },
    NavTarget { label: "Contact", viewport_factor: 5.5 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MotionMapper;

    const ALL_ELEMENTS: [ElementId; 10] = [
        ElementId::ScrollHint,
        ElementId::AboutImage,
        ElementId::AboutText,
        ElementId::SereneImage,
        ElementId::SereneText,
        ElementId::HavenImage,
        ElementId::HavenText,
        ElementId::NexusImage,
        ElementId::NexusText,
        ElementId::ContactBlock,
    ];

    #[test]
    fn test_every_entry_fits_its_section() {
        for section in MOTION_TABLE {
            for element in section.elements {
                for decl in element.curves {
                    assert!(
                        decl.build_within(section.window).is_ok(),
                        "{:?} / {:?}",
                        section.section,
                        element.element
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_elements_have_curves() {
        let spec = motion_spec();
        for element in ALL_ELEMENTS {
            assert!(!spec.curves(element).is_empty(), "{:?}", element);
        }
        let total: usize = ALL_ELEMENTS.iter().map(|e| spec.curves(*e).len()).sum();
        assert_eq!(total, 18);
        assert_eq!(spec.curves(ElementId::ScrollHint).len(), 1);
        assert_eq!(spec.curves(ElementId::ContactBlock).len(), 2);
    }

    #[test]
    fn test_curve_escaping_window_is_skipped() {
        const LEAKY: &[SectionMotion] = &[SectionMotion {
            section: SectionId::Serene,
            window: (0.3, 0.45),
            elements: &[ElementMotion {
                element: ElementId::SereneText,
                curves: &[
                    opacity_in((0.25, 0.38)),
                    curve(Property::X, Unit::Px, (0.3, 0.38), (100.0, 0.0)),
                ],
            }],
        }];
        assert_eq!(
            LEAKY[0].elements[0].curves[0].build_within(LEAKY[0].window),
            Err(MotionError::OutsideWindow {
                range: (0.25, 0.38),
                window: (0.3, 0.45)
            })
        );
        let spec = build_motion_spec(LEAKY);
        assert_eq!(spec.curves(ElementId::SereneText).len(), 1);
        assert_eq!(spec.curves(ElementId::SereneText)[0].property, Property::X);
    }

    #[test]
    fn test_invalid_entry_is_skipped() {
        const BROKEN: &[SectionMotion] = &[SectionMotion {
            section: SectionId::About,
            window: (0.1, 0.25),
            elements: &[ElementMotion {
                element: ElementId::AboutText,
                curves: &[
                    curve(Property::Opacity, Unit::Px, (0.2, 0.1), (0.0, 1.0)),
                    curve(Property::X, Unit::Px, (0.1, 0.2), (100.0, 0.0)),
                ],
            }],
        }];
        let spec = build_motion_spec(BROKEN);
        assert_eq!(spec.curves(ElementId::AboutText).len(), 1);
        assert_eq!(spec.curves(ElementId::AboutText)[0].property, Property::X);
    }

    #[test]
    fn test_about_text_halfway() {
        let spec = motion_spec();
        let style = MotionMapper::style_for(0.15, spec.curves(ElementId::AboutText));
        assert!((style.opacity.unwrap() - 0.5).abs() < 1e-9);
        assert!((style.x.unwrap().value - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_before_section_elements_rest_at_start_values() {
        let spec = motion_spec();
        let style = MotionMapper::style_for(0.05, spec.curves(ElementId::AboutText));
        assert_eq!(style.opacity, Some(0.0));
        let image = MotionMapper::style_for(0.05, spec.curves(ElementId::HavenImage));
        assert_eq!(image.scale, Some(1.2));
        assert_eq!(image.x.unwrap().value, 10.0);
        assert_eq!(image.x.unwrap().unit, Unit::Percent);
    }

    #[test]
    fn test_nav_targets_scale_with_viewport() {
        let expected = [0.0, 1200.0, 2400.0, 5500.0];
        for (target, want) in NAV_TARGETS.iter().zip(expected) {
            assert!((target.scroll_top(1000.0) - want).abs() < 1e-6, "{}", target.label);
        }
        assert_eq!(NAV_TARGETS[3].scroll_top(0.0), 0.0);
    }
}
