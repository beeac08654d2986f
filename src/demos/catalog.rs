use crate::demos::DemoKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Basic,
    Transitions,
    Noise,
    Easing,
    Components,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Basic,
        Self::Transitions,
        Self::Noise,
        Self::Easing,
        Self::Components,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "Basic animation",
            Self::Transitions => "Transitions",
            Self::Noise => "Noise",
            Self::Easing => "Easing",
            Self::Components => "Components",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub kind: DemoKind,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CatalogSection {
    pub category: Category,
    pub title: &'static str,
    pub entries: Vec<CatalogEntry>,
}

impl DemoKind {
    pub fn category(self) -> Category {
        match self {
            Self::Interpolate | Self::Spring | Self::InterpolateColors => Category::Basic,
            Self::Fade | Self::Slide | Self::Wipe | Self::Flip | Self::ClockWipe | Self::Iris => {
                Category::Transitions
            }
            Self::Noise2d | Self::Noise3d | Self::Noise4d => Category::Noise,
            Self::Easing => Category::Easing,
            Self::Sequence | Self::Loop | Self::Freeze => Category::Components,
        }
    }

    /// Name of the primitive the demo illustrates.
    pub fn name(self) -> &'static str {
        match self {
            Self::Interpolate => "interpolate",
            Self::InterpolateColors => "interpolateColors",
            Self::Easing => "Easing",
            Self::Spring => "spring",
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Wipe => "wipe",
            Self::Flip => "flip",
            Self::Iris => "iris",
            Self::ClockWipe => "clockWipe",
            Self::Noise2d => "noise2D",
            Self::Noise3d => "noise3D",
            Self::Noise4d => "noise4D",
            Self::Sequence => "Sequence",
            Self::Loop => "Loop",
            Self::Freeze => "Freeze",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Interpolate => "Map the frame onto an output range",
            Self::InterpolateColors => "Blend between a list of colors",
            Self::Easing => "Shape progress with an easing curve",
            Self::Spring => "Physics-based spring motion",
            Self::Fade => "Fade in and out",
            Self::Slide => "Slide in from an edge",
            Self::Wipe => "Reveal with a moving edge",
            Self::Flip => "Rotate around an axis",
            Self::Iris => "Reveal through a growing circle",
            Self::ClockWipe => "Reveal with a sweeping clock hand",
            Self::Noise2d => "2D coherent noise",
            Self::Noise3d => "3D coherent noise",
            Self::Noise4d => "4D coherent noise",
            Self::Sequence => "Time-shifted sections",
            Self::Loop => "Repeat an animation",
            Self::Freeze => "Hold a single frame",
        }
    }
}

/// The full catalog, grouped by category in display order.
pub fn catalog() -> Vec<CatalogSection> {
    Category::ALL
        .into_iter()
        .map(|category| CatalogSection {
            category,
            title: category.title(),
            entries: catalog_order()
                .into_iter()
                .filter(|k| k.category() == category)
                .map(|kind| CatalogEntry {
                    id: kind.id(),
                    name: kind.name(),
                    description: kind.description(),
                    kind,
                })
                .collect(),
        })
        .collect()
}

fn catalog_order() -> [DemoKind; 16] {
    use DemoKind::*;
    [
        Interpolate,
        Spring,
        InterpolateColors,
        Fade,
        Slide,
        Wipe,
        Flip,
        ClockWipe,
        Iris,
        Noise2d,
        Noise3d,
        Noise4d,
        Easing,
        Sequence,
        Loop,
        Freeze,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/demos/catalog.rs"]
mod tests;
