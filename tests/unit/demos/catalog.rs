use super::*;

#[test]
fn every_demo_is_listed_once() {
    let sections = catalog();
    let mut ids: Vec<&str> = sections
        .iter()
        .flat_map(|s| s.entries.iter().map(|e| e.id))
        .collect();
    assert_eq!(ids.len(), DemoKind::ALL.len());
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), DemoKind::ALL.len());
}

#[test]
fn categories_follow_home_page_grouping() {
    let sections = catalog();
    let names = |c: Category| -> Vec<&str> {
        sections
            .iter()
            .find(|s| s.category == c)
            .map(|s| s.entries.iter().map(|e| e.name).collect())
            .unwrap()
    };
    assert_eq!(
        names(Category::Basic),
        ["interpolate", "spring", "interpolateColors"]
    );
    assert_eq!(
        names(Category::Transitions),
        ["fade", "slide", "wipe", "flip", "clockWipe", "iris"]
    );
    assert_eq!(names(Category::Noise), ["noise2D", "noise3D", "noise4D"]);
    assert_eq!(names(Category::Easing), ["Easing"]);
    assert_eq!(names(Category::Components), ["Sequence", "Loop", "Freeze"]);
}

#[test]
fn entries_carry_descriptions() {
    for section in catalog() {
        for entry in section.entries {
            assert!(!entry.description.is_empty(), "{}", entry.id);
            assert_eq!(entry.kind.id(), entry.id);
        }
    }
}
