use crate::domain::{Income, RecordKind};

/// Fixed per-tier caption shown on every image card of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationTable {
    pub low: &'static str,
    pub mid: &'static str,
    pub high: &'static str,
    pub fallback: &'static str,
}

impl AnnotationTable {
    pub const fn lookup(&self, income: Option<Income>) -> &'static str {
        match income {
            Some(Income::Low) => self.low,
            Some(Income::Mid) => self.mid,
            Some(Income::High) => self.high,
            None => self.fallback,
        }
    }
}

pub const TOOTHBRUSH_ANNOTATIONS: AnnotationTable = AnnotationTable {
    low: "Basic manual toothbrushes, sometimes shared among family members, with minimal dental care products and simple storage.",
    mid: "Standard manual toothbrushes with basic dental hygiene products, often in good condition with some additional care items.",
    high: "Advanced electric toothbrushes with multiple features, high-quality manual toothbrushes, and comprehensive dental care accessories.",
    fallback: "Standard dental hygiene item.",
};

pub const BEDS_ANNOTATIONS: AnnotationTable = AnnotationTable {
    low: "Simple sleeping arrangements, often mats or basic bedding on the floor, minimal privacy and shared sleeping areas.",
    mid: "Basic beds or sleeping arrangements with some comfort items, often in shared living spaces with moderate privacy.",
    high: "Comfortable beds with proper mattresses, pillows, and bedroom furniture in dedicated sleeping spaces with privacy.",
    fallback: "Standard sleeping arrangement.",
};

pub const FAMILIES_ANNOTATIONS: AnnotationTable = AnnotationTable {
    low: "Nuclear families with parents and children living in small, cramped spaces with minimal amenities and shared living areas.",
    mid: "Mixed family structures - nuclear families and some extended families sharing moderate living spaces with basic amenities.",
    high: "Nuclear families with parents and children living in spacious homes with dedicated family areas and modern amenities.",
    fallback: "Standard family living arrangement.",
};

pub const fn annotations_for(kind: RecordKind) -> &'static AnnotationTable {
    match kind {
        RecordKind::Toothbrush => &TOOTHBRUSH_ANNOTATIONS,
        RecordKind::Beds => &BEDS_ANNOTATIONS,
        RecordKind::Families => &FAMILIES_ANNOTATIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::annotations_for;
    use crate::domain::{Income, RecordKind};

    #[test]
    fn each_tier_has_its_own_caption() {
        let table = annotations_for(RecordKind::Beds);
        assert!(table.lookup(Some(Income::Low)).starts_with("Simple sleeping"));
        assert!(table.lookup(Some(Income::High)).starts_with("Comfortable beds"));
        assert_ne!(table.lookup(Some(Income::Mid)), table.lookup(Some(Income::Low)));
    }

    #[test]
    fn unknown_tier_uses_scene_fallback() {
        assert_eq!(
            annotations_for(RecordKind::Toothbrush).lookup(None),
            "Standard dental hygiene item."
        );
        assert_eq!(
            annotations_for(RecordKind::Families).lookup(None),
            "Standard family living arrangement."
        );
    }
}
