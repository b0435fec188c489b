/// Household income tier a record was photographed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Income {
    Low,
    Mid,
    High,
}

impl Income {
    pub const ALL: [Self; 3] = [Self::Low, Self::Mid, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }

    /// Exact dataset spelling only; `"Low"` or `" low"` are not tiers.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "mid" => Some(Self::Mid),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Income",
            Self::Mid => "Mid Income",
            Self::High => "High Income",
        }
    }

    /// Sort rank, low first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Mid => 2,
            Self::High => 3,
        }
    }
}

/// The kind of household photograph a record holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Toothbrush,
    Beds,
    Families,
}

impl RecordKind {
    pub const ALL: [Self; 3] = [Self::Toothbrush, Self::Beds, Self::Families];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Toothbrush => "toothbrush",
            Self::Beds => "beds",
            Self::Families => "families",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "toothbrush" => Some(Self::Toothbrush),
            "beds" => Some(Self::Beds),
            "families" => Some(Self::Families),
            _ => None,
        }
    }
}
