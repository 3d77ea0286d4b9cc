/// Bornes de la catégorie Low (Xiu). Le seuil n'est pas au milieu de [3, 18].
pub const LOW_MIN: u8 = 3;
pub const LOW_MAX: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parity::Even => write!(f, "Even"),
            Parity::Odd => write!(f, "Odd"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighLow {
    Low,
    High,
}

impl HighLow {
    /// Nom d'usage à la table : Xiu pour Low, Tai pour High.
    pub fn local_name(&self) -> &'static str {
        match self {
            HighLow::Low => "Xiu",
            HighLow::High => "Tai",
        }
    }
}

impl std::fmt::Display for HighLow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighLow::Low => write!(f, "Low"),
            HighLow::High => write!(f, "High"),
        }
    }
}

pub fn classify_parity(sum: u8) -> Parity {
    if sum % 2 == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

pub fn classify_range(sum: u8) -> HighLow {
    if (LOW_MIN..=LOW_MAX).contains(&sum) {
        HighLow::Low
    } else {
        HighLow::High
    }
}
