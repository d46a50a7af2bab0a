use std::fmt;

/// Asymptotic growth family of a work term `f(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthCategory {
    Constant,
    Logarithmic,
    Polynomial,
    /// `n^p · log n`
    PolynomialLog,
    Unknown,
}

impl GrowthCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthCategory::Constant => "constant",
            GrowthCategory::Logarithmic => "logarithmic",
            GrowthCategory::Polynomial => "polynomial",
            GrowthCategory::PolynomialLog => "n_log",
            GrowthCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GrowthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a work term: category plus polynomial exponent.
///
/// `exponent` is `None` only for [`GrowthCategory::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthClass {
    pub category: GrowthCategory,
    pub exponent: Option<f64>,
}

impl GrowthClass {
    pub fn constant() -> Self {
        Self {
            category: GrowthCategory::Constant,
            exponent: Some(0.0),
        }
    }

    pub fn logarithmic() -> Self {
        Self {
            category: GrowthCategory::Logarithmic,
            exponent: Some(0.0),
        }
    }

    pub fn polynomial(exponent: f64) -> Self {
        Self {
            category: GrowthCategory::Polynomial,
            exponent: Some(exponent),
        }
    }

    pub fn polynomial_log(exponent: f64) -> Self {
        Self {
            category: GrowthCategory::PolynomialLog,
            exponent: Some(exponent),
        }
    }

    pub fn unknown() -> Self {
        Self {
            category: GrowthCategory::Unknown,
            exponent: None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.category != GrowthCategory::Unknown
    }

    /// Exponent with the unknown case read as zero.
    pub fn power(&self) -> f64 {
        self.exponent.unwrap_or(0.0)
    }
}

impl fmt::Display for GrowthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exponent {
            Some(p) => write!(f, "{} (exponent {})", self.category, p),
            None => write!(f, "{}", self.category),
        }
    }
}
