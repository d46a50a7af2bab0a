//! Display rendering for asymptotic solutions.
//!
//! Kernels produce plain-text notation (`Θ(n^2)`); this crate turns it into
//! the form shown to users (`Θ(n²)`). The raw string stays available in the
//! session for machine consumers.

/// Powers of `n` rendered with superscripts.
const SUPERSCRIPTS: &[(&str, &str)] = &[("n^2", "n²"), ("n^3", "n³")];

/// Render a raw solution for display: `Theta`/`theta` become `Θ`, and every
/// `n^2`/`n^3` becomes a superscript.
pub fn format_solution(raw: &str) -> String {
    let mut result = raw.replace("Theta", "Θ").replace("theta", "Θ");
    for (pattern, replacement) in SUPERSCRIPTS {
        result = result.replace(pattern, replacement);
    }
    result
}
