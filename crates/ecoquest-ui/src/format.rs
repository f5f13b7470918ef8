//! Display formatting shared by the post cards and the header.
//!
//! Pure functions of their inputs. Relative ages live in
//! `ecoquest_core::age` so the CLI prints the same text.

pub use ecoquest_core::age::{short_date, time_ago};

/// Number of captured species shown before the "View all" button
pub const GALLERY_PREVIEW: usize = 6;

/// Share of a target reached, capped at 100. A zero target reads as 0%.
pub fn progress_percent(count: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (f64::from(count) / f64::from(target) * 100.0).min(100.0)
}

/// Whole-number percentage label, e.g. "67%"
pub fn percent_label(percent: f64) -> String {
    format!("{:.0}%", percent)
}

/// Badge class for an IUCN-style conservation status
pub fn conservation_class(status: &str) -> &'static str {
    let status = status.to_lowercase();
    if status.contains("critically") {
        "conservation--critical"
    } else if status.contains("endangered") {
        "conservation--endangered"
    } else if status.contains("vulnerable") {
        "conservation--vulnerable"
    } else {
        "conservation--safe"
    }
}

/// Group digits with commas: 12345 becomes "12,345"
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Singular or plural noun for a count
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
