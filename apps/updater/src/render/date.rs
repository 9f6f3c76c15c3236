use chrono::Month;

use crate::models::DateSpec;

pub const PRESENT: &str = "Present";

/// Formats a partial date for display.
///
/// - absent or `year <= 0` → `"Present"`
/// - `include_month` with a valid month → `"Mar 2020"`
/// - otherwise → `"2020"`
///
/// Total: an out-of-range month degrades to the year-only form.
pub fn format_date(spec: Option<&DateSpec>, include_month: bool) -> String {
    let Some(spec) = spec.filter(|s| s.is_known()) else {
        return PRESENT.to_string();
    };

    if include_month {
        if let Some(abbrev) = spec.month.and_then(month_abbrev) {
            return format!("{abbrev} {}", spec.year);
        }
    }
    spec.year.to_string()
}

fn month_abbrev(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    let name = Month::try_from(month).ok()?.name();
    Some(&name[..3])
}
