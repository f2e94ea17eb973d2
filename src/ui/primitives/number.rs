//! Number formatting for size reports.

/// `12345` -> `"12,345"`
pub fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Signed variant of [`grouped`]; negative values keep their sign.
pub fn grouped_signed(n: i64) -> String {
    if n < 0 {
        format!("-{}", grouped(n.unsigned_abs()))
    } else {
        grouped(n.unsigned_abs())
    }
}

/// Savings percentage as shown next to a file: `-74%` when the artifact is
/// smaller (or `-0%` for an empty source), `+3%` when it grew. Halves round
/// to even, so 12.5 shows as `-12%`.
pub fn savings_percent(percent: f64) -> String {
    let rounded = percent.round_ties_even() as i64;
    if rounded >= 0 {
        format!("-{}%", rounded)
    } else {
        format!("+{}%", -rounded)
    }
}
