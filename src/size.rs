const UNIT: u64 = 1_024;
const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Binary-prefix size string: `"512 B"`, `"2.0 KiB"`, `"1.5 MiB"`.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let (divisor, exp) = unit_for(bytes);
    format!(
        "{:.1} {}iB",
        bytes as f64 / divisor as f64,
        PREFIXES[exp]
    )
}

// Divisor and index into PREFIXES. u64::MAX is below 1024^7, so the
// index never exceeds 5 (E).
fn unit_for(bytes: u64) -> (u64, usize) {
    let mut divisor = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        divisor *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    (divisor, exp)
}
