use std::fmt::Display;
use std::io::{self, Write};

/// Separator written between runs.
pub const RULE: &str = "________________________________________________________________________________";

/// Write comma separated values, breaking the line after every
/// `per_line` values. A line break keeps the trailing comma.
pub fn write_values<W, T, I>(
    out: &mut W,
    values: I,
    per_line: usize,
) -> io::Result<()>
where
    W: Write,
    T: Display,
    I: IntoIterator<Item = T>,
{
    let mut values = values.into_iter().peekable();
    let mut i = 0;
    while let Some(value) = values.next() {
        i += 1;
        if values.peek().is_none() {
            write!(out, "{}", value)?;
        } else if per_line > 0 && i % per_line == 0 {
            writeln!(out, "{},", value)?;
        } else {
            write!(out, "{},", value)?;
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::write_values;

    fn to_string(values: &[u32], per_line: usize) -> String {
        let mut out = Vec::new();
        write_values(&mut out, values, per_line).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_values() {
        assert_eq!(to_string(&[], 3), "\n");
        assert_eq!(to_string(&[1], 3), "1\n");
        assert_eq!(to_string(&[1, 2, 3], 3), "1,2,3\n");
        assert_eq!(to_string(&[1, 2, 3, 4], 3), "1,2,3,\n4\n");
        assert_eq!(to_string(&[1, 2, 3, 4], 0), "1,2,3,4\n");
    }
}
