use crate::Point;
use anyhow::Context;
use std::io::BufRead;
use std::path::Path;

/// One point per line, comma or whitespace separated.
/// Blank lines and `#` comments are skipped.
pub fn points<R: BufRead>(reader: R) -> anyhow::Result<Vec<Point>> {
    reader
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line))
        .filter(|(_, line)| match line {
            Ok(line) => !(line.trim().is_empty() || line.trim_start().starts_with('#')),
            Err(_) => true,
        })
        .map(|(n, line)| {
            let line = line.with_context(|| format!("read line {}", n))?;
            Point::try_from(line.as_str()).with_context(|| format!("parse line {}", n))
        })
        .collect()
}

pub fn read(path: &Path) -> anyhow::Result<Vec<Point>> {
    let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    points(std::io::BufReader::new(file)).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blanks_and_comments() {
        let text = "# centers\n0,0\n\n10 10\n  # trailing\n20,20\n";
        let parsed = points(text.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1], Point::from([10., 10.]));
    }
    #[test]
    fn reports_bad_line() {
        let e = points("1,1\n1,oops\n".as_bytes()).unwrap_err();
        assert!(format!("{:#}", e).contains("line 2"));
    }
}
