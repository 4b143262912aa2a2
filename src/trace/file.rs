use crate::trace::row::Reference;
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Parse a reference-string file into a trace.
///
/// Expected columns (whitespace-separated):
/// page  dirty
///
/// Example:
/// 734 1
pub fn read_trace_file(path: &Path) -> anyhow::Result<Vec<Reference>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read trace file {}", path.display()))?;

    let re = Regex::new(r"^\s*(\d+)\s+([01])\s*$")?;

    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;

        if line.trim().is_empty() {
            continue;
        }

        let caps = match re.captures(line) {
            Some(c) => c,
            None => {
                bail!(
                    "trace parse error at {}:{}: cannot parse line: {:?}",
                    path.display(),
                    lno,
                    line
                );
            }
        };

        let page: u32 = caps
            .get(1)
            .map(|m| m.as_str())
            .unwrap_or_default()
            .parse()
            .with_context(|| format!("bad page number at {}:{}", path.display(), lno))?;
        let dirty = caps.get(2).map(|m| m.as_str()) == Some("1");

        out.push(Reference { page, dirty });
    }

    Ok(out)
}

/// Write a trace as one `page dirty` pair per line.
pub fn write_trace_file(path: &Path, trace: &[Reference]) -> anyhow::Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("create trace file {}", path.display()))?;
    let mut w = std::io::BufWriter::new(file);

    for r in trace {
        writeln!(w, "{} {}", r.page, u8::from(r.dirty))?;
    }
    w.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_a_small_trace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.txt");

        let trace = vec![
            Reference { page: 1, dirty: false },
            Reference { page: 734, dirty: true },
            Reference { page: 1000, dirty: false },
        ];
        write_trace_file(&path, &trace).unwrap();

        assert_eq!(read_trace_file(&path).unwrap(), trace);
    }

    #[test]
    fn skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.txt");
        fs::write(&path, "1 0\n\n2 1\n").unwrap();

        let trace = read_trace_file(&path).unwrap();
        assert_eq!(trace.len(), 2);
        assert!(trace[1].dirty);
    }

    #[test]
    fn rejects_a_malformed_line_with_its_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.txt");
        fs::write(&path, "1 0\n2 notabit\n").unwrap();

        let err = read_trace_file(&path).unwrap_err().to_string();
        assert!(err.contains(":2"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_a_dirty_flag_outside_zero_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.txt");
        fs::write(&path, "1 2\n").unwrap();

        assert!(read_trace_file(&path).is_err());
    }

    #[test]
    fn missing_file_errors_with_the_path() {
        let err = read_trace_file(Path::new("no_such_trace.txt"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("no_such_trace.txt"));
    }
}
