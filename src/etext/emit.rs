use std::io::Write;

/// Join a paragraph's lines with single spaces.
pub fn reflow(paragraph: &str) -> String {
    paragraph.replace('\n', " ")
}

/// Reflow each paragraph and drop the ones that come out empty.
pub fn lines<'a, I>(paragraphs: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    paragraphs
        .into_iter()
        .map(|p| reflow(p))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Write one line per entry, in order.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflow_joins_lines() {
        assert_eq!(reflow("Paragraph one\nline two."), "Paragraph one line two.");
        assert_eq!(reflow("single"), "single");
    }

    #[test]
    fn test_lines_skip_empty() {
        let paras = vec!["a\nb".to_string(), String::new(), "c".to_string()];
        let out = lines(&paras);
        assert_eq!(out, vec!["a b", "c"]);
        assert!(out.iter().all(|l| !l.contains('\n')));
    }

    #[test]
    fn test_write_lines() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &["one".to_string(), "two".to_string()]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_write_nothing() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
