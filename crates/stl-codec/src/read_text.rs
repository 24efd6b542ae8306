//! ASCII STL reader.
//!
//! ```text
//! file      := solid+
//! solid     := "solid" name? facet* "endsolid" name?
//! facet     := "facet" "normal" float float float
//!              "outer" "loop"
//!              "vertex" float float float   (exactly 3 times)
//!              "endloop"
//!              "endfacet"
//! ```
//!
//! Keywords match case-insensitively and tokens may be split across lines
//! freely. A solid's name is whatever follows `solid` on the same line.
//! Any grammar violation fails the whole parse.

use mesh_types::{Solid, Triangle};
use tracing::{debug, instrument};

use crate::errors::StlError;

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    line: usize,
}

impl Token<'_> {
    fn is(&self, keyword: &str) -> bool {
        self.text.eq_ignore_ascii_case(keyword)
    }
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    last_line: usize,
}

/// Parse every `solid … endsolid` block in `text`.
#[instrument(skip(text), fields(len = text.len()))]
pub fn read_text(text: &str) -> Result<Vec<Solid>, StlError> {
    let mut parser = Parser::new(text);
    let mut solids = Vec::new();
    loop {
        solids.push(parser.solid()?);
        if parser.peek().is_none() {
            break;
        }
    }
    debug!(
        solids = solids.len(),
        triangles = solids.iter().map(Solid::triangle_count).sum::<usize>(),
        "ASCII STL read"
    );
    Ok(solids)
}

/// Lines ended by `\n`, `\r\n` or a lone `\r`.
fn split_lines<'a>(text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(|c: char| c == '\n' || c == '\r') else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + skip..];
        Some(line)
    })
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        let mut tokens = Vec::new();
        let mut last_line = 1;
        for (i, line) in split_lines(text).enumerate() {
            last_line = i + 1;
            tokens.extend(line.split_whitespace().map(|text| Token {
                text,
                line: i + 1,
            }));
        }
        Self {
            tokens,
            pos: 0,
            last_line,
        }
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let tok = self.peek()?;
        self.pos += 1;
        Some(tok)
    }

    fn at(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|t| t.is(keyword))
    }

    /// Error located at the next token, or at the last line on end of input.
    fn error(&self, message: impl Into<String>) -> StlError {
        let line = self.peek().map_or(self.last_line, |t| t.line);
        StlError::parse(line, message)
    }

    fn found(&self) -> String {
        match self.peek() {
            Some(t) => format!("'{}'", t.text),
            None => "end of input".to_string(),
        }
    }

    fn expect(&mut self, keyword: &str) -> Result<Token<'a>, StlError> {
        match self.peek() {
            Some(t) if t.is(keyword) => {
                self.pos += 1;
                Ok(t)
            }
            _ => Err(self.error(format!("expected '{}', found {}", keyword, self.found()))),
        }
    }

    fn float(&mut self, what: &str) -> Result<f64, StlError> {
        let Some(tok) = self.peek() else {
            return Err(self.error(format!("expected {} coordinate, found end of input", what)));
        };
        let value = tok
            .text
            .parse::<f64>()
            .map_err(|_| StlError::parse(tok.line, format!("invalid {} coordinate '{}'", what, tok.text)))?;
        self.pos += 1;
        Ok(value)
    }

    fn vec3(&mut self, what: &str) -> Result<[f64; 3], StlError> {
        Ok([self.float(what)?, self.float(what)?, self.float(what)?])
    }

    fn solid(&mut self) -> Result<Solid, StlError> {
        let start = self.expect("solid")?;

        let mut name_parts = Vec::new();
        while let Some(tok) = self.peek() {
            if tok.line != start.line || tok.is("facet") || tok.is("endsolid") {
                break;
            }
            name_parts.push(tok.text);
            self.pos += 1;
        }
        let name = (!name_parts.is_empty()).then(|| name_parts.join(" "));
        let mut solid = Solid::new(name);

        loop {
            match self.peek() {
                Some(t) if t.is("facet") => solid.triangles.push(self.facet()?),
                Some(t) if t.is("endsolid") => {
                    self.pos += 1;
                    // Trailing name on the endsolid line is not checked.
                    while self.peek().is_some_and(|n| n.line == t.line && !n.is("solid")) {
                        self.pos += 1;
                    }
                    return Ok(solid);
                }
                Some(_) => {
                    return Err(self.error(format!(
                        "expected 'facet' or 'endsolid', found {}",
                        self.found()
                    )))
                }
                None => {
                    return Err(self.error(format!(
                        "unterminated solid starting at line {}, expected 'endsolid'",
                        start.line
                    )))
                }
            }
        }
    }

    fn facet(&mut self) -> Result<Triangle, StlError> {
        let start = self.expect("facet")?;
        self.expect("normal")?;
        let normal = self.vec3("normal")?;
        self.expect("outer")?;
        self.expect("loop")?;

        let mut vertices = [[0.0; 3]; 3];
        let mut count = 0;
        while self.at("vertex") {
            if count == 3 {
                return Err(self.error(format!(
                    "facet starting at line {} has more than 3 vertices",
                    start.line
                )));
            }
            self.bump();
            vertices[count] = self.vec3("vertex")?;
            count += 1;
        }
        if count != 3 {
            return Err(self.error(format!(
                "facet starting at line {} has {} vertices, expected 3",
                start.line, count
            )));
        }

        self.expect("endloop")?;
        self.expect("endfacet")?;
        Ok(Triangle {
            vertices,
            normal: Some(normal),
            attribute: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_FACET: &str = "solid tri
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid tri
";

    #[test]
    fn parses_single_facet() {
        let solids = read_text(ONE_FACET).unwrap();
        assert_eq!(solids.len(), 1);
        assert_eq!(solids[0].name.as_deref(), Some("tri"));
        let tri = solids[0].triangles[0];
        assert_eq!(tri.normal, Some([0.0, 0.0, 1.0]));
        assert_eq!(tri.vertices, [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(tri.attribute, None);
    }

    #[test]
    fn keywords_are_case_insensitive_and_layout_free() {
        let text = "SOLID\nFacet Normal 0 0 1 OUTER LOOP\n\n  Vertex 0 0 0 VERTEX 1e0 0 0\nvertex 0 1.0E0 -0\nEndLoop EndFacet\nENDSOLID";
        let solids = read_text(text).unwrap();
        assert_eq!(solids[0].name, None);
        assert_eq!(solids[0].triangles[0].vertices[1], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn multiple_solids_keep_their_names() {
        let text = format!("{}\nsolid second part\nendsolid second part\n{}", ONE_FACET, ONE_FACET);
        let solids = read_text(&text).unwrap();
        assert_eq!(solids.len(), 3);
        assert_eq!(solids[1].name.as_deref(), Some("second part"));
        assert!(solids[1].is_empty());
        assert_eq!(solids[2].triangle_count(), 1);
    }

    #[test]
    fn two_vertex_facet_is_rejected() {
        let text = ONE_FACET.replace("      vertex 0 1 0\n", "");
        let err = read_text(&text).unwrap_err();
        match err {
            StlError::ParseError { line, message } => {
                assert_eq!(line, 6);
                assert!(message.contains("2 vertices"), "{}", message);
            }
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn four_vertex_facet_is_rejected() {
        let text = ONE_FACET.replace("vertex 0 1 0", "vertex 0 1 0\nvertex 1 1 0");
        assert!(matches!(read_text(&text), Err(StlError::ParseError { line: 7, .. })));
    }

    #[test]
    fn missing_endfacet_is_rejected() {
        let text = ONE_FACET.replace("  endfacet\n", "");
        assert!(matches!(read_text(&text), Err(StlError::ParseError { line: 8, .. })));
    }

    #[test]
    fn unterminated_solid_is_rejected() {
        let text = ONE_FACET.replace("endsolid tri\n", "");
        let err = read_text(&text).unwrap_err();
        assert!(err.to_string().contains("endsolid"), "{}", err);
    }

    #[test]
    fn bad_number_is_rejected() {
        let text = ONE_FACET.replace("vertex 1 0 0", "vertex 1 zero 0");
        assert!(matches!(read_text(&text), Err(StlError::ParseError { line: 5, .. })));
    }

    #[test]
    fn carriage_return_line_endings_count_lines() {
        let text = ONE_FACET.replace('\n', "\r").replace("      vertex 0 1 0\r", "");
        let err = read_text(&text).unwrap_err();
        assert!(matches!(err, StlError::ParseError { line: 6, .. }), "{:?}", err);

        let solids = read_text(&ONE_FACET.replace('\n', "\r")).unwrap();
        assert_eq!(solids[0].name.as_deref(), Some("tri"));
    }

    #[test]
    fn crlf_line_endings_count_lines() {
        let text = ONE_FACET.replace('\n', "\r\n").replace("vertex 1 0 0", "vertex 1 zero 0");
        assert!(matches!(read_text(&text), Err(StlError::ParseError { line: 5, .. })));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(read_text("  \n\n"), Err(StlError::ParseError { .. })));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        let text = format!("{}garbage\n", ONE_FACET);
        assert!(matches!(read_text(&text), Err(StlError::ParseError { line: 10, .. })));
    }
}
