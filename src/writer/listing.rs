//! `--list-sources` output: one JSON object per scanned root.

use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub struct Listing {
    pub root: String,
    pub files: Vec<String>,
}

pub fn emit<W: Write>(listings: &[Listing], mut out: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, listings)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_json() {
        let listings = vec![Listing {
            root: "src".into(),
            files: vec!["src/a.cpp".into(), "src/b.h".into()],
        }];
        let mut buf = Vec::new();
        emit(&listings, &mut buf).expect("emit");

        let parsed: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(parsed[0]["root"], "src");
        assert_eq!(parsed[0]["files"][1], "src/b.h");
    }
}
