// Modified: 2025-09-20

//! Reading the two JSON inputs spec.md §6 defines: the findings array and
//! the run-context object. Either may be read from a file path or from
//! stdin (path `-`), mirroring how the teacher's report commands accept
//! either a file or piped input.

use std::fs;
use std::io::Read as _;
use std::path::Path;

use sync_core::{Error, RawFinding, Result, RunContext};

fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(Error::from)?;
        Ok(buf)
    } else {
        fs::read_to_string(Path::new(path)).map_err(Error::from)
    }
}

pub fn read_findings(path: &str) -> Result<Vec<RawFinding>> {
    let raw = read_source(path)?;
    serde_json::from_str(&raw).map_err(|e| Error::input(format!("malformed findings JSON: {e}")))
}

pub fn read_run_context(path: &str) -> Result<RunContext> {
    let raw = read_source(path)?;
    serde_json::from_str(&raw).map_err(|e| Error::input(format!("malformed run-context JSON: {e}")))
}
