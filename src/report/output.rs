use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::types::FleetReport;
use crate::error::{FleetError, FleetResult};

const INDENT: &[u8] = b"    ";

/// Renders the report as 4-space indented JSON, without a trailing newline.
pub fn to_json(report: &FleetReport) -> FleetResult<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    report
        .serialize(&mut ser)
        .map_err(|e| FleetError::Output(e.into()))?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the report followed by a newline and flushes `out`.
pub fn write_report<W: Write>(report: &FleetReport, out: &mut W) -> FleetResult<()> {
    let json = to_json(report)?;
    writeln!(out, "{}", json).map_err(FleetError::Output)?;
    out.flush().map_err(FleetError::Output)
}
