//! Company name to company code resolution over the bulk code table.
//!
//! The disclosure source publishes every registered company as a `<list>`
//! record carrying `<corp_name>` and `<corp_code>` children, shipped either as
//! plain XML or as a ZIP archive containing `CORPCODE.xml`. Records are read
//! by a tag scan in table order; no schema validation is attempted. Names
//! decode the named XML entities and numeric character references.
//!
//! Matching is deliberately simple:
//! 1. exact, verbatim name equality (first occurrence wins);
//! 2. otherwise, the first name containing the query as a substring.
//!
//! There is no ranking, Unicode normalization or typo tolerance.

use std::io::{Cursor, Read};

use crate::{CompanyRecord, FinboardError};

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const CODE_TABLE_ENTRY: &str = "corpcode.xml";
const STAGE: &str = "code-table";

/// How a company name matched a code table record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The record name equals the query verbatim.
    Exact,
    /// The record name contains the query.
    Partial,
}

/// Outcome of resolving a company name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A record matched.
    Found {
        /// The matching record.
        record: CompanyRecord,
        /// Whether the match was exact or by substring.
        kind: MatchKind,
    },
    /// No record matched; a normal outcome, not a failure.
    NotFound,
}

impl Resolution {
    /// The matched record, if any.
    #[must_use]
    pub fn into_record(self) -> Option<CompanyRecord> {
        match self {
            Self::Found { record, .. } => Some(record),
            Self::NotFound => None,
        }
    }
}

/// Trim a user-supplied company name and reject empty input.
///
/// # Errors
/// Returns `InvalidArg` when the name is empty or whitespace only.
pub fn validate_company_name(raw: &str) -> Result<&str, FinboardError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FinboardError::InvalidArg(
            "company name must not be empty".to_string(),
        ));
    }
    Ok(name)
}

/// Decode a downloaded code table into text.
///
/// ZIP archives are unpacked and the `CORPCODE.xml` entry is returned; any
/// other payload is read as (lossy) UTF-8 text.
///
/// # Errors
/// Returns `Malformed` when the payload looks like a ZIP archive but cannot be
/// read or holds no code table entry.
pub fn decode_code_table(bytes: &[u8]) -> Result<String, FinboardError> {
    if bytes.starts_with(ZIP_MAGIC) {
        let xml = extract_code_table_entry(bytes)?;
        return Ok(String::from_utf8_lossy(&xml).into_owned());
    }
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

fn extract_code_table_entry(bytes: &[u8]) -> Result<Vec<u8>, FinboardError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| FinboardError::malformed(STAGE, format!("unreadable archive: {e}")))?;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| FinboardError::malformed(STAGE, format!("unreadable entry: {e}")))?;
        if entry.name().to_ascii_lowercase().ends_with(CODE_TABLE_ENTRY) {
            let mut buf = Vec::new();
            entry
                .read_to_end(&mut buf)
                .map_err(|e| FinboardError::malformed(STAGE, format!("truncated entry: {e}")))?;
            return Ok(buf);
        }
    }
    Err(FinboardError::malformed(
        STAGE,
        "archive holds no CORPCODE.xml entry",
    ))
}

/// Read every `<list>` record of a code table, in table order.
///
/// Records missing a name or a non-empty code are skipped.
#[must_use]
pub fn parse_code_table(text: &str) -> Vec<CompanyRecord> {
    const OPEN: &str = "<list>";
    const CLOSE: &str = "</list>";

    let mut out = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find(OPEN) {
        let body_start = start + OPEN.len();
        let Some(len) = rest[body_start..].find(CLOSE) else {
            break;
        };
        let body = &rest[body_start..body_start + len];
        if let (Some(name), Some(code)) = (element_text(body, "corp_name"), element_text(body, "corp_code")) {
            let code = code.trim();
            if !code.is_empty() {
                out.push(CompanyRecord::new(unescape(name.trim()), code));
            }
        }
        rest = &rest[body_start + len + CLOSE.len()..];
    }
    out
}

fn element_text<'a>(body: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = body.find(&open)? + open.len();
    let end = body[start..].find(&close)? + start;
    Some(&body[start..end])
}

fn unescape(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            // Not a reference: keep the ampersand literally.
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Named XML entities plus decimal (`&#39;`) and hex (`&#x26;`) references.
fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "amp" => Some('&'),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render records back into the code table XML layout.
///
/// Used by offline fixtures and tests to produce payloads the resolver reads.
#[must_use]
pub fn render_code_table(records: &[CompanyRecord]) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<result>\n");
    for r in records {
        out.push_str("<list>\n");
        out.push_str(&format!("<corp_code>{}</corp_code>\n", escape(r.code.as_str())));
        out.push_str(&format!("<corp_name>{}</corp_name>\n", escape(&r.name)));
        out.push_str("</list>\n");
    }
    out.push_str("</result>\n");
    out
}

/// Match a trimmed company name against already parsed records.
#[must_use]
pub fn resolve_in(company_name: &str, records: &[CompanyRecord]) -> Resolution {
    if let Some(record) = records.iter().find(|r| r.name == company_name) {
        return Resolution::Found {
            record: record.clone(),
            kind: MatchKind::Exact,
        };
    }
    if let Some(record) = records.iter().find(|r| r.name.contains(company_name)) {
        return Resolution::Found {
            record: record.clone(),
            kind: MatchKind::Partial,
        };
    }
    Resolution::NotFound
}

/// Resolve a company name against a downloaded code table.
///
/// `company_name` is expected to be validated with [`validate_company_name`].
///
/// # Errors
/// - `InvalidArg` for an empty name (it would substring-match every record).
/// - `Malformed` when the payload cannot be decoded or holds no records.
pub fn resolve(company_name: &str, code_table: &[u8]) -> Result<Resolution, FinboardError> {
    if company_name.is_empty() {
        return Err(FinboardError::InvalidArg(
            "company name must not be empty".to_string(),
        ));
    }
    let text = decode_code_table(code_table)?;
    let records = parse_code_table(&text);
    if records.is_empty() {
        return Err(FinboardError::malformed(
            STAGE,
            "no company records in code table",
        ));
    }
    let resolution = resolve_in(company_name, &records);

    #[cfg(feature = "tracing")]
    match &resolution {
        Resolution::Found { record, kind } => tracing::info!(
            query = company_name,
            name = %record.name,
            code = %record.code,
            kind = ?kind,
            "resolved company code"
        ),
        Resolution::NotFound => {
            tracing::info!(query = company_name, records = records.len(), "no company matched");
        }
    }

    Ok(resolution)
}

/// List up to `limit` company names containing `query`, ignoring case, in table order.
///
/// # Errors
/// Returns `InvalidArg` for an empty query and `Malformed` for an undecodable table.
pub fn search_names(
    code_table: &[u8],
    query: &str,
    limit: usize,
) -> Result<Vec<String>, FinboardError> {
    let q = validate_company_name(query)?.to_lowercase();
    let text = decode_code_table(code_table)?;
    Ok(parse_code_table(&text)
        .into_iter()
        .filter(|r| r.name.to_lowercase().contains(&q))
        .map(|r| r.name)
        .take(limit)
        .collect())
}
