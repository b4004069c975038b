use crate::search::ResultRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

const NO_DOMAIN: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Txt,
    Json,
    All,
}

impl OutputMode {
    fn writes_txt(self) -> bool {
        matches!(self, OutputMode::Txt | OutputMode::All)
    }

    fn writes_json(self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::All)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(OutputMode::Txt),
            "json" => Ok(OutputMode::Json),
            "all" => Ok(OutputMode::All),
            other => Err(format!("unknown output format `{}`", other)),
        }
    }
}

#[derive(Serialize, Debug)]
struct JsonRecord<'a> {
    ip: &'a str,
    port: u16,
    domain: &'a str,
    time: &'a str,
}

impl<'a> From<&'a ResultRecord> for JsonRecord<'a> {
    fn from(record: &'a ResultRecord) -> Self {
        Self {
            ip: &record.ip,
            port: record.port,
            domain: record.domain().unwrap_or(NO_DOMAIN),
            time: &record.time,
        }
    }
}

/// `<ip>:<port> <domain>:<port>|None <time>`, without a trailing newline.
pub fn format_record(record: &ResultRecord) -> String {
    let domain = match record.domain() {
        Some(domain) => format!("{}:{}", domain, record.port),
        None => NO_DOMAIN.to_string(),
    };

    format!("{}:{} {} {}", record.ip, record.port, domain, record.time)
}

pub fn render_console(results: &[ResultRecord]) {
    results
        .iter()
        .for_each(|record| println!("{}", format_record(record)));
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

pub fn render_text_file(results: &[ResultRecord], path: &Path) -> Result<()> {
    let mut writer = create(path)?;
    for record in results {
        writeln!(writer, "{}", format_record(record))?;
    }
    writer.flush()?;

    log::debug!("Wrote {} records to {}", results.len(), path.display());
    Ok(())
}

pub fn render_json_file(results: &[ResultRecord], path: &Path) -> Result<()> {
    let records = results.iter().map(JsonRecord::from).collect::<Vec<_>>();

    let mut writer = create(path)?;
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    records.serialize(&mut serializer)?;
    writer.flush()?;

    log::debug!("Wrote {} records to {}", results.len(), path.display());
    Ok(())
}

/// Turns a query into a file name: each colon with its trailing spaces, and
/// each run of spaces, becomes one underscore.
pub fn derive_output_path(query: &str, extension: &str) -> PathBuf {
    let mut name = String::with_capacity(query.len() + extension.len() + 1);
    let mut chars = query.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' || c == ' ' {
            name.push('_');
            while chars.next_if_eq(&' ').is_some() {}
        } else {
            name.push(c);
        }
    }

    name.push('.');
    name.push_str(extension);
    PathBuf::from(name)
}

/// Writes the files selected by `mode`. An explicit `file` replaces the
/// derived name; with [`OutputMode::All`] its extension is swapped per format.
pub fn write_outputs(
    results: &[ResultRecord],
    mode: OutputMode,
    query: &str,
    file: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let target = |extension: &str| match file {
        Some(file) if mode == OutputMode::All => file.with_extension(extension),
        Some(file) => file.to_path_buf(),
        None => derive_output_path(query, extension),
    };

    let mut written = Vec::new();

    if mode.writes_txt() {
        let path = target("txt");
        render_text_file(results, &path)?;
        written.push(path);
    }

    if mode.writes_json() {
        let path = target("json");
        render_json_file(results, &path)?;
        written.push(path);
    }

    Ok(written)
}
