use crate::model::{Assignments, RosterTable, ShiftAssignment};
use anyhow::Context;
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ligne tabulaire : header `date,task,staff`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub date: NaiveDate,
    pub task: String,
    pub staff: String,
}

impl From<&ShiftAssignment> for Row {
    fn from(a: &ShiftAssignment) -> Self {
        Self {
            date: a.date,
            task: a.task.clone(),
            staff: a.staff.clone(),
        }
    }
}

/// Itérateur paresseux des lignes, par date croissante puis ordre des tâches.
///
/// `Clone` pour repartir du début sans recalculer le planning.
#[derive(Clone)]
pub struct Rows<'a> {
    inner: Assignments<'a>,
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.inner.next().map(Row::from)
    }
}

pub fn to_rows(table: &RosterTable) -> Rows<'_> {
    Rows {
        inner: table.assignments(),
    }
}

/// Écrit les lignes en CSV (avec header) dans n'importe quel `Write`.
pub fn write_rows_csv<W: std::io::Write, I: IntoIterator<Item = Row>>(
    writer: W,
    rows: I,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(["date", "task", "staff"])?;
    for row in rows {
        let date = row.date.format("%Y-%m-%d").to_string();
        w.write_record([date.as_str(), row.task.as_str(), row.staff.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Relit un CSV `date,task,staff` ; l'ordre des lignes est conservé.
pub fn read_rows_csv<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut out = Vec::new();
    for (line, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec.with_context(|| format!("invalid row {}", line + 1))?;
        out.push(row);
    }
    Ok(out)
}

/// Export CSV du planning vers un fichier.
pub fn export_rows_csv<P: AsRef<Path>>(path: P, table: &RosterTable) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_rows_csv(file, to_rows(table))
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_table_json<P: AsRef<Path>>(path: P, table: &RosterTable) -> anyhow::Result<()> {
    let path = path.as_ref();
    let s = serde_json::to_string_pretty(table)?;
    fs::write(path, s).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
