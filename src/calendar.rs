//! Export calendrier : un événement « journée entière » par affectation.

use crate::model::{Assignments, RosterTable, ShiftAssignment};
use anyhow::Context;
use chrono::{DateTime, Days, NaiveDate, Utc};
use icalendar::{Calendar, Component, Property, ValueType};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Événement journée entière, sans règle de récurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    pub date: NaiveDate,
    pub title: String,
}

impl From<&ShiftAssignment> for CalendarEvent {
    fn from(a: &ShiftAssignment) -> Self {
        // UID stable : une même affectation garde le même UID d'une génération à l'autre
        let key = format!(
            "{}/{}/{}",
            a.date.format("%Y-%m-%d"),
            a.task_id.as_str(),
            a.staff_id.as_str()
        );
        Self {
            uid: format!("{}@rota", Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())),
            date: a.date,
            title: format!("{}: {}", a.task, a.staff),
        }
    }
}

/// Séquence paresseuse, finie et redémarrable (`Clone`) des événements.
#[derive(Clone)]
pub struct CalendarEvents<'a> {
    inner: Assignments<'a>,
}

impl Iterator for CalendarEvents<'_> {
    type Item = CalendarEvent;

    fn next(&mut self) -> Option<CalendarEvent> {
        self.inner.next().map(CalendarEvent::from)
    }
}

pub fn to_calendar_events(table: &RosterTable) -> CalendarEvents<'_> {
    CalendarEvents {
        inner: table.assignments(),
    }
}

/// Rend un document VCALENDAR. `stamp` alimente DTSTAMP (aucune lecture d'horloge ici).
pub fn render_ics<I>(events: I, stamp: DateTime<Utc>) -> anyhow::Result<String>
where
    I: IntoIterator<Item = CalendarEvent>,
{
    let dtstamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();
    let mut cal = Calendar::new();

    for event in events {
        let end = event
            .date
            .checked_add_days(Days::new(1))
            .with_context(|| format!("no day after {}", event.date))?;

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid);
        ics_event.summary(&event.title);
        ics_event.add_property("DTSTAMP", &dtstamp);
        // DTEND exclusif : le lendemain
        append_date_property(&mut ics_event, "DTSTART", event.date);
        append_date_property(&mut ics_event, "DTEND", end);
        cal.push(ics_event.done());
    }

    Ok(cal.done().to_string())
}

fn append_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Export `.ics` du planning vers un fichier.
pub fn export_ics<P: AsRef<Path>>(
    path: P,
    table: &RosterTable,
    stamp: DateTime<Utc>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let ics = render_ics(to_calendar_events(table), stamp)?;
    fs::write(path, ics).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
