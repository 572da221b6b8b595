use crate::model::{StaffId, StaffMember, Task, TaskId};
use crate::scheduler::RosterError;
use anyhow::Context;
use chrono::{Days, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Entrée de configuration validée pour une génération.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub staff: Vec<StaffMember>,
    pub tasks: Vec<Task>,
    pub start_date: NaiveDate,
    pub weeks: u32,
}

/// Forme JSON reconnue : `{staff, tasks, startDate, weeks}`, rien d'autre.
///
/// Champs gardés en `Value` : chaque erreur de type est rattachée à son champ.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    staff: Value,
    #[serde(default)]
    tasks: Value,
    #[serde(default)]
    start_date: Value,
    #[serde(default)]
    weeks: Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StaffEntry {
    Name(String),
    Detailed { id: String, name: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaskEntry {
    Name(String),
    Detailed {
        id: String,
        name: String,
        #[serde(default)]
        weekends: bool,
    },
}

impl RosterConfig {
    /// Construit une config à partir de simples noms (identifiants positionnels).
    pub fn from_names<S: AsRef<str>, T: AsRef<str>>(
        staff: &[S],
        tasks: &[T],
        start_date: &str,
        weeks: i64,
    ) -> Result<Self, RosterError> {
        let staff = staff
            .iter()
            .enumerate()
            .map(|(i, name)| StaffMember {
                id: StaffId::positional(i),
                name: name.as_ref().trim().to_string(),
            })
            .collect();
        let tasks = tasks
            .iter()
            .enumerate()
            .map(|(i, name)| Task {
                id: TaskId::positional(i),
                name: name.as_ref().trim().to_string(),
                weekends: false,
            })
            .collect();
        let config = Self {
            staff,
            tasks,
            start_date: parse_start_date(start_date)?,
            weeks: parse_weeks(weeks)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RosterError> {
        let raw: RawConfig = serde_json::from_str(raw)
            .map_err(|err| RosterError::invalid("config", err.to_string()))?;

        let staff: Vec<StaffEntry> = field("staff", raw.staff)?;
        let tasks: Vec<TaskEntry> = field("tasks", raw.tasks)?;
        let start_date: String = field("startDate", raw.start_date)?;
        let weeks: i64 = field("weeks", raw.weeks)?;

        let staff = staff
            .into_iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                StaffEntry::Name(name) => StaffMember {
                    id: StaffId::positional(i),
                    name: name.trim().to_string(),
                },
                StaffEntry::Detailed { id, name } => StaffMember {
                    id: StaffId::new(id.trim()),
                    name: name.trim().to_string(),
                },
            })
            .collect();
        let tasks = tasks
            .into_iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                TaskEntry::Name(name) => Task {
                    id: TaskId::positional(i),
                    name: name.trim().to_string(),
                    weekends: false,
                },
                TaskEntry::Detailed { id, name, weekends } => Task {
                    id: TaskId::new(id.trim()),
                    name: name.trim().to_string(),
                    weekends,
                },
            })
            .collect();

        let config = Self {
            staff,
            tasks,
            start_date: parse_start_date(&start_date)?,
            weeks: parse_weeks(weeks)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Vérifie les invariants d'entrée. Appelé aussi par `generate`.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.staff.is_empty() {
            return Err(RosterError::invalid("staff", "must contain at least one member"));
        }
        if self.tasks.is_empty() {
            return Err(RosterError::invalid("tasks", "must contain at least one task"));
        }
        if self.weeks == 0 {
            return Err(RosterError::invalid("weeks", "must be a positive integer"));
        }
        // dernière date atteignable par chrono, vérifiée avant toute génération
        if self
            .start_date
            .checked_add_days(Days::new(u64::from(self.weeks) * 7 - 1))
            .is_none()
        {
            return Err(RosterError::invalid("weeks", "date range overflows the calendar"));
        }

        let mut seen = HashSet::new();
        for member in &self.staff {
            if member.id.as_str().is_empty() {
                return Err(RosterError::invalid("staff", "identifier cannot be empty"));
            }
            if member.name.trim().is_empty() {
                return Err(RosterError::invalid(
                    "staff",
                    format!("name cannot be empty (id {})", member.id.as_str()),
                ));
            }
            if !seen.insert(member.id.as_str()) {
                return Err(RosterError::invalid(
                    "staff",
                    format!("duplicate identifier {}", member.id.as_str()),
                ));
            }
        }

        let mut seen = HashSet::new();
        for task in &self.tasks {
            if task.id.as_str().is_empty() {
                return Err(RosterError::invalid("tasks", "identifier cannot be empty"));
            }
            if task.name.trim().is_empty() {
                return Err(RosterError::invalid(
                    "tasks",
                    format!("name cannot be empty (id {})", task.id.as_str()),
                ));
            }
            if !seen.insert(task.id.as_str()) {
                return Err(RosterError::invalid(
                    "tasks",
                    format!("duplicate identifier {}", task.id.as_str()),
                ));
            }
        }
        Ok(())
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<RosterConfig> {
    let path = path.as_ref();
    let data =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config = RosterConfig::from_json_str(&data)
        .with_context(|| format!("loading config {}", path.display()))?;
    Ok(config)
}

fn field<T: DeserializeOwned>(name: &'static str, value: Value) -> Result<T, RosterError> {
    if value.is_null() {
        return Err(RosterError::invalid(name, "missing field"));
    }
    serde_json::from_value(value).map_err(|err| RosterError::invalid(name, err.to_string()))
}

fn parse_start_date(raw: &str) -> Result<NaiveDate, RosterError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| RosterError::invalid("startDate", format!("{raw:?}: {err}")))
}

fn parse_weeks(raw: i64) -> Result<u32, RosterError> {
    match u32::try_from(raw) {
        Ok(weeks) if weeks > 0 => Ok(weeks),
        _ => Err(RosterError::invalid("weeks", format!("{raw} is not a positive integer"))),
    }
}
