#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use rota::{generate, RosterConfig, RosterError, StaffMember, Task};
use std::collections::{HashMap, HashSet};

const STAFF: [&str; 4] = ["Brandon", "Ying Xian", "Derlinder", "Fadzlynn"];
const TASKS: [&str; 4] = ["EFT", "IPT+SKG", "NC", "FSG+WI"];

fn team_config(weeks: i64) -> RosterConfig {
    RosterConfig::from_names(&STAFF, &TASKS, "2026-01-05", weeks).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn one_week_team_example() {
    let table = generate(&team_config(1)).unwrap();

    assert_eq!(table.len(), 20);
    assert_eq!(table.dates().count(), 5);

    let mut per_staff: HashMap<&str, usize> = HashMap::new();
    for a in table.assignments() {
        *per_staff.entry(a.staff.as_str()).or_default() += 1;
    }
    for name in STAFF {
        assert_eq!(per_staff[name], 5, "{name}");
    }

    let monday = table.day(date(2026, 1, 5)).unwrap();
    let names: Vec<_> = monday.iter().map(|a| (a.task.as_str(), a.staff.as_str())).collect();
    assert_eq!(
        names,
        vec![
            ("EFT", "Brandon"),
            ("IPT+SKG", "Ying Xian"),
            ("NC", "Derlinder"),
            ("FSG+WI", "Fadzlynn"),
        ]
    );

    let tuesday = table.day(date(2026, 1, 6)).unwrap();
    assert_eq!(tuesday[0].staff, "Ying Xian");
    assert_eq!(tuesday[3].staff, "Brandon");
}

#[test]
fn generation_is_deterministic() {
    let config = team_config(6);
    assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
}

#[test]
fn nobody_is_double_booked() {
    let config = RosterConfig::from_names(&["A", "B", "C", "D", "E"], &["X", "Y", "Z"], "2026-03-02", 8)
        .unwrap();
    let table = generate(&config).unwrap();
    for (day, assignments) in table.days() {
        let mut seen = HashSet::new();
        for a in assignments {
            assert!(seen.insert(a.staff_id.clone()), "{} booked twice on {day}", a.staff);
        }
    }
}

#[test]
fn weekends_are_empty_by_default() {
    let table = generate(&team_config(3)).unwrap();
    assert_eq!(table.dates().count(), 15);
    for day in table.dates() {
        assert!(!matches!(day.weekday(), Weekday::Sat | Weekday::Sun), "{day}");
    }
}

#[test]
fn start_on_saturday_skips_to_monday() {
    let config = RosterConfig::from_names(&STAFF, &TASKS, "2026-01-10", 1).unwrap();
    let table = generate(&config).unwrap();
    assert_eq!(table.len(), 20);
    assert_eq!(table.dates().next(), Some(date(2026, 1, 12)));
    assert_eq!(table.dates().last(), Some(date(2026, 1, 16)));
}

#[test]
fn every_member_rotates_through_every_task() {
    let staff = ["A", "B", "C"];
    let tasks = ["ward", "clinic"];
    let config = RosterConfig::from_names(&staff, &tasks, "2026-01-05", 2).unwrap();
    let table = generate(&config).unwrap();

    for task in tasks {
        let assigned: HashSet<&str> = table
            .assignments()
            .filter(|a| a.task == task)
            .map(|a| a.staff.as_str())
            .collect();
        assert_eq!(assigned.len(), staff.len(), "task {task}");
    }
}

#[test]
fn weekend_task_is_covered_on_weekends_only_for_that_task() {
    let mut config =
        RosterConfig::from_names(&["A", "B", "C"], &["on-call", "clinic"], "2026-01-05", 3).unwrap();
    config.tasks[0].weekends = true;

    let table = generate(&config).unwrap();
    assert_eq!(table.dates().count(), 21);

    let saturday = table.day(date(2026, 1, 10)).unwrap();
    assert_eq!(saturday.len(), 1);
    assert_eq!(saturday[0].task, "on-call");

    // les curseurs divergent après le week-end : toujours pas de doublon
    for (_, assignments) in table.days() {
        if assignments.len() == 2 {
            assert_ne!(assignments[0].staff_id, assignments[1].staff_id);
        }
    }
}

#[test]
fn more_tasks_than_staff_is_a_conflict() {
    let config = RosterConfig::from_names(&["A", "B"], &["X", "Y", "Z"], "2026-01-05", 1).unwrap();
    match generate(&config) {
        Err(RosterError::ScheduleConflict { date: day, task }) => {
            assert_eq!(day, date(2026, 1, 5));
            assert_eq!(task, "Z");
        }
        other => panic!("expected schedule conflict, got {other:?}"),
    }
}

#[test]
fn same_display_name_distinct_ids_are_separate_people() {
    let config = RosterConfig {
        staff: vec![StaffMember::new("sam-1", "Sam"), StaffMember::new("sam-2", "Sam")],
        tasks: vec![Task::new("a", "A"), Task::new("b", "B")],
        start_date: date(2026, 1, 5),
        weeks: 1,
    };
    let table = generate(&config).unwrap();
    assert_eq!(table.len(), 10);
    for (_, assignments) in table.days() {
        assert_ne!(assignments[0].staff_id, assignments[1].staff_id);
    }
}

#[test]
fn invalid_configuration_names_the_field() {
    let field_of = |res: Result<RosterConfig, RosterError>| match res {
        Err(RosterError::InvalidConfiguration { field, .. }) => field,
        other => panic!("expected invalid configuration, got {other:?}"),
    };

    let no_staff: [&str; 0] = [];
    assert_eq!(field_of(RosterConfig::from_names(&no_staff, &TASKS, "2026-01-05", 1)), "staff");
    assert_eq!(field_of(RosterConfig::from_names(&STAFF, &no_staff, "2026-01-05", 1)), "tasks");
    assert_eq!(field_of(RosterConfig::from_names(&STAFF, &TASKS, "2026-02-30", 1)), "startDate");
    assert_eq!(field_of(RosterConfig::from_names(&STAFF, &TASKS, "2026-01-05", 0)), "weeks");
    assert_eq!(field_of(RosterConfig::from_names(&STAFF, &TASKS, "2026-01-05", -3)), "weeks");
}

#[test]
fn generate_revalidates_hand_built_config() {
    let mut config = team_config(1);
    config.weeks = 0;
    assert!(matches!(
        generate(&config),
        Err(RosterError::InvalidConfiguration { field: "weeks", .. })
    ));

    let mut config = team_config(1);
    config.staff.push(config.staff[0].clone());
    assert!(matches!(
        generate(&config),
        Err(RosterError::InvalidConfiguration { field: "staff", .. })
    ));
}

#[test]
fn calendar_overflow_is_rejected_before_generation() {
    let config = RosterConfig::from_names(&["A"], &["X"], "2026-01-05", i64::from(u32::MAX));
    assert!(matches!(
        config,
        Err(RosterError::InvalidConfiguration { field: "weeks", .. })
    ));

    let mut config = RosterConfig::from_names(&["A"], &["X"], "2026-01-05", 1).unwrap();
    config.weeks = u32::MAX;
    assert!(matches!(
        generate(&config),
        Err(RosterError::InvalidConfiguration { field: "weeks", .. })
    ));
}
