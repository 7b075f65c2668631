use api::TestResultRecord;
use dioxus::prelude::*;
use time::UtcOffset;

use crate::{
    admin::{difficulty_style, identification, user_summary},
    core::format,
    t,
};

const COLUMN_COUNT: usize = 8;

/// Results table, one row per record in the order given.
#[component]
pub fn ResultsTable(records: Vec<TestResultRecord>, utc_offset: UtcOffset) -> Element {
    let rows: Vec<RowEntry> = records
        .iter()
        .map(|record| RowEntry::new(record, utc_offset))
        .collect();

    rsx! {
        div { class: "admin-table",
            table {
                thead {
                    tr {
                        th { {t!("admin-col-date")} }
                        th { {t!("admin-col-user")} }
                        th { {t!("admin-col-identification")} }
                        th { {t!("admin-col-type")} }
                        th { {t!("admin-col-difficulty")} }
                        th { {t!("admin-col-wpm")} }
                        th { {t!("admin-col-accuracy")} }
                        th { {t!("admin-col-errors")} }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr { class: "admin-table__empty",
                            td { colspan: "{COLUMN_COUNT}", {t!("admin-empty")} }
                        }
                    } else {
                        for row in rows.into_iter() {
                            {render_row(row)}
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct RowEntry {
    id: String,
    date: String,
    user_name: String,
    user_email: String,
    id_label: String,
    id_value: String,
    test_type: String,
    difficulty: String,
    difficulty_class: String,
    wpm: u32,
    accuracy: String,
    errors: u32,
}

impl RowEntry {
    fn new(record: &TestResultRecord, utc_offset: UtcOffset) -> Self {
        let profile = record.profile.as_ref();
        let (user_name, user_email) = user_summary(profile);
        let ident = identification(profile);

        Self {
            id: record.id.clone(),
            date: format::format_created_at(&record.created_at, utc_offset),
            user_name,
            user_email,
            id_label: ident.label(),
            id_value: ident.value,
            test_type: record.test_type.clone(),
            difficulty: record.difficulty.to_string(),
            difficulty_class: difficulty_style(&record.difficulty).class(),
            wpm: record.wpm,
            accuracy: format::format_percent(record.accuracy),
            errors: record.errors_count,
        }
    }
}

fn render_row(row: RowEntry) -> Element {
    let RowEntry {
        id,
        date,
        user_name,
        user_email,
        id_label,
        id_value,
        test_type,
        difficulty,
        difficulty_class,
        wpm,
        accuracy,
        errors,
    } = row;

    rsx! {
        tr { key: "{id}", class: "admin-table__row",
            td { class: "admin-table__date", "{date}" }
            td { class: "admin-table__user",
                "{user_name}"
                div { class: "admin-table__muted", "{user_email}" }
            }
            td { class: "admin-table__ident",
                div {
                    span { class: "admin-table__ident-label", "{id_label}" }
                    " {id_value}"
                }
            }
            td { class: "admin-table__type", "{test_type}" }
            td {
                span { class: "badge badge--secondary {difficulty_class}", "{difficulty}" }
            }
            td { class: "admin-table__wpm", "{wpm}" }
            td { "{accuracy}" }
            td { "{errors}" }
        }
    }
}
