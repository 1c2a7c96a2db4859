//! Report generation.
//!
//! Three report kinds are built from the stores into a neutral
//! `ReportDocument`, which the exporters in `crate::export` render as
//! print, Word or Excel output.

use chrono::{Datelike, Utc};
use indexmap::IndexMap;
use rand::Rng;
use rust_decimal::Decimal;

use crate::error::AppResult;
use crate::models::report::{DateRange, ReportDocument, ReportSection, ReportTable, StatEntry};
use crate::models::{AssetCondition, User, UserRole};
use crate::storage::Storage;

/// Placeholder signature line when no plausible signing official exists
const UNSIGNED: &str = "..........................";

#[derive(Clone)]
pub struct ReportsService {
    storage: Storage,
}

impl ReportsService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// All procurement, maintenance and borrowing activity inside the range
    pub fn activity_report(&self, range: DateRange) -> AppResult<ReportDocument> {
        let assets: Vec<_> = self
            .storage
            .assets
            .list()?
            .into_iter()
            .filter(|a| range.contains(a.purchase_date))
            .collect();
        let maintenance: Vec<_> = self
            .storage
            .maintenance
            .list()?
            .into_iter()
            .filter(|m| range.contains(m.date))
            .collect();
        let borrowing: Vec<_> = self
            .storage
            .borrowing
            .list()?
            .into_iter()
            .filter(|b| range.contains(b.borrow_date))
            .collect();

        let stats = vec![
            StatEntry {
                label: "New Assets Registered".to_string(),
                value: assets.len().to_string(),
            },
            StatEntry {
                label: "Maintenance Activities".to_string(),
                value: maintenance.len().to_string(),
            },
            StatEntry {
                label: "Borrowings Made".to_string(),
                value: borrowing.len().to_string(),
            },
        ];

        let sections = vec![
            ReportSection {
                title: "Asset Procurement Details".to_string(),
                items: assets
                    .iter()
                    .map(|a| {
                        format!(
                            "{} - {} ({}) - {}",
                            a.code,
                            a.name,
                            a.location.study_program,
                            format_rupiah(a.price)
                        )
                    })
                    .collect(),
            },
            ReportSection {
                title: "Maintenance & Repair Details".to_string(),
                items: maintenance
                    .iter()
                    .map(|m| {
                        format!(
                            "{}: {} (Status: {}) - {}",
                            m.asset_name,
                            m.description,
                            m.status,
                            format_rupiah(m.cost)
                        )
                    })
                    .collect(),
            },
            ReportSection {
                title: "Borrowing Details".to_string(),
                items: borrowing
                    .iter()
                    .map(|b| {
                        format!(
                            "{} by {} ({})",
                            b.asset_name, b.borrower_name, b.borrower_unit
                        )
                    })
                    .collect(),
            },
        ];

        Ok(ReportDocument {
            title: "Inventory Activity Report".to_string(),
            period: range.label(),
            doc_number: doc_number(),
            stats,
            table: None,
            sections,
            recommendation: None,
            signatory: self.signatory()?,
        })
    }

    /// Asset additions grouped per work unit, in master-data order
    pub fn unit_report(&self, range: DateRange) -> AppResult<ReportDocument> {
        let units = self.storage.work_units.list()?;
        let mut totals: IndexMap<String, (usize, Decimal)> = units
            .iter()
            .map(|u| (u.name.clone(), (0, Decimal::ZERO)))
            .collect();

        // Assets attributed to a unit absent from master data are excluded
        for asset in self.storage.assets.list()? {
            if !range.contains(asset.purchase_date) {
                continue;
            }
            if let Some(entry) = totals.get_mut(&asset.location.study_program) {
                entry.0 += 1;
                entry.1 += asset.price;
            }
        }

        let total_count: usize = totals.values().map(|(count, _)| *count).sum();
        let total_value: Decimal = totals.values().map(|(_, value)| *value).sum();

        let table = ReportTable {
            header: vec![
                "Study Program / Unit".to_string(),
                "Assets Added".to_string(),
                "New Investment Total".to_string(),
            ],
            rows: totals
                .iter()
                .map(|(unit, (count, value))| {
                    vec![
                        unit.clone(),
                        format!("{} units", count),
                        format_rupiah(*value),
                    ]
                })
                .collect(),
        };

        Ok(ReportDocument {
            title: "Asset Additions per Unit".to_string(),
            period: range.label(),
            doc_number: doc_number(),
            stats: vec![
                StatEntry {
                    label: "Assets Added".to_string(),
                    value: total_count.to_string(),
                },
                StatEntry {
                    label: "New Investment Total".to_string(),
                    value: format_rupiah(total_value),
                },
            ],
            table: Some(table),
            sections: Vec::new(),
            recommendation: None,
            signatory: self.signatory()?,
        })
    }

    /// Condition breakdown of the fleet as registered through the end of the
    /// range. The start date does not constrain this report.
    pub fn condition_report(&self, range: DateRange) -> AppResult<ReportDocument> {
        let assets: Vec<_> = self
            .storage
            .assets
            .list()?
            .into_iter()
            .filter(|a| a.purchase_date <= range.end())
            .collect();
        let total = assets.len();

        let stats = AssetCondition::ALL
            .iter()
            .map(|condition| {
                let count = assets.iter().filter(|a| a.condition == *condition).count();
                let percent = if total == 0 {
                    0
                } else {
                    ((count as f64 / total as f64) * 100.0).round() as i64
                };
                StatEntry {
                    label: condition.to_string(),
                    value: format!("{} units ({}%)", count, percent),
                }
            })
            .collect();

        let end = range.end().format("%d/%m/%Y");
        Ok(ReportDocument {
            title: "Asset Condition Report".to_string(),
            period: format!("Through {}", end),
            doc_number: doc_number(),
            stats,
            table: None,
            sections: Vec::new(),
            recommendation: Some(format!(
                "Based on data through {}, the system recommends routine inspection of units in damaged condition.",
                end
            )),
            signatory: self.signatory()?,
        })
    }

    /// The signing official: the user whose position is "Kepala BAUK",
    /// falling back to the first admin, then to a dotted blank line.
    fn signatory(&self) -> AppResult<String> {
        let users = self.storage.users.list()?;
        Ok(pick_signatory(&users))
    }
}

fn pick_signatory(users: &[User]) -> String {
    users
        .iter()
        .find(|u| {
            u.position
                .as_deref()
                .map(|p| p.eq_ignore_ascii_case("kepala bauk"))
                .unwrap_or(false)
        })
        .or_else(|| users.iter().find(|u| u.role == UserRole::Admin))
        .map(|u| u.name.clone())
        .unwrap_or_else(|| UNSIGNED.to_string())
}

/// Official-looking document number, fresh per generation
fn doc_number() -> String {
    let serial: u32 = rand::thread_rng().gen_range(0..100_000);
    format!("RPT-{:05}/SSP/{}", serial, Utc::now().year())
}

/// Indonesian rupiah rendering with dot thousands separators, whole rupiah
pub fn format_rupiah(amount: Decimal) -> String {
    let digits = amount.trunc().abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("Rp -{}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupiah_groups_thousands_with_dots() {
        assert_eq!(format_rupiah(Decimal::from(0)), "Rp 0");
        assert_eq!(format_rupiah(Decimal::from(450_000)), "Rp 450.000");
        assert_eq!(format_rupiah(Decimal::from(6_500_000)), "Rp 6.500.000");
        assert_eq!(
            format_rupiah(Decimal::from(1_234_567_890i64)),
            "Rp 1.234.567.890"
        );
    }

    #[test]
    fn doc_number_has_serial_and_year() {
        let number = doc_number();
        assert!(number.starts_with("RPT-"));
        assert!(number.contains("/SSP/"));
        assert!(number.ends_with(&Utc::now().year().to_string()));
    }

    #[test]
    fn signatory_prefers_kepala_bauk_over_admin() {
        let user = |name: &str, role, position: Option<&str>| User {
            id: name.to_string(),
            username: name.to_lowercase(),
            password: None,
            name: name.to_string(),
            role,
            study_program: String::new(),
            position: position.map(str::to_string),
        };

        let users = vec![
            user("Admin One", UserRole::Admin, None),
            user("Head Officer", UserRole::Officer, Some("Kepala BAUK")),
        ];
        assert_eq!(pick_signatory(&users), "Head Officer");

        let admins_only = vec![user("Admin One", UserRole::Admin, None)];
        assert_eq!(pick_signatory(&admins_only), "Admin One");

        assert_eq!(pick_signatory(&[]), UNSIGNED);
    }
}
