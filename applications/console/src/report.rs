//! Console rendering of a run

use std::io::{self, Write};

use codefirst_core::{SeedOutcome, User};
use codefirst_storage::MigrationStatus;

/// First line of every run
pub const BANNER: &str = "Code-First Demo: User Table";

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER}")
}

/// Prints `Created <n> users` when the seeder wrote rows, nothing otherwise
pub fn write_seed_outcome<W: Write>(out: &mut W, outcome: &SeedOutcome) -> io::Result<()> {
    if let SeedOutcome::Seeded(users) = outcome {
        writeln!(out, "Created {} users", users.len())?;
    }
    Ok(())
}

pub fn write_users<W: Write>(out: &mut W, users: &[User]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Users in database:")?;
    for user in users {
        writeln!(out, "ID: {}, Email: {}", user.id, user.email)?;
    }
    Ok(())
}

/// Seeding line (if any) followed by the user listing
pub fn write_report<W: Write>(out: &mut W, outcome: &SeedOutcome, users: &[User]) -> io::Result<()> {
    write_seed_outcome(out, outcome)?;
    write_users(out, users)
}

pub fn write_applied<W: Write>(out: &mut W, applied: &[i64]) -> io::Result<()> {
    if applied.is_empty() {
        return writeln!(out, "Database is up to date");
    }
    for version in applied {
        writeln!(out, "Applied migration {version}")?;
    }
    Ok(())
}

pub fn write_status<W: Write>(out: &mut W, statuses: &[MigrationStatus]) -> io::Result<()> {
    for status in statuses {
        let state = if status.applied { "applied" } else { "pending" };
        writeln!(out, "{} {} [{}]", status.version, status.description, state)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codefirst_core::UserId;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn seeded_outcome_reports_count() {
        let users = vec![User {
            id: UserId::generate(),
            email: "a@example.com".to_string(),
        }];
        let text = render(|out| write_seed_outcome(out, &SeedOutcome::Seeded(users)));
        assert_eq!(text, "Created 1 users\n");
    }

    #[test]
    fn populated_outcome_prints_nothing() {
        let text = render(|out| write_seed_outcome(out, &SeedOutcome::AlreadyPopulated(5)));
        assert!(text.is_empty());
    }

    #[test]
    fn users_are_listed_one_per_line() {
        let id = UserId::generate();
        let users = vec![User {
            id,
            email: "b@example.com".to_string(),
        }];
        let text = render(|out| write_users(out, &users));
        assert_eq!(
            text,
            format!("\nUsers in database:\nID: {id}, Email: b@example.com\n")
        );
    }

    #[test]
    fn report_puts_created_line_before_listing() {
        let id = UserId::generate();
        let users = vec![User {
            id,
            email: "c@example.com".to_string(),
        }];
        let text = render(|out| write_report(out, &SeedOutcome::Seeded(users.clone()), &users));
        assert_eq!(
            text,
            format!("Created 1 users\n\nUsers in database:\nID: {id}, Email: c@example.com\n")
        );
    }

    #[test]
    fn report_for_populated_table_is_listing_only() {
        let text = render(|out| write_report(out, &SeedOutcome::AlreadyPopulated(0), &[]));
        assert_eq!(text, "\nUsers in database:\n");
    }

    #[test]
    fn status_marks_pending_and_applied() {
        let statuses = vec![
            MigrationStatus {
                version: 1,
                description: "create users".to_string(),
                applied: true,
            },
            MigrationStatus {
                version: 2,
                description: "create posts".to_string(),
                applied: false,
            },
        ];
        let text = render(|out| write_status(out, &statuses));
        assert_eq!(text, "1 create users [applied]\n2 create posts [pending]\n");
    }
}
