use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Maximum visible width of the "operation (target)" column.
const OP_WIDTH: usize = 40;

/// ANSI colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "punch_in" => Colour::Green,
        "punch_out" => Colour::Yellow,
        "session_delete" => Colour::Red,
        "profile_add" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(LogEntry {
                id: row.get(0)?,
                date: row.get(1)?,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(e.date);

            // Width is computed on the plain text, then only the operation is painted.
            let mut plain = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            if plain.chars().count() > OP_WIDTH {
                plain = plain.chars().take(OP_WIDTH - 3).collect::<String>() + "...";
            }
            let padding = " ".repeat(OP_WIDTH.saturating_sub(plain.chars().count()));

            let painted = match plain.split_once(' ') {
                Some((op, rest)) => format!(
                    "{} {}",
                    color_for_operation(&e.operation).paint(op),
                    rest
                ),
                None => color_for_operation(&e.operation)
                    .paint(plain.as_str())
                    .to_string(),
            };

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                e.id,
                date,
                painted,
                padding,
                e.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
