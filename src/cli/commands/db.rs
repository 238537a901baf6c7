use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats::collect_info;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        // Opened without migrating so `--migrate` can report what is pending.
        let mut pool = DbPool::open(&cfg.database_path())?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            let pending = pending_migrations(&pool.conn)?;
            if pending.is_empty() {
                info("No pending migrations.");
            } else {
                for m in &pending {
                    info(format!("Pending: {}_{}", m.version, m.name));
                }
                let applied = run_pending_migrations(&mut pool.conn)?;
                success(format!("{} migration(s) applied.", applied.len()));
            }
        } else {
            run_pending_migrations(&mut pool.conn)?;
        }

        //
        // 2) INFO
        //
        if *show_info {
            let i = collect_info(&pool)?;
            header("Store");
            println!("• File:           {}", i.path);
            println!("• Size:           {:.2} KB", i.size_bytes as f64 / 1024.0);
            println!("• Schema version: {}", i.schema_version);
            println!("• Profiles:       {}", i.profiles);
            println!("• Sessions:       {} ({} open)", i.sessions, i.open_sessions);
            println!("• First start:    {}", i.first_start.as_deref().unwrap_or("--"));
            println!("• Last start:     {}", i.last_start.as_deref().unwrap_or("--"));
        }

        //
        // 3) CHECK
        //
        if *check {
            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", integrity));
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}
