#[cfg(test)]
mod integration_tests {
    use super::super::*;
    use crate::models::{EntryId, NewEntry};
    use chrono::{TimeZone, Utc};
    use sqlx::PgPool;

    // These tests require a PostgreSQL instance reachable through DATABASE_URL.
    // Run with: cargo test -- --ignored

    fn new_entry(name: &str, score: i64) -> NewEntry {
        NewEntry {
            id: EntryId::generate(),
            name: name.to_string(),
            score,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_insert_reads_back_entry(pool: PgPool) -> sqlx::Result<()> {
        let store = PostgresStore::new(pool);
        let entry = new_entry("abc", 42);

        let inserted = store.insert_entry(entry.clone()).await.unwrap();

        assert_eq!(inserted.id, entry.id);
        assert_eq!(inserted.name, "abc");
        assert_eq!(inserted.score, 42);
        assert_eq!(inserted.created_at, entry.created_at);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_fetch_orders_by_score_desc(pool: PgPool) -> sqlx::Result<()> {
        let store = PostgresStore::new(pool);
        for score in [3, 10, 1] {
            store.insert_entry(new_entry("abc", score)).await.unwrap();
        }

        let scores: Vec<i64> = store
            .fetch_all_entries()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.score)
            .collect();

        assert_eq!(scores, vec![10, 3, 1]);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_identical_entries_do_not_collide(pool: PgPool) -> sqlx::Result<()> {
        let store = PostgresStore::new(pool);

        // Same name, score and timestamp: only the id tells them apart
        let first = store.insert_entry(new_entry("abc", 7)).await.unwrap();
        let second = store.insert_entry(new_entry("abc", 7)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.fetch_all_entries().await.unwrap().len(), 2);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_delete_all_entries(pool: PgPool) -> sqlx::Result<()> {
        let store = PostgresStore::new(pool);
        store.insert_entry(new_entry("a", 1)).await.unwrap();
        store.insert_entry(new_entry("b", 2)).await.unwrap();

        assert_eq!(store.delete_all_entries().await.unwrap(), 2);
        assert_eq!(store.delete_all_entries().await.unwrap(), 0);
        assert!(store.fetch_all_entries().await.unwrap().is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_feedback_link_lookup(pool: PgPool) -> sqlx::Result<()> {
        let store = PostgresStore::new(pool.clone());
        assert_eq!(store.first_feedback_link().await.unwrap(), None);

        sqlx::query("INSERT INTO feedbacklink (link) VALUES ($1)")
            .bind("https://forms.example/cybersnake")
            .execute(&pool)
            .await?;

        let link = store.first_feedback_link().await.unwrap();
        assert_eq!(link.map(|l| l.link).as_deref(), Some("https://forms.example/cybersnake"));
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_health_check(pool: PgPool) -> sqlx::Result<()> {
        assert!(health_check(&pool).await.is_ok());
        Ok(())
    }
}
