use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    tracker_db::health_check(&pool).await.unwrap();

    for table in ["assignment_statuses", "categories", "employees", "assets"] {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(exists.0, "{table} should exist");
    }
}

/// The lookup table must line up with `AssignmentStatus` discriminants.
#[sqlx::test(migrations = "./migrations")]
async fn test_assignment_status_seed_matches_enum(pool: PgPool) {
    let rows: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM assignment_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();

    let expected: Vec<(i16, String)> = [
        tracker_core::inventory::AssignmentStatus::Available,
        tracker_core::inventory::AssignmentStatus::Assigned,
        tracker_core::inventory::AssignmentStatus::Recovered,
    ]
    .into_iter()
    .map(|s| (s.id(), s.as_str().to_string()))
    .collect();

    assert_eq!(rows, expected);
}
