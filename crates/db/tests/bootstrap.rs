use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    coursehub_db::health_check(&pool).await.unwrap();

    let tables = [
        "roles",
        "users",
        "user_sessions",
        "course_statuses",
        "categories",
        "courses",
        "course_modules",
        "lessons",
        "enrollments",
        "lesson_progress",
        "reviews",
    ];

    for table in tables {
        sqlx::query(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
    }
}

/// Seeded lookup rows must line up with the Rust constants.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_data_matches_constants(pool: PgPool) {
    let roles: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM roles ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(
        roles,
        vec![
            (1, coursehub_core::roles::ROLE_ADMIN.to_string()),
            (2, coursehub_core::roles::ROLE_STAFF.to_string()),
            (3, coursehub_core::roles::ROLE_STUDENT.to_string()),
        ]
    );

    let statuses: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM course_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    for (id, name) in statuses {
        let status = coursehub_db::models::status::CourseStatus::from_id(id)
            .unwrap_or_else(|| panic!("no CourseStatus for id {id}"));
        assert_eq!(status.as_str(), name);
    }
}
