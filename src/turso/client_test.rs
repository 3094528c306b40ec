// Tests for TursoClient

use super::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_new_creates_database_file_in_data_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_dir = temp_dir.path().join("nested").join("data");

    let client = TursoClient::new(data_dir.clone())
        .await
        .expect("Failed to create client");

    assert_eq!(client.db_path(), data_dir.join("dictionaryDB.db").as_path());
    assert!(data_dir.exists(), "Data dir should be created");
}

#[tokio::test]
async fn test_open_file_uses_given_path() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("sub").join("scratch.db");

    let client = TursoClient::open_file(db_path.clone()).await.unwrap();

    assert_eq!(client.db_path(), db_path.as_path());
    assert!(db_path.parent().unwrap().exists());
}

#[tokio::test]
async fn test_execute_and_query_map() {
    let temp_dir = TempDir::new().unwrap();
    let client = TursoClient::new(temp_dir.path().to_path_buf()).await.unwrap();

    client
        .execute("CREATE TABLE kv (k TEXT PRIMARY KEY, v TEXT NOT NULL)", ())
        .await
        .unwrap();
    let affected = client
        .execute("INSERT INTO kv (k, v) VALUES (?1, ?2)", libsql::params!["a", "1"])
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let values = client
        .query_map("SELECT v FROM kv WHERE k = ?1", libsql::params!["a"], |row| {
            row.get::<String>(0)
                .map_err(|e| TursoError::Query(e.to_string()))
        })
        .await
        .unwrap();
    assert_eq!(values, vec!["1".to_string()]);
}

#[tokio::test]
async fn test_unique_violation_maps_to_constraint() {
    let temp_dir = TempDir::new().unwrap();
    let client = TursoClient::new(temp_dir.path().to_path_buf()).await.unwrap();

    client
        .execute("CREATE TABLE kv (k TEXT PRIMARY KEY)", ())
        .await
        .unwrap();
    client
        .execute("INSERT INTO kv (k) VALUES ('dup')", ())
        .await
        .unwrap();

    let result = client.execute("INSERT INTO kv (k) VALUES ('dup')", ()).await;

    assert!(matches!(result, Err(TursoError::Constraint(_))));
}

#[tokio::test]
async fn test_syntax_error_maps_to_query() {
    let temp_dir = TempDir::new().unwrap();
    let client = TursoClient::new(temp_dir.path().to_path_buf()).await.unwrap();

    let result = client.execute("NOT VALID SQL", ()).await;

    assert!(matches!(result, Err(TursoError::Query(_))));
}

#[test]
fn test_new_blocking_without_runtime() {
    let temp_dir = TempDir::new().unwrap();

    let client = TursoClient::new_blocking(temp_dir.path().to_path_buf())
        .expect("Blocking open should succeed");

    assert!(client.db_path().starts_with(temp_dir.path()));
}

#[tokio::test]
async fn test_query_map_propagates_mapper_error() {
    let temp_dir = TempDir::new().unwrap();
    let client = TursoClient::new(temp_dir.path().to_path_buf()).await.unwrap();

    let result: Result<Vec<()>, TursoError> = client
        .query_map("SELECT 1", (), |_| Err(TursoError::Query("bad row".to_string())))
        .await;

    assert_eq!(result, Err(TursoError::Query("bad row".to_string())));
}
