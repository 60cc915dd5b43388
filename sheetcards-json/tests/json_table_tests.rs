use sheetcards_core::{import_pairs, QaPair, SheetTable};
use sheetcards_json::JsonTable;
use tempfile::tempdir;

#[tokio::test]
async fn new_file_starts_empty_and_persists_writes() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("cards.json");
    let backups = dir.path().join("backups");

    let table = JsonTable::open_with(file.clone(), backups.clone(), 3).await.unwrap();
    assert!(file.exists());
    assert!(table.read_rows().await.unwrap().is_empty());

    import_pairs(&table, vec![QaPair::new("What is X?", "X is Y.")], false)
        .await
        .unwrap();
    table.update_cell(2, 4, "Hard").await.unwrap();
    drop(table);

    let reopened = JsonTable::open_with(file, backups, 3).await.unwrap();
    let rows = reopened.read_rows().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["Question", "Answer", "Link", "Difficulty"]);
    assert_eq!(rows[1], vec!["What is X?", "X is Y.", "", "Hard"]);
}

#[tokio::test]
async fn update_cell_grows_the_grid() {
    let dir = tempdir().unwrap();
    let table = JsonTable::open_with(dir.path().join("t.json"), dir.path().join("b"), 2)
        .await
        .unwrap();
    table.update_cell(3, 2, "x").await.unwrap();
    let rows = table.read_rows().await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2], vec!["", "x"]);
    assert!(table.update_cell(0, 1, "y").await.is_err());
}

#[tokio::test]
async fn backups_are_rotated() {
    let dir = tempdir().unwrap();
    let table = JsonTable::open_with(dir.path().join("t.json"), dir.path().join("backups"), 2)
        .await
        .unwrap();
    for i in 0..4 {
        table.update_cell(1, 1, &format!("v{i}")).await.unwrap();
    }
    let copies = table.backups().list().unwrap();
    assert!(!copies.is_empty());
    assert!(copies.len() <= 2, "{} backups kept", copies.len());
}

#[tokio::test]
async fn creating_a_table_does_not_touch_backups() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("t.json");
    let backups = dir.path().join("backups");

    let table = JsonTable::open_with(file.clone(), backups.clone(), 10).await.unwrap();
    assert!(table.backups().list().unwrap().is_empty());
    for i in 0..3 {
        table.update_cell(1, 1, &format!("v{i}")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    let before = table.backups().list().unwrap();
    assert_eq!(before.len(), 3);
    drop(table);

    std::fs::remove_file(&file).unwrap();
    let reopened = JsonTable::open_with(file, backups, 10).await.unwrap();
    assert!(reopened.read_rows().await.unwrap().is_empty());
    assert_eq!(reopened.backups().list().unwrap(), before);
}

#[tokio::test]
async fn tables_sharing_a_backups_dir_keep_their_own_copies() {
    let dir = tempdir().unwrap();
    let backups = dir.path().join("backups");
    let a = JsonTable::open_with(dir.path().join("a.json"), backups.clone(), 1).await.unwrap();
    let b = JsonTable::open_with(dir.path().join("b.json"), backups.clone(), 1).await.unwrap();

    a.update_cell(1, 1, "a").await.unwrap();
    b.update_cell(1, 1, "b").await.unwrap();
    b.update_cell(1, 1, "b2").await.unwrap();

    assert_eq!(a.backups().list().unwrap().len(), 1);
    assert_eq!(b.backups().list().unwrap().len(), 1);
    assert_eq!(std::fs::read_dir(&backups).unwrap().count(), 2);
}

#[tokio::test]
async fn open_puts_backups_beside_the_table() {
    let dir = tempdir().unwrap();
    let table = JsonTable::open(dir.path().join("cards.json")).await.unwrap();
    table.append_rows(vec![vec!["Question".into()]]).await.unwrap();
    assert_eq!(table.backups().dir(), dir.path().join("backups"));
    assert_eq!(table.backups().list().unwrap().len(), 1);
}

#[tokio::test]
async fn corrupt_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("t.json");
    std::fs::write(&file, "not json").unwrap();
    let err = JsonTable::open_with(file, dir.path().join("b"), 2).await.err().unwrap();
    assert!(matches!(err, sheetcards_core::CoreError::RemoteRead(_)));
}
