use crate::composition::model::InfoTable;

use super::*;

fn record() -> CharacterRecord {
    let mut info = InfoTable::new();
    info.insert("名称", "阿尔法");
    info.insert("阵营", "西方");
    CharacterRecord {
        name: "Alpha".to_string(),
        url: "https://wiki.biligame.com/xytx/Alpha".to_string(),
        info,
    }
}

#[test]
fn json_keeps_field_and_table_order() {
    let json = metadata_json(&[record()]).unwrap();
    let name = json.find("\"name\"").unwrap();
    let url = json.find("\"url\"").unwrap();
    let first = json.find("名称").unwrap();
    let second = json.find("阵营").unwrap();
    assert!(name < url && url < first && first < second);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["info"]["阵营"], "西方");
    // Non-ASCII is written as-is, not escaped.
    assert!(json.contains("阿尔法"));
}

#[test]
fn empty_run_is_an_empty_array() {
    assert_eq!(metadata_json(&[]).unwrap(), "[]");
}

#[tokio::test]
async fn write_metadata_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("characters.json");
    write_metadata(&path, "[]").await.unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}
