use super::*;

#[test]
fn layer_edges_widen_before_adding() {
    let layer = LayerDescriptor {
        image_ref: "https://x/a.png".to_string(),
        bottom: -4,
        left: i64::from(i32::MAX),
        width: u32::MAX,
        height: 10,
    };
    assert_eq!(layer.right(), i64::from(i32::MAX) + i64::from(u32::MAX));
    assert_eq!(layer.top(), 6);
}

#[test]
fn layer_edges_saturate_instead_of_overflowing() {
    let layer = LayerDescriptor {
        image_ref: "https://x/a.png".to_string(),
        bottom: i64::MAX - 1,
        left: i64::MAX,
        width: 10,
        height: 10,
    };
    assert_eq!(layer.right(), i64::MAX);
    assert_eq!(layer.top(), i64::MAX);
}

#[test]
fn info_table_keeps_first_position_and_last_value() {
    let mut info = InfoTable::new();
    info.insert("名称", "Alpha");
    info.insert("阵营", "East");
    info.insert("名称", "Beta");

    assert_eq!(info.len(), 2);
    assert_eq!(info.get("名称"), Some("Beta"));
    let keys: Vec<_> = info.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["名称", "阵营"]);
}

#[test]
fn record_serializes_info_as_ordered_object() {
    let mut info = InfoTable::new();
    info.insert("z", "1");
    info.insert("a", "2");
    let record = CharacterRecord {
        name: "Alpha".to_string(),
        url: "https://wiki/xytx/Alpha".to_string(),
        info,
    };

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r#"{"name":"Alpha","url":"https://wiki/xytx/Alpha","info":{"z":"1","a":"2"}}"#
    );
}
