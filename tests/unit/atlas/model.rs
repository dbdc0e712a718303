use super::*;

#[test]
fn single_entry_omits_optional_fields() {
    let mut atlas = Atlas::new();
    atlas.insert("rock", SpriteEntry::single(4, 8, 16, 16));
    assert_eq!(
        atlas.to_json().unwrap(),
        r#"{"rock":{"x":4,"y":8,"width":16,"height":16}}"#
    );
}

#[test]
fn grid_entry_uses_camel_case_slices_and_loop_key() {
    let mut clip = ClipRange::at(0);
    clip.to = 3;
    clip.apply(Playback::new(10.0, true));

    let entry = SpriteEntry {
        slice_x: Some(4),
        slice_y: Some(2),
        anims: Some(BTreeMap::from([("run".to_string(), clip)])),
        ..SpriteEntry::single(0, 0, 64, 32)
    };

    let v = serde_json::to_value(&entry).unwrap();
    assert_eq!(v["sliceX"], 4);
    assert_eq!(v["sliceY"], 2);
    assert_eq!(v["anims"]["run"]["from"], 0);
    assert_eq!(v["anims"]["run"]["to"], 3);
    assert_eq!(v["anims"]["run"]["loop"], true);
    assert_eq!(v["anims"]["run"]["speed"], 10.0);
}

#[test]
fn whole_speeds_are_written_as_integers() {
    let mut clip = ClipRange::at(0);
    clip.apply(Playback::new(20.0, false));
    assert_eq!(
        serde_json::to_string(&clip).unwrap(),
        r#"{"from":0,"to":0,"speed":20,"loop":false}"#
    );

    clip.speed = Some(7.5);
    assert!(serde_json::to_string(&clip).unwrap().contains(r#""speed":7.5"#));

    // Reading the integer form back gives the same clip.
    clip.speed = Some(3.0);
    let back: ClipRange = serde_json::from_str(&serde_json::to_string(&clip).unwrap()).unwrap();
    assert_eq!(back, clip);
}

#[test]
fn keys_are_sorted_regardless_of_insertion_order() {
    let mut atlas = Atlas::new();
    atlas.insert("wall", SpriteEntry::single(0, 0, 1, 1));
    atlas.insert("coin", SpriteEntry::single(0, 0, 1, 1));
    let json = atlas.to_json().unwrap();
    assert!(json.find("coin").unwrap() < json.find("wall").unwrap());
}

#[test]
fn insert_reports_replaced_entry() {
    let mut atlas = Atlas::new();
    assert!(atlas.insert("rock", SpriteEntry::single(0, 0, 1, 1)).is_none());
    let old = atlas.insert("rock", SpriteEntry::single(5, 5, 1, 1)).unwrap();
    assert_eq!(old.x, 0);
    assert_eq!(atlas.get("rock").unwrap().x, 5);
    assert_eq!(atlas.len(), 1);
}

#[test]
fn parses_compiler_output() {
    let atlas = Atlas::from_json_str(
        r#"{"coin":{"x":0,"y":0,"width":32,"height":8,"sliceX":4,"anims":{"base":{"from":0,"to":3,"loop":true}}}}"#,
    )
    .unwrap();
    let coin = atlas.get("coin").unwrap();
    assert_eq!(coin.slice_x, Some(4));
    assert_eq!(coin.slice_y, None);
    let base = coin.anim("base").unwrap();
    assert_eq!((base.from, base.to), (0, 3));
    assert_eq!(base.looping, Some(true));
    assert_eq!(base.speed, None);
    assert!(coin.anim("idle").is_none());
}
