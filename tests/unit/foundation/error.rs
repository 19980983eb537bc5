use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpriteError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(SpriteError::fetch("x").to_string().contains("fetch error:"));
    assert!(
        SpriteError::markup("x")
            .to_string()
            .contains("markup error:")
    );
    assert!(
        SpriteError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        SpriteError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        SpriteError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn io_and_other_preserve_source() {
    let io = SpriteError::from(std::io::Error::other("disk gone"));
    assert!(io.to_string().contains("disk gone"));

    let base = std::io::Error::other("boom");
    let err = SpriteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
