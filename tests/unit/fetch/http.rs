use std::io::Cursor;

use super::*;

fn file_url(path: &std::path::Path) -> String {
    Url::from_file_path(path).unwrap().to_string()
}

#[tokio::test]
async fn file_urls_are_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.html");
    std::fs::write(&page, "<p>角色</p>").unwrap();

    let fetcher = HttpFetcher::new(&SpriteConfig::default()).unwrap();
    let text = fetcher.fetch_text(&file_url(&page)).await.unwrap();
    assert_eq!(text, "<p>角色</p>");
}

#[tokio::test]
async fn file_images_decode_through_the_loader() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("layer.png");
    let img = image::RgbaImage::from_raw(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 255]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(&png, &buf).unwrap();

    let fetcher = HttpFetcher::new(&SpriteConfig::default()).unwrap();
    let prepared = fetcher.load(&file_url(&png)).await.unwrap();
    assert_eq!((prepared.width, prepared.height), (2, 1));
}

#[tokio::test]
async fn missing_file_and_bad_url_are_fetch_errors() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = HttpFetcher::new(&SpriteConfig::default()).unwrap();

    let err = fetcher
        .fetch_bytes(&file_url(&dir.path().join("nope.png")))
        .await
        .unwrap_err();
    assert!(matches!(err, SpriteError::Fetch(_)));

    let err = fetcher.load("not a url").await.unwrap_err();
    assert!(matches!(err, SpriteError::Fetch(_)));
}
