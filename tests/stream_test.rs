//! Integration tests for range-aware media streaming over real HTTP.

mod common;

use common::{pattern, TestHarness};

#[tokio::test]
async fn full_request_returns_whole_file() {
    let (h, addr) = TestHarness::with_server().await;
    let data = pattern(4096);
    h.add_media("movies/Full.mp4", &data);

    let resp = reqwest::get(format!("http://{addr}/movies/Full.mp4"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let headers = resp.headers();
    assert_eq!(headers["content-type"], "video/mp4");
    assert_eq!(headers["accept-ranges"], "bytes");
    assert_eq!(headers["content-length"], "4096");
    assert_eq!(headers["cache-control"], "no-cache");
    assert!(headers.get("content-range").is_none());
    assert!(headers.get("content-disposition").is_none());

    let body = resp.bytes().await.unwrap();
    assert_eq!(body.as_ref(), data.as_slice());
}

#[tokio::test]
async fn range_request_returns_slice() {
    let (h, addr) = TestHarness::with_server().await;
    h.add_media("movies/A.mp4", b"0123456789");

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("http://{addr}/movies/A.mp4"))
        .header("Range", "bytes=2-5")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 206);
    assert_eq!(resp.headers()["content-range"], "bytes 2-5/10");
    assert_eq!(resp.headers()["content-length"], "4");
    let body = resp.bytes().await.unwrap();
    assert_eq!(body.as_ref(), b"2345");
}

#[tokio::test]
async fn every_valid_range_matches_the_file_slice() {
    let (h, addr) = TestHarness::with_server().await;
    let data = pattern(97);
    h.add_media("series/Show/e1.mkv", &data);

    let client = reqwest::Client::new();
    for (start, end) in [(0u64, 0u64), (0, 96), (13, 13), (40, 95), (96, 96), (1, 50)] {
        let resp = client
            .get(format!("http://{addr}/series/Show/e1.mkv"))
            .header("Range", format!("bytes={start}-{end}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 206);
        assert_eq!(
            resp.headers()["content-range"].to_str().unwrap(),
            format!("bytes {start}-{end}/97")
        );
        assert_eq!(resp.headers()["content-type"], "video/x-matroska");
        let body = resp.bytes().await.unwrap();
        assert_eq!(body.as_ref(), &data[start as usize..=end as usize]);
    }
}

#[tokio::test]
async fn open_ended_range_reads_to_end() {
    let (h, addr) = TestHarness::with_server().await;
    h.add_media("movies/Open.webm", &[42u8; 500]);

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("http://{addr}/movies/Open.webm"))
        .header("Range", "bytes=100-")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 206);
    assert_eq!(resp.headers()["content-range"], "bytes 100-499/500");
    assert_eq!(resp.headers()["content-type"], "video/webm");
    assert_eq!(resp.bytes().await.unwrap().len(), 400);
}

#[tokio::test]
async fn range_past_end_is_clamped() {
    let (h, addr) = TestHarness::with_server().await;
    h.add_media("movies/A.mp4", b"0123456789");

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("http://{addr}/movies/A.mp4"))
        .header("Range", "bytes=8-1000")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 206);
    assert_eq!(resp.headers()["content-range"], "bytes 8-9/10");
    assert_eq!(resp.bytes().await.unwrap().as_ref(), b"89");
}

#[tokio::test]
async fn malformed_range_degrades_to_whole_file() {
    let (h, addr) = TestHarness::with_server().await;
    h.add_media("movies/A.mp4", b"0123456789");

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("http://{addr}/movies/A.mp4"))
        .header("Range", "bytes=abc-def")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 206);
    assert_eq!(resp.headers()["content-range"], "bytes 0-9/10");
    assert_eq!(resp.bytes().await.unwrap().as_ref(), b"0123456789");
}

#[tokio::test]
async fn repeated_ranges_are_identical() {
    let (h, addr) = TestHarness::with_server().await;
    h.add_media("movies/Same.avi", &pattern(2048));

    let client = reqwest::Client::new();
    let mut bodies = Vec::new();
    for _ in 0..3 {
        let resp = client
            .get(format!("http://{addr}/movies/Same.avi"))
            .header("Range", "bytes=100-1099")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.headers()["content-type"], "video/x-msvideo");
        bodies.push(resp.bytes().await.unwrap());
    }
    assert_eq!(bodies[0].len(), 1000);
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}

#[tokio::test]
async fn percent_encoded_paths_resolve() {
    let (h, addr) = TestHarness::with_server().await;
    h.add_media("series/My Show/Episode 1.mov", b"quicktime");

    let resp = reqwest::get(format!("http://{addr}/series/My%20Show/Episode%201.mov"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "video/quicktime");
    assert_eq!(resp.bytes().await.unwrap().as_ref(), b"quicktime");
}

#[tokio::test]
async fn missing_media_is_404_with_path() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/movies/No%20Such.mp4"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert!(resp.headers().get("content-range").is_none());
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["code"], "not_found");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("/movies/No Such.mp4"));
}

#[tokio::test]
async fn traversal_outside_root_is_rejected() {
    let (h, addr) = TestHarness::with_server().await;
    // A video next to (not under) the media root.
    let outside = h.media_root.parent().unwrap().join("outside.mp4");
    std::fs::write(&outside, b"secret").unwrap();

    let resp = reqwest::get(format!("http://{addr}/..%2Foutside.mp4"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
    let body = resp.text().await.unwrap();
    assert!(!body.contains("secret"));
}

#[cfg(unix)]
#[tokio::test]
async fn unreadable_media_is_403() {
    use std::os::unix::fs::PermissionsExt;

    let (h, addr) = TestHarness::with_server().await;
    let path = h.add_media("movies/Locked.mp4", b"locked");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read anything; only assert when permissions actually bite.
    if std::fs::File::open(&path).is_ok() {
        return;
    }

    let resp = reqwest::get(format!("http://{addr}/movies/Locked.mp4"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn undecodable_path_is_404() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/movies/%FF.mp4"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["code"], "not_found");
    assert!(json["error"].as_str().unwrap().contains("/movies/\u{FFFD}.mp4"));
}

#[tokio::test]
async fn nul_in_path_is_404() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/movies/a%00b.mp4"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["code"], "not_found");
}
