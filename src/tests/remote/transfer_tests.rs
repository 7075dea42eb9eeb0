use super::*;

#[test]
fn attachment_name_reads_plain_and_quoted_values() {
    assert_eq!(
        attachment_name("attachment; filename=selected_recordings.zip").as_deref(),
        Some("selected_recordings.zip")
    );
    assert_eq!(
        attachment_name("attachment; FileName=\"recordings.zip\"").as_deref(),
        Some("recordings.zip")
    );
}

#[test]
fn attachment_name_strips_directories() {
    assert_eq!(
        attachment_name("attachment; filename=\"../../etc/passwd\"").as_deref(),
        Some("passwd")
    );
    assert_eq!(attachment_name("attachment; filename=\"..\""), None);
}

#[test]
fn attachment_without_filename_has_no_name() {
    assert_eq!(attachment_name("inline"), None);
    assert_eq!(attachment_name("attachment; filename=\"\""), None);
}

#[test]
fn urls_encode_each_segment() {
    let mut config = ClientConfig::default();
    config.base_url = "http://box.local:9000/guestbook/".to_string();
    let client = RemoteClient::new(&config).unwrap();
    assert_eq!(
        client.url(&["rename", "a b#1.wav"]).as_str(),
        "http://box.local:9000/guestbook/rename/a%20b%231.wav"
    );
    assert_eq!(
        client.url(&["api", "recordings"]).as_str(),
        "http://box.local:9000/guestbook/api/recordings"
    );
}

#[test]
fn bad_base_url_is_rejected() {
    let mut config = ClientConfig::default();
    config.base_url = "not a url".to_string();
    assert!(RemoteClient::new(&config).is_err());
}

/// Serves one response whose body stops short of its Content-Length.
fn truncated_archive_server() -> String {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = [0u8; 4096];
        let _ = stream.read(&mut request);
        let _ = stream.write_all(
            b"HTTP/1.1 200 OK\r\n\
              Content-Type: application/zip\r\n\
              Content-Disposition: attachment; filename=\"recordings.zip\"\r\n\
              Content-Length: 1000\r\n\
              \r\n\
              PK\x03\x04partial",
        );
    });
    format!("http://{addr}")
}

#[test]
fn interrupted_archive_leaves_previous_file_in_place() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("recordings.zip"), b"old").unwrap();

    let mut config = ClientConfig::default();
    config.base_url = truncated_archive_server();
    let client = RemoteClient::new(&config)
        .unwrap()
        .with_download_dir(dir.path());

    assert!(client.download_all().is_err());
    assert_eq!(
        std::fs::read(dir.path().join("recordings.zip")).unwrap(),
        b"old"
    );
    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("recordings.zip")]);
}
