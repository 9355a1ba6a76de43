#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `DirectoryFileSink`.

use course_portal_core::traits::{DirectoryFileSink, FileSink};

#[tokio::test]
async fn writes_into_directory_created_on_demand() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let sink = DirectoryFileSink::new(tmp.path().join("downloads"));

    let path = sink
        .materialize("Maths_Unit 1_Slides.pdf", b"%PDF")
        .await
        .expect("write failed");

    assert_eq!(
        path,
        tmp.path().join("downloads").join("Maths_Unit 1_Slides.pdf")
    );
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF");
}

#[tokio::test]
async fn never_overwrites_existing_file() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let sink = DirectoryFileSink::new(tmp.path());

    let first = sink.materialize("Intro.pdf", b"one").await.unwrap();
    let second = sink.materialize("Intro.pdf", b"two").await.unwrap();
    let third = sink.materialize("Intro.pdf", b"three").await.unwrap();

    assert_eq!(first, tmp.path().join("Intro.pdf"));
    assert_eq!(second, tmp.path().join("Intro (1).pdf"));
    assert_eq!(third, tmp.path().join("Intro (2).pdf"));
    assert_eq!(std::fs::read(&first).unwrap(), b"one");
    assert_eq!(std::fs::read(&second).unwrap(), b"two");
}

#[tokio::test]
async fn separators_cannot_escape_directory() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let sink = DirectoryFileSink::new(tmp.path());

    let path = sink
        .materialize("../CS/OS_Unit 2_Notes.pdf", b"x")
        .await
        .unwrap();

    assert_eq!(path.parent(), Some(tmp.path()));
    assert_eq!(path.file_name().unwrap(), ".._CS_OS_Unit 2_Notes.pdf");
}
