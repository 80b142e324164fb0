use dep_artifacts::{ArtifactError, ArtifactPipeline, ErrorPolicy, EtlEngine, FileLineSource};
use tempfile::TempDir;

const DEPENDENCY_LIST: &str = "\
[INFO] Scanning for projects...
[INFO]
[INFO] --- maven-dependency-plugin:3.6.1:list (default-cli) @ demo ---
[INFO]
[INFO] The following files have been resolved:
[INFO]    com.google.guava:guava:jar:33.0.0-jre:compile
[INFO]    org.slf4j:slf4j-api:jar:2.0.9:compile
[INFO]    org.postgresql:postgresql:jar:42.7.1:runtime
[INFO]    org.junit.jupiter:junit-jupiter:jar:5.10.1:test
[INFO]    javax.servlet:servlet-api:jar:2.5:provided
[INFO]
[INFO] ------------------------------------------------------------------------
[INFO] BUILD SUCCESS
";

fn fragment(id: &str) -> String {
    format!(
        "<artifact>\n<id>{}</id>\n<override>true</override>\n<source>true</source>\n<instructions>\n<_noee>true</_noee>\n</instructions>\n</artifact>\n",
        id
    )
}

#[tokio::test]
async fn test_end_to_end_dependency_list() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("deps.txt");
    tokio::fs::write(&input, DEPENDENCY_LIST).await.unwrap();

    let mut engine = EtlEngine::new(FileLineSource::new(&input), ArtifactPipeline::new());
    let mut out = Vec::new();
    let summary = engine.run(&mut out).await.unwrap();

    let expected = [
        fragment("com.google.guava:guava:jar:33.0.0-jre"),
        fragment("org.slf4j:slf4j-api:jar:2.0.9"),
        fragment("org.postgresql:postgresql:jar:42.7.1"),
    ]
    .concat();

    assert_eq!(String::from_utf8(out).unwrap(), expected);
    assert_eq!(summary.lines_read, 13);
    assert_eq!(summary.fragments_written, 3);
    assert_eq!(summary.lines_skipped, 10);
}

#[tokio::test]
async fn test_windows_line_endings() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("deps.txt");
    tokio::fs::write(&input, "[INFO]    a:b:jar:1.0:compile\r\nc:d:jar:2.0:runtime\r\n")
        .await
        .unwrap();

    let mut engine = EtlEngine::new(FileLineSource::new(&input), ArtifactPipeline::new());
    let mut out = Vec::new();
    engine.run(&mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        [fragment("a:b:jar:1.0"), fragment("c:d:jar:2.0")].concat()
    );
}

#[tokio::test]
async fn test_missing_input_under_each_policy() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("deps.txt");

    let mut engine = EtlEngine::new(FileLineSource::new(&input), ArtifactPipeline::new());
    let mut out = Vec::new();
    let summary = engine
        .run_with_policy(&mut out, ErrorPolicy::Report)
        .await
        .unwrap();
    assert!(summary.aborted);
    assert_eq!(summary.lines_read, 0);
    assert!(out.is_empty());

    let mut engine = EtlEngine::new(FileLineSource::new(&input), ArtifactPipeline::new());
    let err = engine
        .run_with_policy(&mut out, ErrorPolicy::Fail)
        .await
        .unwrap_err();
    assert!(matches!(err, ArtifactError::Input { .. }));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_stop_the_pass() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("deps.txt");
    let mut bytes = b"a:b:jar:1.0:compile\n".to_vec();
    bytes.extend_from_slice(b"org.caf\xe9:x:jar:1:compile\n");
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    bytes.extend_from_slice(b"c:d:jar:2.0:runtime\n");
    tokio::fs::write(&input, bytes).await.unwrap();

    let mut engine = EtlEngine::new(FileLineSource::new(&input), ArtifactPipeline::new());
    let mut out = Vec::new();
    let summary = engine
        .run_with_policy(&mut out, ErrorPolicy::Report)
        .await
        .unwrap();

    assert!(!summary.aborted);
    assert_eq!(summary.lines_read, 4);
    assert_eq!(summary.fragments_written, 3);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        [
            fragment("a:b:jar:1.0"),
            fragment("org.caf\u{FFFD}:x:jar:1"),
            fragment("c:d:jar:2.0"),
        ]
        .concat()
    );
}
