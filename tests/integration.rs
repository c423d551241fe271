use pretty_assertions::assert_eq;
use warkah_studio::{
    ai::{MockPoseClient, MockStyleClient},
    media::MediaType,
    models::{Mode, ModeResult, PoseBatch, PosePrompt},
    studio::{Studio, StudioServices},
};

const POSE_SUFFIX: &str = "--ar 3:4 --v 6.0";

fn build_studio(style: MockStyleClient, poses: MockPoseClient) -> Studio {
    Studio::with_services(StudioServices {
        style: Box::new(style),
        poses: Box::new(poses),
    })
}

/// Stand-in for a camera JPEG: magic bytes followed by bulk payload.
fn large_jpeg() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
    bytes.resize(2 * 1024 * 1024, 0xAB);
    bytes
}

#[tokio::test]
async fn test_analyzer_full_workflow() {
    let style = MockStyleClient::new()
        .with_response("Luxurious golden-hour garden wedding, soft bokeh".to_string());
    let probe = style.clone();
    let mut studio = build_studio(style, MockPoseClient::new());

    studio.select_image(large_jpeg(), "image/jpeg");
    assert_eq!(
        studio
            .session(Mode::Analyzer)
            .image
            .as_ref()
            .map(|img| img.media_type),
        Some(MediaType::Jpeg)
    );

    studio.submit().await;

    let state = studio.session(Mode::Analyzer);
    assert!(!state.pending);
    assert_eq!(
        state.result,
        Some(ModeResult::Style(
            "Luxurious golden-hour garden wedding, soft bokeh".to_string()
        ))
    );
    assert_eq!(probe.get_call_count(), 1);
    assert!(studio.alert().is_none());
    assert!(studio.progress().is_none());
}

#[tokio::test]
async fn test_pose_full_workflow_preserves_order_and_suffix() {
    let batch = PoseBatch::new(
        (1..=8)
            .map(|i| PosePrompt {
                title: format!("Pose {}", i),
                prompt: format!("Variation {} in the reference style {}", i, POSE_SUFFIX),
            })
            .collect(),
    )
    .unwrap();

    let poses = MockPoseClient::new().with_response(batch);
    let mut studio = build_studio(MockStyleClient::new(), poses);

    studio.switch_mode(Mode::Poses);
    studio.select_image(vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A], "image/png");
    studio.submit().await;

    match &studio.session(Mode::Poses).result {
        Some(ModeResult::Poses(batch)) => {
            assert_eq!(batch.prompts().len(), 8);
            for (i, pose) in batch.prompts().iter().enumerate() {
                assert_eq!(pose.title, format!("Pose {}", i + 1));
                assert!(pose.prompt.ends_with(POSE_SUFFIX));
            }
        }
        other => panic!("expected pose batch, got {:?}", other),
    }
    assert!(!studio.session(Mode::Poses).pending);
}

#[tokio::test]
async fn test_every_supported_format_selects_with_a_preview_handle() {
    for (bytes, mime, expected) in [
        (vec![0xFF, 0xD8, 0xFF, 0xE0], "image/jpeg", MediaType::Jpeg),
        (vec![0x89, 0x50, 0x4E, 0x47], "image/png", MediaType::Png),
        (
            vec![
                0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50,
            ],
            "image/webp",
            MediaType::WebP,
        ),
    ] {
        let mut studio = build_studio(MockStyleClient::new(), MockPoseClient::new());
        studio.select_image(bytes, mime);

        let image = studio
            .session(Mode::Analyzer)
            .image
            .as_ref()
            .unwrap_or_else(|| panic!("{} should be accepted", mime));
        assert_eq!(image.media_type, expected);
        assert!(studio.alert().is_none(), "{} raised an alert", mime);
    }
}

#[tokio::test]
async fn test_gif_selection_is_rejected_without_storing_image() {
    let mut studio = build_studio(MockStyleClient::new(), MockPoseClient::new());

    studio.select_image(b"GIF89a...".to_vec(), "image/gif");

    assert!(studio.session(Mode::Analyzer).image.is_none());
    assert_eq!(studio.take_alert().unwrap().title, "Invalid Format");
}

#[tokio::test]
async fn test_submit_without_image_never_calls_remote() {
    let style = MockStyleClient::new();
    let style_probe = style.clone();
    let poses = MockPoseClient::new();
    let pose_probe = poses.clone();
    let mut studio = build_studio(style, poses);

    studio.submit().await;
    studio.switch_mode(Mode::Poses);
    studio.submit().await;

    assert_eq!(style_probe.get_call_count(), 0);
    assert_eq!(pose_probe.get_call_count(), 0);
    assert_eq!(studio.take_alert().unwrap().title, "No Image");
}

#[tokio::test]
async fn test_transport_failure_shows_alert_and_leaves_result_empty() {
    let poses = MockPoseClient::new().with_error("quota exceeded".to_string());
    let mut studio = build_studio(MockStyleClient::new(), poses);

    studio.switch_mode(Mode::Poses);
    studio.select_image(vec![0x89, 0x50, 0x4E, 0x47], "image/png");
    studio.submit().await;

    let state = studio.session(Mode::Poses);
    assert!(!state.pending);
    assert!(state.result.is_none());
    assert!(state.image.is_some());
    assert_eq!(studio.take_alert().unwrap().title, "Error");
}

#[tokio::test]
async fn test_malformed_remote_json_never_yields_partial_batch() {
    // Shape failures are caught at decode time; the session only ever sees
    // a validated batch or nothing.
    let err = PoseBatch::decode("[{\"title\": \"only one\", \"prompt\": \"p\"}]").unwrap_err();
    assert!(matches!(err, warkah_studio::Error::Decode(_)));

    let err = PoseBatch::decode("{\"oops\": true}").unwrap_err();
    assert!(matches!(err, warkah_studio::Error::Decode(_)));
}

#[tokio::test]
async fn test_reset_targets_only_the_active_mode() {
    let mut studio = build_studio(
        MockStyleClient::new().with_response("analyzer result".to_string()),
        MockPoseClient::new(),
    );

    studio.select_image(large_jpeg(), "image/jpeg");
    studio.submit().await;

    studio.switch_mode(Mode::Poses);
    studio.select_image(vec![0x89, 0x50, 0x4E, 0x47], "image/png");
    studio.submit().await;
    studio.reset();

    assert!(studio.session(Mode::Poses).image.is_none());
    assert!(studio.session(Mode::Poses).result.is_none());

    let analyzer = studio.session(Mode::Analyzer);
    assert!(analyzer.image.is_some());
    assert_eq!(
        analyzer.result,
        Some(ModeResult::Style("analyzer result".to_string()))
    );
}

#[tokio::test]
async fn test_switching_modes_preserves_each_sessions_image() {
    let mut studio = build_studio(MockStyleClient::new(), MockPoseClient::new());

    studio.select_image(large_jpeg(), "image/jpeg");
    studio.switch_mode(Mode::Poses);
    assert!(studio.active_session().image.is_none());

    studio.switch_mode(Mode::Analyzer);
    assert!(studio.active_session().image.is_some());
}

#[tokio::test]
async fn test_select_image_from_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reference.jpg");
    std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0x01, 0x02]).unwrap();

    let mut studio = build_studio(MockStyleClient::new(), MockPoseClient::new());
    studio.select_image_from_path(&path).await;

    let image = studio.session(Mode::Analyzer).image.as_ref().unwrap();
    assert_eq!(image.media_type, MediaType::Jpeg);
    assert_eq!(image.bytes.len(), 6);
    assert!(studio.alert().is_none());
}

#[tokio::test]
async fn test_select_image_from_unsupported_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animation.gif");
    std::fs::write(&path, b"GIF89a").unwrap();

    let mut studio = build_studio(MockStyleClient::new(), MockPoseClient::new());
    studio.select_image_from_path(&path).await;

    assert!(studio.session(Mode::Analyzer).image.is_none());
    assert_eq!(studio.take_alert().unwrap().title, "Invalid Format");
}

#[tokio::test]
async fn test_unreadable_file_surfaces_upload_failed_alert() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");

    let mut studio = build_studio(MockStyleClient::new(), MockPoseClient::new());
    studio.select_image_from_path(&path).await;

    assert!(studio.session(Mode::Analyzer).image.is_none());
    assert_eq!(studio.take_alert().unwrap().title, "Upload Failed");
}

#[tokio::test]
async fn test_failed_resubmission_clears_prior_success() {
    // Unified clear-before-call policy: a failed re-submission never leaves
    // a stale success artifact, in either mode.
    let style = MockStyleClient::new()
        .with_response("first success".to_string())
        .with_error("network down".to_string());
    let mut studio = build_studio(style, MockPoseClient::new());

    studio.select_image(large_jpeg(), "image/jpeg");
    studio.submit().await;
    assert!(studio.session(Mode::Analyzer).result.is_some());

    studio.submit().await;
    assert!(studio.session(Mode::Analyzer).result.is_none());
}
