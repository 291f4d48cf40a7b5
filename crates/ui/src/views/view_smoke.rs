use math_core::model::{OperationKind, Progress, Stars};
use services::SyncStatus;

use super::test_harness::{Player, ViewKind, setup_view_harness};

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

#[tokio::test(flavor = "current_thread")]
async fn auth_view_smoke_renders_login_form() {
    let mut harness = setup_view_harness(ViewKind::Auth, Player::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Sign in"), "missing title in {html}");
    assert!(html.contains("Player name"), "missing name label in {html}");
    assert!(html.contains("Secret password (optional)"), "missing password label in {html}");
    assert!(html.contains("Play!"), "missing submit in {html}");
    assert!(html.contains("No account yet?"), "missing switch in {html}");
    assert!(!html.contains("auth-error"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_renders_tiles_and_stars() {
    let progress = Progress::initial()
        .with_recorded(OperationKind::Addition, Stars::saturating(2))
        .with_recorded(OperationKind::Multiplication, Stars::MAX);
    let mut harness = setup_view_harness(ViewKind::Menu, Player::signed_in("Ana", progress));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Player: Ana"), "missing player in {html}");
    for kind in OperationKind::ALL {
        assert!(html.contains(kind.label()), "missing {} in {html}", kind.label());
    }
    assert!(html.contains("2 of 5 stars"), "missing addition stars in {html}");
    assert!(html.contains("5 of 5 stars"), "missing multiplication stars in {html}");
    assert_eq!(count(&html, "star star--filled"), 7, "wrong filled stars in {html}");
    assert!(!html.contains("sync-warning"), "unexpected warning in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_shows_unsaved_warning() {
    let mut player = Player::signed_in("Ana", Progress::initial());
    player.sync = SyncStatus::Failed;
    let mut harness = setup_view_harness(ViewKind::Menu, player);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("not saved yet"), "missing warning in {html}");
    assert!(html.contains("Try again"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_four_options() {
    let progress = Progress::initial().with_recorded(OperationKind::Addition, Stars::saturating(1));
    let mut harness = setup_view_harness(
        ViewKind::Game(OperationKind::Addition),
        Player::signed_in("Ana", progress),
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Addition"), "missing title in {html}");
    assert!(html.contains("= ?"), "missing prompt in {html}");
    assert_eq!(count(&html, "answer op-addition"), 4, "wrong options in {html}");
    assert_eq!(count(&html, "star star--filled"), 1, "wrong stars in {html}");
    assert!(html.contains("Close challenge"), "missing close in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_counting_picture() {
    let mut harness = setup_view_harness(
        ViewKind::Game(OperationKind::Counting),
        Player::signed_in("Ana", Progress::initial()),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    let pictures = count(&html, "picture-item");
    assert!((1..=4).contains(&pictures), "level-one counting shows 1-4 items: {html}");
    assert_eq!(count(&html, "answer op-counting"), 4, "wrong options in {html}");
}
