use std::time::Duration;

use math_core::model::{OperationKind, Progress, Stars};
use math_core::narration::GOODBYE_LINE;
use services::{GamePhase, SyncStatus};

use super::ViewError;
use super::test_harness::{
    HarnessOptions, Player, ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with,
};
use crate::vm::{AuthMode, map_game_screen};

fn correct_option(harness: &ViewHarness) -> u32 {
    harness.handles.game().session.peek().challenge().answer()
}

fn wrong_option(harness: &ViewHarness) -> u32 {
    let session = harness.handles.game().session;
    let session = session.peek();
    let answer = session.challenge().answer();
    session
        .challenge()
        .options()
        .iter()
        .copied()
        .find(|&option| option != answer)
        .expect("a wrong option")
}

async fn stored_stars(harness: &ViewHarness, kind: OperationKind) -> Option<u8> {
    harness
        .storage
        .progress
        .get_progress("Ana")
        .await
        .expect("read progress")
        .map(|record| record.progress.get(kind).value())
}

fn signed_in_name(harness: &ViewHarness) -> Option<String> {
    let shell = harness.handles.shell();
    let user = shell.user.peek();
    user.as_ref().map(|user| user.username().to_owned())
}

#[tokio::test(flavor = "current_thread")]
async fn correct_answer_locks_options_then_moves_up_a_level() {
    let mut harness = setup_view_harness(
        ViewKind::Game(OperationKind::Addition),
        Player::signed_in("Ana", Progress::initial()),
    );
    harness.rebuild();
    harness.settle().await;
    let game = harness.handles.game();
    assert_eq!(game.session.peek().phase(), GamePhase::AwaitingAnswer);

    let answer = correct_option(&harness);
    game.answer.call(answer);
    {
        let session = game.session.peek();
        assert_eq!(session.phase(), GamePhase::CorrectFeedback);
        let vm = map_game_screen(&session);
        assert_eq!(vm.feedback, Some("Correct!"));
        assert!(vm.options.iter().all(|option| option.disabled));
    }

    game.answer.call(answer);
    assert_eq!(game.session.peek().level().value(), 1);

    harness.settle().await;
    let session = game.session.peek();
    assert_eq!(session.phase(), GamePhase::AwaitingAnswer);
    assert_eq!(session.challenge().level(), 2);
    drop(session);

    let html = harness.render();
    assert_eq!(html.matches("star star--filled").count(), 1, "wrong stars in {html}");
    assert_eq!(stored_stars(&harness, OperationKind::Addition).await, Some(1));
    assert_eq!(*harness.handles.shell().sync.peek(), SyncStatus::Synced);
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_shows_try_again_and_keeps_the_challenge() {
    let mut harness = setup_view_harness(
        ViewKind::Game(OperationKind::Subtraction),
        Player::signed_in("Ana", Progress::initial()),
    );
    harness.rebuild();
    harness.settle().await;
    let game = harness.handles.game();
    let before = game.session.peek().challenge().clone();

    game.answer.call(wrong_option(&harness));
    assert_eq!(map_game_screen(&game.session.peek()).feedback, Some("Try again!"));

    harness.settle().await;
    let session = game.session.peek();
    assert_eq!(session.phase(), GamePhase::AwaitingAnswer);
    assert_eq!(session.challenge(), &before);
    assert_eq!(session.level(), Stars::ZERO);
    drop(session);

    assert_eq!(stored_stars(&harness, OperationKind::Subtraction).await, None);
}

#[tokio::test(flavor = "current_thread")]
async fn final_star_returns_to_menu_after_the_goodbye_line() {
    let progress = Progress::initial().with_recorded(OperationKind::Addition, Stars::saturating(4));
    let mut harness = setup_view_harness_with(
        ViewKind::Game(OperationKind::Addition),
        Player::signed_in("Ana", progress),
        HarnessOptions {
            unmuted: true,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    harness.settle().await;

    harness.handles.game().answer.call(correct_option(&harness));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("menu screen"), "still on the game in {html}");
    assert_eq!(stored_stars(&harness, OperationKind::Addition).await, Some(5));
    assert_eq!(
        harness.handles.shell().progress.peek().get(OperationKind::Addition),
        Stars::MAX
    );

    let scripts = harness.speech.scripts();
    assert!(
        scripts.iter().any(|script| script.contains("finished every addition challenge")),
        "no completion line in {scripts:?}"
    );
    let last = harness.speech.last().expect("something was said");
    assert!(last.contains("Great job, Ana!"), "last script was {last}");
}

#[tokio::test(flavor = "current_thread")]
async fn closing_before_the_save_lands_still_stores_the_star() {
    let mut harness = setup_view_harness_with(
        ViewKind::Game(OperationKind::Counting),
        Player::signed_in("Ana", Progress::initial()),
        HarnessOptions {
            latency: Duration::from_millis(40),
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    harness.settle().await;

    let game = harness.handles.game();
    game.answer.call(correct_option(&harness));
    game.close.call(());
    harness.drive();

    let html = harness.render();
    assert!(html.contains("menu screen"), "game screen still mounted in {html}");
    assert_eq!(stored_stars(&harness, OperationKind::Counting).await, None);

    harness.settle().await;
    assert_eq!(stored_stars(&harness, OperationKind::Counting).await, Some(1));
    assert_eq!(*harness.handles.shell().sync.peek(), SyncStatus::Synced);
}

#[tokio::test(flavor = "current_thread")]
async fn retry_clears_the_unsaved_warning() {
    let progress = Progress::initial().with_recorded(OperationKind::Addition, Stars::saturating(2));
    let mut player = Player::signed_in("Ana", progress);
    player.sync = SyncStatus::Failed;
    let mut harness = setup_view_harness(ViewKind::Menu, player);
    harness.rebuild();
    assert!(harness.render().contains("sync-warning"));

    harness.handles.resync().retry.call(());
    harness.settle().await;

    assert_eq!(*harness.handles.shell().sync.peek(), SyncStatus::Synced);
    assert_eq!(stored_stars(&harness, OperationKind::Addition).await, Some(2));
    let html = harness.render();
    assert!(!html.contains("sync-warning"), "warning still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn register_signs_in_and_opens_the_menu() {
    let mut harness = setup_view_harness(ViewKind::Auth, Player::default());
    harness.rebuild();

    let mut form = harness.handles.auth();
    harness.dom.in_runtime(|| {
        form.mode.set(AuthMode::Register);
        form.name.set("  Ana ".to_string());
    });
    form.submit.call(());
    harness.settle().await;

    assert_eq!(signed_in_name(&harness).as_deref(), Some("Ana"));
    assert_eq!(*harness.handles.shell().progress.peek(), Progress::initial());
    let user = harness.storage.users.get_user("Ana").await.expect("read user");
    assert!(user.is_some(), "account was not stored");
    assert_eq!(stored_stars(&harness, OperationKind::Counting).await, Some(0));

    let html = harness.render();
    assert!(html.contains("menu screen"), "not on the menu in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn register_with_a_taken_name_shows_the_error() {
    let mut harness = setup_view_harness(ViewKind::Auth, Player::default());
    harness
        .services
        .auth()
        .register("Ana", None)
        .await
        .expect("first registration");
    harness.rebuild();

    let mut form = harness.handles.auth();
    harness.dom.in_runtime(|| {
        form.mode.set(AuthMode::Register);
        form.name.set("Ana".to_string());
    });
    form.submit.call(());
    harness.settle().await;

    assert_eq!(*form.error.peek(), Some(ViewError::UsernameTaken));
    assert!(!*form.busy.peek());
    assert_eq!(signed_in_name(&harness), None);
    let html = harness.render();
    assert!(html.contains("This player name already exists."), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn blank_name_is_rejected_without_a_service_call() {
    let mut harness = setup_view_harness(ViewKind::Auth, Player::default());
    harness.rebuild();

    let form = harness.handles.auth();
    form.submit.call(());

    assert_eq!(*form.error.peek(), Some(ViewError::EmptyName));
    assert!(!*form.busy.peek());
}

#[tokio::test(flavor = "current_thread")]
async fn sign_out_from_the_game_resets_progress_and_keeps_the_goodbye() {
    let progress = Progress::initial().with_recorded(OperationKind::Addition, Stars::saturating(3));
    let mut harness = setup_view_harness_with(
        ViewKind::Game(OperationKind::Addition),
        Player::signed_in("Ana", progress),
        HarnessOptions {
            unmuted: true,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    harness.settle().await;

    harness.handles.sign_out().call(());
    harness.settle().await;

    let shell = harness.handles.shell();
    assert_eq!(signed_in_name(&harness), None);
    assert_eq!(*shell.progress.peek(), Progress::initial());
    assert_eq!(*shell.sync.peek(), SyncStatus::Synced);

    let html = harness.render();
    assert!(html.contains("sign-in screen"), "not signed out in {html}");
    let last = harness.speech.last().expect("something was said");
    assert!(last.contains(GOODBYE_LINE), "goodbye was cut off, last script: {last}");
}
