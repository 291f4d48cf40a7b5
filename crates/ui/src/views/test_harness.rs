use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::document::{Document, Eval, NoOpDocument};
use dioxus::history::{History, MemoryHistory};
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use math_core::model::{OperationKind, Progress, User};
use math_core::time::fixed_clock;
use services::{AppServices, AuthService, GameLoopService, GameTiming, SyncStatus};
use storage::repository::Storage;

use crate::context::{AppConfig, UiApp, build_app_context};
use crate::routes::use_sign_out;
use crate::shell::Shell;
use crate::views::auth::{AuthCard, AuthForm, use_auth_form};
use crate::views::game::{GameBoard, GameController, use_game_controller};
use crate::views::sync_banner::{Resync, use_resync};
use crate::views::MenuView;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    muted: bool,
}

impl UiApp for TestApp {
    fn config(&self) -> AppConfig {
        AppConfig {
            muted_on_launch: self.muted,
            timing: GameTiming::immediate(),
        }
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn game_loop(&self) -> Arc<GameLoopService> {
        self.services.game_loop()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Auth,
    Menu,
    Game(OperationKind),
}

/// Who is signed in when the view first renders.
#[derive(Clone, Default)]
pub struct Player {
    pub user: Option<User>,
    pub progress: Progress,
    pub sync: SyncStatus,
}

impl Player {
    pub fn signed_in(name: &str, progress: Progress) -> Self {
        Self {
            user: Some(User::new(name, None).expect("valid user")),
            progress,
            sync: SyncStatus::Synced,
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct HarnessOptions {
    pub unmuted: bool,
    /// Delay added to every service call.
    pub latency: Duration,
}

/// Every script the screens handed to the webview, in order.
#[derive(Clone, Default)]
pub struct SpeechLog(Rc<RefCell<Vec<String>>>);

impl SpeechLog {
    pub fn scripts(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.0.borrow().last().cloned()
    }
}

struct RecordingDocument {
    log: SpeechLog,
}

impl Document for RecordingDocument {
    fn eval(&self, js: String) -> Eval {
        self.log.0.borrow_mut().push(js);
        NoOpDocument.eval(String::new())
    }
}

/// Hooks registered by the harness so tests can act like the player.
#[derive(Clone, Default)]
pub struct HarnessHandles {
    shell: Rc<RefCell<Option<Shell>>>,
    game: Rc<RefCell<Option<GameController>>>,
    auth: Rc<RefCell<Option<AuthForm>>>,
    resync: Rc<RefCell<Option<Resync>>>,
    sign_out: Rc<RefCell<Option<Callback<()>>>>,
}

impl HarnessHandles {
    pub fn shell(&self) -> Shell {
        self.shell.borrow().expect("shell registered")
    }

    pub fn game(&self) -> GameController {
        self.game.borrow().expect("game registered")
    }

    pub fn auth(&self) -> AuthForm {
        self.auth.borrow().expect("auth registered")
    }

    pub fn resync(&self) -> Resync {
        self.resync.borrow().expect("resync registered")
    }

    pub fn sign_out(&self) -> Callback<()> {
        self.sign_out.borrow().expect("sign out registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    player: Player,
    speech: SpeechLog,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let player = props.player.clone();
    let shell = use_context_provider(move || {
        let mut shell = Shell::new(ctx.config().muted_on_launch);
        if let Some(user) = player.user {
            shell.sign_in(user, player.progress);
        }
        shell.sync.set(player.sync);
        shell
    });
    let speech = props.speech.clone();
    use_context_provider(move || Rc::new(RecordingDocument { log: speech }) as Rc<dyn Document>);
    use_context_provider(|| Rc::new(MemoryHistory::with_initial_path("/view")) as Rc<dyn History>);
    use_context_provider(|| props.view);
    let handles = use_context_provider(|| props.handles.clone());
    use_hook(|| *handles.shell.borrow_mut() = Some(shell));

    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    SignInStub {},
    #[route("/menu")]
    MenuStub {},
    #[route("/view")]
    Root {},
}

#[component]
fn SignInStub() -> Element {
    rsx! { p { class: "screen", "sign-in screen" } }
}

#[component]
fn MenuStub() -> Element {
    rsx! { p { class: "screen", "menu screen" } }
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let handles = use_context::<HarnessHandles>();
    let sign_out = use_sign_out();
    let resync = use_resync();
    use_hook(|| {
        *handles.sign_out.borrow_mut() = Some(sign_out);
        *handles.resync.borrow_mut() = Some(resync);
    });

    match view {
        ViewKind::Auth => rsx! { ControlledAuth {} },
        ViewKind::Menu => rsx! { MenuView {} },
        ViewKind::Game(operation) => rsx! { ControlledGame { operation } },
    }
}

#[component]
fn ControlledAuth() -> Element {
    let handles = use_context::<HarnessHandles>();
    let form = use_auth_form();
    use_hook(|| *handles.auth.borrow_mut() = Some(form));
    rsx! { AuthCard { form } }
}

#[component]
fn ControlledGame(operation: OperationKind) -> Element {
    let handles = use_context::<HarnessHandles>();
    let game = use_game_controller(operation);
    use_hook(|| *handles.game.borrow_mut() = Some(game));
    rsx! { GameBoard { operation, game } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: AppServices,
    pub handles: HarnessHandles,
    pub speech: SpeechLog,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let timers and spawned service calls run to completion.
    pub async fn settle(&mut self) {
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, player: Player) -> ViewHarness {
    setup_view_harness_with(view, player, HarnessOptions::default())
}

pub fn setup_view_harness_with(
    view: ViewKind,
    player: Player,
    options: HarnessOptions,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = AppServices::from_storage_with_latency(&storage, fixed_clock(), options.latency);
    let app = Arc::new(TestApp {
        services: services.clone(),
        muted: !options.unmuted,
    });
    let speech = SpeechLog::default();
    let handles = HarnessHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            player,
            speech: speech.clone(),
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        services,
        handles,
        speech,
    }
}
