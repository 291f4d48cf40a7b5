use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::shell::Shell;
use crate::views::ViewError;
use crate::vm::AuthMode;

/// Fields and submit action behind the sign-in form.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct AuthForm {
    pub mode: Signal<AuthMode>,
    pub name: Signal<String>,
    pub password: Signal<String>,
    pub error: Signal<Option<ViewError>>,
    pub busy: Signal<bool>,
    pub submit: Callback<()>,
}

pub(crate) fn use_auth_form() -> AuthForm {
    let ctx = use_context::<AppContext>();
    let mut shell = use_context::<Shell>();
    let navigator = use_navigator();

    let mode = use_signal(AuthMode::default);
    let name = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error = use_signal(|| None::<ViewError>);
    let mut busy = use_signal(|| false);

    use_effect(move || {
        if shell.is_signed_in() {
            navigator.replace(Route::Menu {});
        }
    });

    let submit = use_callback(move |()| {
        if *busy.peek() {
            return;
        }
        let current_mode = *mode.peek();
        let username = name.peek().trim().to_owned();
        if username.is_empty() {
            error.set(Some(ViewError::EmptyName));
            return;
        }
        let secret = password.peek().clone();
        error.set(None);
        busy.set(true);

        let auth = ctx.auth();
        let game_loop = ctx.game_loop();
        spawn(async move {
            let secret = (!secret.is_empty()).then_some(secret.as_str());
            let result = match current_mode {
                AuthMode::Login => auth.login(&username, secret).await,
                AuthMode::Register => auth.register(&username, secret).await,
            };
            match result {
                Ok(user) => {
                    shell.say(&current_mode.greeting(user.username()));
                    let progress = game_loop.load_progress(user.username()).await;
                    shell.sign_in(user, progress);
                    busy.set(false);
                    navigator.replace(Route::Menu {});
                }
                Err(err) => {
                    let view_error = ViewError::from(&err);
                    shell.say(view_error.message());
                    error.set(Some(view_error));
                    busy.set(false);
                }
            }
        });
    });

    AuthForm {
        mode,
        name,
        password,
        error,
        busy,
        submit,
    }
}

#[component]
pub fn AuthView() -> Element {
    let form = use_auth_form();
    rsx! {
        AuthCard { form }
    }
}

#[component]
pub(crate) fn AuthCard(form: AuthForm) -> Element {
    let AuthForm {
        mut mode,
        mut name,
        mut password,
        mut error,
        busy,
        submit,
    } = form;
    let current_mode = *mode.read();
    let current_error = *error.read();
    let is_busy = *busy.read();

    rsx! {
        div { class: "auth-card",
            h1 { class: "auth-title", "{current_mode.title()}" }
            form {
                class: "auth-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit.call(());
                },
                label { r#for: "username", "Player name" }
                input {
                    id: "username",
                    r#type: "text",
                    placeholder: "Super Kid",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                label { r#for: "password", "Secret password (optional)" }
                input {
                    id: "password",
                    r#type: "password",
                    placeholder: "••••••••",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(err) = current_error {
                    p { class: "auth-error", role: "alert", "{err.message()}" }
                }
                button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: is_busy,
                    if is_busy {
                        span { class: "spinner" }
                        "Please wait..."
                    } else {
                        "{current_mode.submit_label()}"
                    }
                }
            }
            button {
                class: "auth-switch",
                r#type: "button",
                onclick: move |_| {
                    mode.set(current_mode.toggled());
                    error.set(None);
                },
                "{current_mode.switch_label()}"
            }
        }
    }
}
