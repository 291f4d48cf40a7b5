use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::shell::Shell;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppContext>().config();
    use_context_provider(|| Shell::new(config.muted_on_launch));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Math Adventure" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
