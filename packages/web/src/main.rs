use dioxus::prelude::*;

use store::ClipitConfig;
use ui::{ServicesProvider, SessionProvider, ThemeProvider};
use views::{AppShell, AuthSuccess, MyCode, NotFound, PostCreate, PostDetail, PostEdit, Protected, Root, Settings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Root {},
        #[route("/auth/success")]
        AuthSuccess {},
        #[layout(Protected)]
            #[route("/posts/new")]
            PostCreate {},
            #[route("/posts/:id")]
            PostDetail { id: String },
            #[route("/posts/:id/edit")]
            PostEdit { id: String },
            #[route("/my-code")]
            MyCode {},
            #[route("/settings")]
            Settings {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

const CONFIG_TOML: &str = include_str!("../clipit.toml");

fn main() {
    let config = ClipitConfig::from_toml_or_default(CONFIG_TOML);
    let level = config.log.level.parse().unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {e}");
    }
    tracing::info!("starting ClipIt against {}", config.api.base_url);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<ClipitConfig>();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ServicesProvider {
            config,
            SessionProvider {
                ThemeProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
