use log::info;
use yew::prelude::*;

mod config;
mod error;
mod motion;
mod scroll;
mod stage {
    pub mod driver;
    pub mod scroll_stage;
    pub mod sections;
    pub mod table;
}
mod components {
    pub mod navigation;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
