use yew::prelude::*;

use crate::components::navigation::Navigation;
use crate::stage::scroll_stage::ScrollStage;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <Navigation />
            <ScrollStage />
            <style>
                {r#"
                :root {
                    --background: #fafaf8;
                    --foreground: #1c1c1a;
                    --muted: #73726c;
                    --accent: #efede8;
                    --border: #dcdad4;
                    --primary: #1c1c1a;
                    --serif: "Cormorant Garamond", Georgia, serif;
                }

                html, body {
                    margin: 0;
                    padding: 0;
                    background: var(--background);
                    color: var(--foreground);
                    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }

                .home {
                    background: var(--background);
                }
                "#}
            </style>
        </div>
    }
}
