use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Event, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::scroll::Viewport;
use crate::stage::table::NAV_TARGETS;

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuState {
    Closed,
    Open,
    /// Fading out, unmounted once the fade completes.
    Closing,
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu = use_state_eq(|| MenuState::Closed);
    let is_scrolled = use_state_eq(|| false);
    let fade_out = use_mut_ref(|| None::<Timeout>);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            is_scrolled.set(scroll_y > config::NAV_SCROLLED_THRESHOLD);
        });
    }

    let close_menu = {
        let menu = menu.clone();
        let fade_out = fade_out.clone();
        Callback::from(move |_: ()| {
            if *menu != MenuState::Open {
                return;
            }
            menu.set(MenuState::Closing);
            let menu = menu.clone();
            *fade_out.borrow_mut() = Some(Timeout::new(config::MENU_FADE_MS, move || {
                menu.set(MenuState::Closed);
            }));
        })
    };

    let toggle_menu = {
        let menu = menu.clone();
        let fade_out = fade_out.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *menu == MenuState::Open {
                close_menu.emit(());
            } else {
                // Reopening mid-fade keeps the overlay mounted.
                fade_out.borrow_mut().take();
                menu.set(MenuState::Open);
            }
        })
    };

    let go_to_top = {
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| {
            smooth_scroll_to(0.0);
            close_menu.emit(());
        })
    };

    let is_open = *menu == MenuState::Open;

    html! {
        <>
            <header class={classes!("site-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="site-nav-bar">
                    <button class="site-nav-logo" onclick={go_to_top}>
                        {"Studio Arch"}
                    </button>

                    <button class="site-nav-toggle" aria-label="Menu" onclick={toggle_menu}>
                        <span class={classes!("toggle-icon", is_open.then(|| "open"))}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </span>
                    </button>
                </div>
            </header>

            {
                if *menu != MenuState::Closed {
                    html! {
                        <div class={classes!("menu-overlay", (*menu == MenuState::Closing).then(|| "closing"))}>
                            <nav class="menu-items">
                                { for NAV_TARGETS.iter().enumerate().map(|(index, target)| {
                                    let close_menu = close_menu.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        let top = target.scroll_top(Viewport::current().height);
                                        debug!("Jumping to {} at {}px", target.label, top);
                                        smooth_scroll_to(top);
                                        close_menu.emit(());
                                    });
                                    html! {
                                        <div
                                            key={target.label}
                                            class="menu-item"
                                            style={format!("animation-delay: {}s;", index as f64 * 0.1)}
                                        >
                                            <button {onclick}>{target.label}</button>
                                        </div>
                                    }
                                }) }
                            </nav>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    opacity: 0;
                    animation: navFadeIn 0.4s ease-out 0.5s forwards;
                    transition: background 0.3s ease, backdrop-filter 0.3s ease;
                }

                .site-nav.scrolled {
                    background: rgba(250, 250, 248, 0.8);
                    backdrop-filter: blur(12px);
                }

                .site-nav-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 2rem;
                }

                .site-nav-logo, .menu-item button {
                    background: none;
                    border: none;
                    padding: 0;
                    color: inherit;
                    cursor: pointer;
                    font-family: var(--serif);
                    transition: color 0.3s ease;
                }

                .site-nav-logo {
                    font-size: 1.5rem;
                }

                .site-nav-logo:hover, .menu-item button:hover {
                    color: var(--muted);
                }

                .site-nav-toggle {
                    width: 3rem;
                    height: 3rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: inherit;
                }

                .toggle-icon {
                    display: inline-flex;
                    flex-direction: column;
                    gap: 5px;
                    transition: transform 0.3s ease;
                }

                .toggle-icon span {
                    display: block;
                    width: 24px;
                    height: 1.5px;
                    background: currentColor;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .toggle-icon.open {
                    transform: rotate(90deg);
                }

                .toggle-icon.open span:nth-child(1) {
                    transform: translateY(6.5px) rotate(45deg);
                }

                .toggle-icon.open span:nth-child(2) {
                    opacity: 0;
                }

                .toggle-icon.open span:nth-child(3) {
                    transform: translateY(-6.5px) rotate(-45deg);
                }

                .menu-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 30;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--background);
                    animation: overlayIn 0.3s ease forwards;
                }

                .menu-overlay.closing {
                    animation: overlayOut 0.3s ease forwards;
                }

                .menu-items {
                    text-align: center;
                }

                .menu-item {
                    margin: 2rem 0;
                    opacity: 0;
                    animation: itemIn 0.4s ease-out forwards;
                }

                .menu-item button {
                    font-size: 3.75rem;
                }

                @keyframes navFadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes overlayIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes overlayOut {
                    from { opacity: 1; }
                    to { opacity: 0; }
                }

                @keyframes itemIn {
                    from { opacity: 0; transform: translateX(-20px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @media (max-width: 768px) {
                    .site-nav-bar { padding: 1.5rem; }
                    .site-nav-logo { font-size: 1.25rem; }
                    .menu-item button { font-size: 1.875rem; }
                    .menu-item { margin: 1.5rem 0; }
                }
                "#}
            </style>
        </>
    }
}
