use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

mod config;
mod contact;
mod scroll;
mod components {
    pub mod contact_form;
    pub mod notification;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <section style="padding: 10rem 2rem; text-align: center;">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="nav-link">
                {"Back to the home page"}
            </Link<Route>>
        </section>
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("practice-areas", "Practice Areas"),
    ("about", "About"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    // Header treatment follows the scroll position.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(win) = web_sys::window() {
                        let scroll_y = win.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll::header_is_scrolled(scroll_y));
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Growing the viewport past the breakpoint closes the burger menu.
    {
        let menu_open = menu_open.clone();
        use_event_with_window("resize", move |_: web_sys::Event| {
            let width = web_sys::window()
                .and_then(|win| win.inner_width().ok())
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
            if !scroll::menu_open_after_resize(*menu_open, width) {
                menu_open.set(false);
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |target: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll::scroll_to_anchor(target);
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-menu active"
    } else {
        "nav-menu"
    };
    let burger_class = if *menu_open {
        "burger-menu is-active"
    } else {
        "burger-menu"
    };

    html! {
        <header class={classes!("header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 1000;
                        background: rgba(26, 54, 93, 0.95);
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .header.scrolled {
                        background: rgba(26, 54, 93, 0.98);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-size: 1.3rem;
                        text-decoration: none;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.9);
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 26px;
                        height: 3px;
                        background: #fff;
                        transition: transform 0.3s ease;
                    }
                    .burger-menu.is-active span:nth-child(2) {
                        opacity: 0;
                    }
                    @media (max-width: 968px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-menu {
                            position: absolute;
                            top: 100%;
                            left: 0;
                            width: 100%;
                            flex-direction: column;
                            align-items: center;
                            padding: 1.5rem 0;
                            background: rgba(26, 54, 93, 0.98);
                            display: none;
                        }
                        .nav-menu.active {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={nav_link("home")}>
                    {"Sterling Legal"}
                </a>
                <button class={burger_class} onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(target, label)| html! {
                            <a
                                key={*target}
                                href={format!("#{target}")}
                                class="nav-link"
                                onclick={nav_link(*target)}
                            >
                                {*label}
                            </a>
                        }).collect::<Html>()
                    }
                </nav>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
