use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::notification::{replace_slot, Notification, NotificationRequest, Severity};
use crate::scroll;

const PRACTICE_AREAS: &[(&str, &str)] = &[
    (
        "Corporate Law",
        "Formation, governance and contract work for businesses of every size.",
    ),
    (
        "Civil Litigation",
        "Representation through negotiation, mediation and trial.",
    ),
    (
        "Real Estate",
        "Purchases, leases and disputes for residential and commercial property.",
    ),
    (
        "Estate Planning",
        "Wills, trusts and succession planning tailored to your family.",
    ),
];

/// Watches elements tagged for reveal-on-scroll and adds the `animate` class
/// the first time they intersect the viewport.
fn observe_reveals(
    document: &web_sys::Document,
) -> Option<(
    IntersectionObserver,
    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
)> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("animate");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    if let Ok(targets) = document.query_selector_all(".fade-in-up, .fade-in-right") {
        for index in 0..targets.length() {
            if let Some(element) = targets
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                observer.observe(&element);
            }
        }
    }

    Some((observer, callback))
}

#[function_component(Home)]
pub fn home() -> Html {
    // Single live notification slot; a new request replaces the old one.
    let toast = use_state(|| None::<NotificationRequest>);
    let toast_seq = use_mut_ref(|| 0u32);

    let notify = {
        let toast = toast.clone();
        let toast_seq = toast_seq.clone();
        Callback::from(move |(message, severity): (String, Severity)| {
            let request = replace_slot(&mut toast_seq.borrow_mut(), message, severity);
            toast.set(Some(request));
        })
    };

    let on_toast_closed = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    // Scroll to top on initial mount.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Reveal-on-scroll observer, disconnected when the page unmounts.
    {
        use_effect_with_deps(
            move |_| {
                let watcher = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| observe_reveals(&document));
                move || {
                    if let Some((observer, callback)) = watcher {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            (),
        );
    }

    let scroll_to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_anchor("contact");
    });

    html! {
        <div class="home">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 8rem 2rem 4rem;
                        background: linear-gradient(rgba(26, 54, 93, 0.92), rgba(26, 54, 93, 0.92));
                        color: #fff;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .hero p {
                        font-size: 1.3rem;
                        color: rgba(255, 255, 255, 0.85);
                        margin-bottom: 2rem;
                    }
                    .btn-primary {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        border: none;
                        border-radius: 8px;
                        background: #c9a227;
                        color: #1a365d;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }
                    section {
                        padding: 5rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    section h2 {
                        font-size: 2.2rem;
                        color: #1a365d;
                        margin-bottom: 2rem;
                        text-align: center;
                    }
                    .practice-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                    }
                    .practice-card {
                        padding: 2rem;
                        border: 1px solid #e2e8f0;
                        border-radius: 10px;
                        background: #fff;
                    }
                    .practice-card h3 {
                        color: #1a365d;
                        margin-bottom: 0.75rem;
                    }
                    .fade-in-up {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in-right {
                        opacity: 0;
                        transform: translateX(-30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in-up.animate,
                    .fade-in-right.animate {
                        opacity: 1;
                        transform: translate(0, 0);
                    }
                    .contact-form {
                        max-width: 560px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .form-group {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                    }
                    .form-group label {
                        color: #1a365d;
                        font-weight: 600;
                    }
                    .form-group input,
                    .form-group select,
                    .form-group textarea {
                        padding: 0.75rem;
                        border: 1px solid #cbd5e0;
                        border-radius: 6px;
                        font-size: 1rem;
                    }
                    .btn-submit {
                        padding: 1rem;
                        border: none;
                        border-radius: 8px;
                        background: #1a365d;
                        color: #fff;
                        font-size: 1.05rem;
                        cursor: pointer;
                    }
                    .btn-submit:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    .site-footer {
                        padding: 2rem;
                        text-align: center;
                        background: #1a365d;
                        color: rgba(255, 255, 255, 0.8);
                    }
                "#}
            </style>

            <section id="home" class="hero">
                <div>
                    <h1>{"Alexander Sterling"}</h1>
                    <p>{"Trusted counsel for individuals and businesses for over two decades."}</p>
                    <button class="btn-primary" onclick={scroll_to_contact}>
                        {"Request a Consultation"}
                    </button>
                </div>
            </section>

            <section id="practice-areas">
                <h2 class="fade-in-up">{"Practice Areas"}</h2>
                <div class="practice-grid">
                    {
                        PRACTICE_AREAS.iter().map(|(title, blurb)| html! {
                            <div key={*title} class="practice-card fade-in-up">
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="about">
                <h2 class="fade-in-up">{"About"}</h2>
                <p class="fade-in-right">
                    {"Every matter gets the same treatment: plain advice, honest \
                      assessment of the odds, and a clear plan before any work is \
                      billed. Most initial consultations are answered within one \
                      business day."}
                </p>
            </section>

            <section id="contact">
                <h2 class="fade-in-up">{"Get in Touch"}</h2>
                <ContactForm on_notify={notify} />
            </section>

            <footer class="site-footer">
                <p>{"© 2026 Alexander Sterling Legal Services"}</p>
            </footer>

            {
                (*toast).clone().map(|request| html! {
                    <Notification
                        key={request.id.to_string()}
                        message={request.message}
                        severity={request.severity}
                        on_closed={on_toast_closed}
                    />
                }).unwrap_or_default()
            }
        </div>
    }
}
