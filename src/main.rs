// src/main.rs
mod config;
mod convert;
mod error;
mod platform;
mod state;

use gloo::console;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::{ConverterAction, ConverterState, Outcome};

const ICON_ARROW: &str = "M17 8l4 4m0 0l-4 4m4-4H3";
const ICON_ALERT: &str = "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";
const ICON_COPY: &str = "M8 16H6a2 2 0 01-2-2V6a2 2 0 012-2h8a2 2 0 012 2v2m-6 12h8a2 2 0 002-2v-8a2 2 0 00-2-2h-8a2 2 0 00-2 2v8a2 2 0 002 2z";
const ICON_EXTERNAL: &str = "M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14";

fn icon(d: &'static str) -> Html {
    html! {
        <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={d} />
        </svg>
    }
}

#[function_component(App)]
fn app() -> Html {
    let cfg = use_memo((), |_| platform::load_config());
    let state = use_reducer(ConverterState::default);

    // Pending "Copied!" reset; replacing it drops (cancels) the previous one.
    let copy_timer = use_mut_ref(|| None::<Timeout>);
    let copy_epoch = use_mut_ref(|| 0u64);

    {
        use_effect_with(state.outcome.clone(), |outcome| {
            match outcome {
                Outcome::Result(url) => console::log!(format!("converted -> {url}")),
                Outcome::Error(msg) => console::warn!(format!("convert failed: {msg}")),
                Outcome::Idle => {}
            }
            || ()
        });
    }

    let on_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ConverterAction::SetInput(input.value()));
        })
    };

    let on_convert = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ConverterAction::Convert))
    };

    let on_copy = {
        let state = state.clone();
        let copy_timer = copy_timer.clone();
        let copy_epoch = copy_epoch.clone();
        let reset_ms = cfg.copied_reset_ms;
        Callback::from(move |_: MouseEvent| {
            // Nothing to copy until a conversion succeeded.
            let Some(url) = state.output().map(str::to_string) else {
                return;
            };
            let epoch = {
                let mut n = copy_epoch.borrow_mut();
                *n += 1;
                *n
            };
            let state = state.clone();
            let copy_timer = copy_timer.clone();
            spawn_local(async move {
                match platform::copy_to_clipboard(url).await {
                    Ok(()) => {
                        console::log!("copied pages url");
                        state.dispatch(ConverterAction::CopySucceeded { epoch });
                        let reset = state.clone();
                        let timeout = Timeout::new(reset_ms, move || {
                            reset.dispatch(ConverterAction::CopyReset { epoch });
                        });
                        *copy_timer.borrow_mut() = Some(timeout);
                    }
                    Err(_) => state.dispatch(ConverterAction::CopyFailed),
                }
            });
        })
    };

    let on_visit = {
        let url = state.output().map(str::to_string);
        Callback::from(move |_: MouseEvent| {
            if let Some(url) = &url {
                platform::open_in_new_tab(url);
            }
        })
    };

    html! {
        <main class="page">
            <div class="card">
                <div class="header">
                    <h1>{ cfg.title.clone() }</h1>
                    <p class="sub">{"Convert your GitHub repository URL to its GitHub Pages URL"}</p>
                </div>

                <div class="stack">
                    <div class="row">
                        <input
                            type="text"
                            placeholder={cfg.placeholder.clone()}
                            value={state.input.clone()}
                            oninput={on_input}
                        />
                        <button class="primary" onclick={on_convert}>
                            {"Convert"}
                            { icon(ICON_ARROW) }
                        </button>
                    </div>

                    {
                        if let Some(err) = state.error() {
                            html! {
                                <div class="alert">
                                    { icon(ICON_ALERT) }
                                    <span>{ err }</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    {
                        if let Some(url) = state.output() {
                            html! {
                                <div class="result">
                                    <div class="label">{"GitHub Pages URL:"}</div>
                                    <div class="row">
                                        <code class="url">{ url }</code>
                                        <button
                                            class={classes!("ghost", state.copied.then_some("copied"))}
                                            onclick={on_copy}
                                        >
                                            { icon(ICON_COPY) }
                                            <span>{ state.copy_label() }</span>
                                        </button>
                                        <button class="ghost" onclick={on_visit}>
                                            { icon(ICON_EXTERNAL) }
                                            <span>{"Visit"}</span>
                                        </button>
                                    </div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <div class="howto">
                        <p>{"How it works:"}</p>
                        <ol>
                            <li>{"Enter your GitHub repository URL"}</li>
                            <li>{"The converter extracts your username and repository name"}</li>
                            <li>{"Creates the corresponding GitHub Pages URL in the format:"}</li>
                        </ol>
                        <code class="template">{"https://username.github.io/repository"}</code>
                    </div>
                </div>
            </div>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
