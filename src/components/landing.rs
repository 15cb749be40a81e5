use yew::prelude::*;

use crate::site::site_info;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_enter: Callback<MouseEvent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let site = site_info();
    let background = site
        .background_url
        .as_deref()
        .map(|url| format!("background-image: url('{url}'); background-size: cover; background-position: center;"))
        .unwrap_or_default();

    html! {
        <div style={format!("min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 16px; {background}")}>
            <h1 style="font-size: clamp(36px, 6vw, 60px); font-weight: 800; margin: 0 0 16px 0; color: #1d4ed8;">
                { site.course.clone() }
            </h1>
            <p style="font-size: 22px; margin: 0 0 8px 0; color: #334155;">{ site.term.clone() }</p>
            <p style="font-size: 18px; margin: 0 0 32px 0; color: #475569;">{ site.group.clone() }</p>
            <button
                onclick={props.on_enter.clone()}
                style="background: #2563eb; color: #fff; font-size: 18px; padding: 16px 32px; border: none; border-radius: 16px; cursor: pointer; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);"
            >
                {"Entrar a la Bitácora"}
            </button>
        </div>
    }
}
