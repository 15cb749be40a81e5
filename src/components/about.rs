use yew::prelude::*;

use super::style;
use super::video::VideoPlayer;
use crate::model::TeamMember;
use crate::site::{site_info, team};

/// "Nosotros": who put the logbook together. Each member opens their reflection video.
#[function_component(About)]
pub fn about() -> Html {
    let members = team();
    let selected = use_state(|| None::<usize>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |idx: usize| selected.set(Some(idx)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let opened = (*selected).and_then(|i| members.get(i));

    html! {
        <div style={format!("{} padding: 40px 16px;", style::MAX_WIDTH)}>
            <h2 style="font-size: 30px; font-weight: 600; margin: 0 0 24px 0;">{"Nosotros"}</h2>
            <p style="color: #404040; margin: 0 0 24px 0; line-height: 1.6;">{ site_info().about.clone() }</p>

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 16px;">
                { for members.iter().enumerate().map(|(i, m)| member_card(i, m, &on_select)) }
            </div>

            {
                match opened {
                    Some(member) => html! {
                        <div style={style::overlay()}>
                            <div style={style::dialog()}>
                                <button onclick={on_close} style={style::close_btn()} aria-label="Cerrar">{"×"}</button>
                                <h2 style="font-size: 20px; font-weight: 700; margin: 0 0 16px 0;">{ member.name.clone() }</h2>
                                {
                                    match member.video_url.as_deref() {
                                        Some(url) => html! { <VideoPlayer url={url.to_string()} /> },
                                        None => html! {
                                            <div style="font-size: 13px; opacity: 0.6;">{"Sin video disponible."}</div>
                                        },
                                    }
                                }
                            </div>
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

fn member_card(idx: usize, member: &TeamMember, on_select: &Callback<usize>) -> Html {
    let onclick = {
        let on_select = on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(idx))
    };
    html! {
        <div key={member.name.clone()} {onclick} style={format!("{} cursor: pointer;", style::card())}>
            <div style="font-size: 18px; font-weight: 600; color: #1e293b; margin-bottom: 8px;">
                { member.name.clone() }
            </div>
            <img
                src={member.photo_url.clone()}
                alt={format!("Foto de {}", member.name)}
                style="width: 100%; height: 192px; object-fit: cover; border-radius: 12px; border: 1px solid #e2e8f0; background: #f1f5f9; margin-bottom: 12px;"
            />
            <p style="font-size: 14px; color: #404040; margin: 0;">
                <span style="font-weight: 500;">{"Carrera: "}</span>
                { member.career.clone() }
            </p>
        </div>
    }
}
