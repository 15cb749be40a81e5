use yew::prelude::*;

use super::style;
use crate::route::Route;
use crate::site::site_info;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Landing))
    };

    html! {
        <div style="position: sticky; top: 0; z-index: 30; color: #fff; background: linear-gradient(90deg, #3b82f6, #6366f1); box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15);">
            <div style={format!("{} padding: 12px 16px; display: flex; align-items: center; gap: 8px;", style::MAX_WIDTH)}>
                <div
                    onclick={go_home}
                    title="Volver a la portada"
                    style="display: flex; align-items: center; gap: 8px; font-weight: 600; font-size: 18px; cursor: pointer; user-select: none;"
                >
                    <span aria-hidden="true">{ Route::Landing.icon() }</span>
                    <span>{ site_info().title.clone() }</span>
                </div>
                <div style="margin-left: auto; display: flex; align-items: center; gap: 8px;">
                    { for Route::NAV.into_iter().map(|r| {
                        let is_active = props.current == r;
                        let on_navigate = props.on_navigate.clone();
                        html! {
                            <button
                                style={style::nav_btn(is_active)}
                                aria-current={if is_active { "page" } else { "false" }}
                                onclick={Callback::from(move |_| on_navigate.emit(r))}
                            >
                                <span aria-hidden="true">{ r.icon() }</span>
                                <span>{ r.label() }</span>
                            </button>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
