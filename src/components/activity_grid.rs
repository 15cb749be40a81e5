use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use super::style;
use super::video::VideoPlayer;
use crate::catalog::Catalog;
use crate::filter::filter;
use crate::model::ActivityRecord;
use crate::selection::Selection;
use crate::tags::Tag;

#[derive(Properties, PartialEq)]
pub struct ActivityGridProps {
    pub catalog: Catalog,
}

/// Searchable card grid for one catalog plus its detail modal.
///
/// Query and selection live here, so remounting the grid (the app keys it by
/// catalog) starts every visit with an empty search and a closed modal.
#[function_component(ActivityGrid)]
pub fn activity_grid(props: &ActivityGridProps) -> Html {
    let catalog = props.catalog;
    let records = catalog.records();

    let query = use_state(String::new);
    let selection = use_state(Selection::default);

    // Escape closes the modal while it is open
    {
        let selection = selection.clone();
        use_effect_with(selection.is_open(), move |open| {
            let listener = open.then(|| {
                EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|k| k.key() == "Escape");
                    if is_escape {
                        let mut next = (*selection).clone();
                        next.dismiss();
                        selection.set(next);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_query = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
            if let Some(i) = input {
                query.set(i.value());
            }
        })
    };

    // Clicking a chip searches for that tag
    let on_tag = {
        let query = query.clone();
        Callback::from(move |tag: Tag| query.set(tag.as_str().to_string()))
    };

    let on_open = {
        let selection = selection.clone();
        Callback::from(move |id: String| {
            let mut next = (*selection).clone();
            next.select(id);
            selection.set(next);
        })
    };

    let on_close = {
        let selection = selection.clone();
        Callback::from(move |_: ()| {
            let mut next = (*selection).clone();
            next.dismiss();
            selection.set(next);
        })
    };

    let visible = filter(records, &query);
    let opened = selection.resolve(records);
    let label = catalog.label();

    html! {
        <div style={format!("{} padding: 32px 16px;", style::MAX_WIDTH)}>
            <div style="display: flex; flex-wrap: wrap; align-items: center; gap: 12px; margin-bottom: 24px;">
                <h2 style="font-size: 24px; font-weight: 600; margin: 0 auto 0 0;">{ label }</h2>
                <div style="position: relative; width: 320px; max-width: 100%;">
                    <span style="position: absolute; left: 12px; top: 50%; transform: translateY(-50%); opacity: 0.5;">
                        {"🔍"}
                    </span>
                    <input
                        value={(*query).clone()}
                        oninput={on_query}
                        placeholder={format!("Buscar {}…", label.to_lowercase())}
                        style="width: 100%; box-sizing: border-box; border: 1px solid #e2e8f0; border-radius: 10px; padding: 10px 10px 10px 36px;"
                    />
                </div>
            </div>

            <div style="font-size: 12px; opacity: 0.7; margin-bottom: 12px;">
                { format!("{} de {}", visible.len(), records.len()) }
            </div>

            {
                if visible.is_empty() {
                    html! { <div style="font-size: 14px; opacity: 0.7;">{"Sin resultados para esta búsqueda."}</div> }
                } else {
                    html! {}
                }
            }

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px;">
                { for visible.iter().map(|r| activity_card(r, &on_open, &on_tag)) }
            </div>

            {
                match opened {
                    Some(record) => detail_modal(record, on_close),
                    None => html! {},
                }
            }
        </div>
    }
}

fn activity_card(record: &ActivityRecord, on_open: &Callback<String>, on_tag: &Callback<Tag>) -> Html {
    let open = {
        let on_open = on_open.clone();
        let id = record.id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };

    html! {
        <div key={record.id.clone()} style={style::card()}>
            <div style="font-weight: 600; font-size: 16px; margin-bottom: 8px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;">
                { record.title.clone() }
            </div>
            <p style="font-size: 14px; color: #525252; margin: 0 0 12px 0; display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden;">
                { record.description.clone() }
            </p>
            <div style="display: flex; flex-wrap: wrap; gap: 4px; margin-bottom: 12px;">
                { for record.tags().into_iter().map(|tag| tag_chip(tag, on_tag)) }
            </div>
            <button onclick={open} style={format!("{} margin-top: auto; width: 100%;", style::btn_primary())}>
                {"Ver detalle ›"}
            </button>
        </div>
    }
}

fn tag_chip(tag: Tag, on_tag: &Callback<Tag>) -> Html {
    let onclick = {
        let on_tag = on_tag.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_tag.emit(tag);
        })
    };
    html! {
        <button type="button" {onclick} title={format!("Filtrar por: {tag}")} style={style::tag_chip(tag)}>
            { tag.as_str() }
        </button>
    }
}

fn detail_modal(record: &ActivityRecord, on_close: Callback<()>) -> Html {
    let on_overlay = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_button = Callback::from(move |_: MouseEvent| on_close.emit(()));
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let description = record.description.trim();
    let tags = record.tags();
    let images: Vec<&str> = record.image_paths().collect();

    html! {
        <div style={style::overlay()} onclick={on_overlay}>
            <div style={style::dialog()} onclick={keep_open} role="dialog" aria-modal="true">
                <button onclick={on_button} style={style::close_btn()} aria-label="Cerrar">{"×"}</button>
                <h3 style="font-size: 20px; font-weight: 600; margin: 0 32px 8px 0;">{ record.title.clone() }</h3>

                {
                    if description.is_empty() {
                        html! {}
                    } else {
                        html! { <p style="white-space: pre-line; line-height: 1.6;">{ description.to_string() }</p> }
                    }
                }

                { for record.sections().into_iter().map(|(heading, body)| html! {
                    <div>
                        <h4 style="font-weight: 600; color: #1e293b; margin: 16px 0 4px 0;">{ heading }</h4>
                        <p style="white-space: pre-line; line-height: 1.6; margin: 0;">{ body.to_string() }</p>
                    </div>
                }) }

                {
                    match record.video() {
                        Some(url) => html! {
                            <div style="margin-top: 16px;">
                                <h4 style="font-weight: 500; margin: 0 0 8px 0;">{"▶ Demostración"}</h4>
                                <VideoPlayer url={url.to_string()} />
                            </div>
                        },
                        None => html! {},
                    }
                }

                {
                    if images.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 8px; margin-top: 16px;">
                                { for images.iter().map(|src| html! {
                                    <img
                                        src={src.to_string()}
                                        alt={record.title.clone()}
                                        style="width: 100%; border-radius: 10px; object-fit: cover;"
                                    />
                                }) }
                            </div>
                        }
                    }
                }

                {
                    if tags.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div style="display: flex; flex-wrap: wrap; gap: 4px; padding-top: 12px;">
                                { for tags.into_iter().map(|tag| html! {
                                    <span style={style::tag_badge(tag)}>{ tag.as_str() }</span>
                                }) }
                            </div>
                        }
                    }
                }
            </div>
        </div>
    }
}
