use yew::prelude::*;

use crate::media::{resolve, Playable};

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub url: AttrValue,
}

/// Embeds a demonstration video, or renders nothing for links we can't play.
#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    match resolve(&props.url) {
        Some(Playable::Embed(src)) => html! {
            <div style="width: 100%; aspect-ratio: 16 / 9; border-radius: 12px; overflow: hidden;">
                <iframe
                    style="width: 100%; height: 100%; border: 0;"
                    src={src}
                    title="Video"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                />
            </div>
        },
        Some(Playable::Native(src)) => html! {
            <video controls=true style="width: 100%; border-radius: 12px;">
                <source src={src} />
                {"Tu navegador no soporta video embebido."}
            </video>
        },
        None => html! {},
    }
}
