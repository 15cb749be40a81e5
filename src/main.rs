use bitacora_deportiva::config::APP_ROOT_ID;
use bitacora_deportiva::App;

fn main() {
    match gloo::utils::document().get_element_by_id(APP_ROOT_ID) {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => yew::Renderer::<App>::new().render(),
    };
}
