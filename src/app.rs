use gloo::console::log;
use yew::prelude::*;

use crate::components::style;
use crate::components::{About, ActivityGrid, Landing, NavBar};
use crate::route::{load_route, save_route, Route};

#[function_component(App)]
pub fn app() -> Html {
    // Restored from SessionStorage so a reload lands on the same view
    let route = use_state(load_route);

    use_effect_with(*route, move |current| {
        save_route(*current);
        || ()
    });

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if *route != next {
                log!(format!("Route: {} -> {}", route.key(), next.key()));
                route.set(next);
            }
        })
    };

    if *route == Route::Landing {
        let on_enter = {
            let on_navigate = on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Aplausos))
        };
        return html! {
            <div style={style::page()}>
                <Landing {on_enter} />
            </div>
        };
    }

    let body = match (*route, route.catalog()) {
        (_, Some(catalog)) => html! { <ActivityGrid key={catalog.key()} {catalog} /> },
        (Route::Nosotros, None) => html! { <About /> },
        _ => html! {},
    };

    html! {
        <div style={style::page()}>
            <NavBar current={*route} {on_navigate} />
            { body }
            <footer style="border-top: 1px solid #e5e5e5; margin-top: 32px; min-height: 64px;"></footer>
        </div>
    }
}
