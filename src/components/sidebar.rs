// src/components/sidebar.rs
use crate::components::navbar::NavLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub open: bool,
    pub links: Vec<NavLink>,
    pub on_nav: Callback<&'static str>,
    pub on_close: Callback<()>,
}

/// Slide-in navigation panel plus its page overlay. Clicking the overlay or
/// any link closes the panel; the links additionally trigger the smooth
/// scroll through `on_nav`.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let sidebar_class = if props.open { "sidebar open" } else { "sidebar" };
    let overlay_class = if props.open { "overlay active" } else { "overlay" };

    let on_overlay = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <div class={overlay_class} onclick={on_overlay}></div>
            <aside class={sidebar_class}>
                { for props.links.iter().map(|link| {
                    let target = link.target;
                    let on_nav = props.on_nav.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_nav.emit(target);
                    });
                    html! {
                        <a href={format!("#{}", target)} {onclick}>{ &link.label }</a>
                    }
                }) }
            </aside>
        </>
    }
}
