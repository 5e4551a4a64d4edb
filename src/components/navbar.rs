// src/components/navbar.rs
use crate::i18n::Locale;
use yew::prelude::*;

/// One in-page navigation entry: the section id the link scrolls to and its
/// already-translated label.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub target: &'static str,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub scrolled: bool,
    pub sidebar_open: bool,
    pub locale: Locale,
    pub links: Vec<NavLink>,
    pub navbar_ref: NodeRef,
    pub on_nav: Callback<&'static str>,
    pub on_toggle_sidebar: Callback<()>,
    pub on_toggle_locale: Callback<()>,
}

/// Fixed top navigation bar: brand, in-page links, the language toggle and
/// the hamburger button controlling the sidebar.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let class = if props.scrolled { "navbar scrolled" } else { "navbar" };
    let hamburger_class = if props.sidebar_open {
        "hamburger active"
    } else {
        "hamburger"
    };

    let on_brand = {
        let on_nav = props.on_nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_nav.emit("hero");
        })
    };
    let on_toggle_sidebar = {
        let cb = props.on_toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_toggle_locale = {
        let cb = props.on_toggle_locale.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <nav class={class} ref={props.navbar_ref.clone()}>
            <a class="brand" href="#hero" onclick={on_brand}>{"Lena Hartmann"}</a>
            <div class="nav-links">
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
            </div>
            <button class="lang-toggle" onclick={on_toggle_locale} title="Sprache wechseln / switch language">
                { props.locale.toggle_label() }
            </button>
            <button class={hamburger_class} onclick={on_toggle_sidebar} aria-label="Menu">
                <span></span>
                <span></span>
                <span></span>
            </button>
        </nav>
    }
}
