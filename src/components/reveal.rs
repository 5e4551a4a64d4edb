// src/components/reveal.rs
use crate::scroll;
use gloo::events::EventListener;
use gloo::utils::window;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: String,
    pub children: Children,
}

fn in_view(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    scroll::should_reveal(element.get_bounding_client_rect().top(), viewport)
}

/// One-shot reveal-on-scroll wrapper. The wrapped block starts hidden and
/// gains the `visible` class the first time it scrolls into view; after that
/// the scroll listener is dropped and the state never changes again.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let visible = use_state(|| false);
    let node = use_node_ref();

    {
        let visible = visible.clone();
        let node = node.clone();
        use_effect_with(*visible, move |revealed| {
            let listener = if *revealed {
                None
            } else if in_view(&node) {
                // Already on screen at mount, no listener needed.
                visible.set(true);
                None
            } else {
                let visible = visible.clone();
                let node = node.clone();
                Some(EventListener::new(&window(), "scroll", move |_| {
                    if in_view(&node) {
                        visible.set(true);
                    }
                }))
            };
            move || drop(listener)
        });
    }

    let mut class = String::from("reveal");
    if *visible {
        class.push_str(" visible");
    }
    if !props.class.is_empty() {
        class.push(' ');
        class.push_str(&props.class);
    }

    html! {
        <div ref={node} class={class}>
            { props.children.clone() }
        </div>
    }
}
