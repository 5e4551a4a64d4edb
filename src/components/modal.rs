// src/components/modal.rs
use crate::site_content::ModalPayload;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub payload: ModalPayload,
    pub on_close: Callback<()>,
}

/// Generic detail modal: a backdrop that dismisses on direct clicks, a card
/// that swallows clicks, and a close button. Which payload it shows and the
/// page scroll lock are the caller's business.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // The card swallows clicks so only true backdrop clicks dismiss.
    let on_card = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let payload = &props.payload;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal-card" onclick={on_card}>
                <button class="close-btn" onclick={on_close_button}>{"×"}</button>
                <span class="modal-category">{ &payload.category }</span>
                <h2 class="modal-title">{ &payload.title }</h2>
                <p class="modal-meta">
                    <span class="modal-location">{ &payload.location }</span>
                    { " · " }
                    <span class="modal-result">{ &payload.result }</span>
                </p>
                <p class="modal-description">{ &payload.description }</p>
                { if let Some(quote) = &payload.quote {
                    html! { <blockquote class="modal-quote">{ quote }</blockquote> }
                } else {
                    html! {}
                } }
            </div>
        </div>
    }
}
