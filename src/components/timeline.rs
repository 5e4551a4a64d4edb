// src/components/timeline.rs
use crate::i18n::Locale;
use crate::site_content::TimelineSection;
use crate::timeline::{DisplayMode, TimelineState, SECTION_COUNT};
use yew::prelude::*;

/// Already-translated labels for the widget chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLabels {
    pub hint_overview: String,
    pub hint_zoomed: String,
    pub prev: String,
    pub next: String,
    pub overview: String,
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub state: TimelineState,
    pub sections: Vec<TimelineSection>,
    pub locale: Locale,
    pub labels: TimelineLabels,
    pub on_hot_zone: Callback<u8>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_background: Callback<()>,
}

/// The zoomable career timeline. On desktop it renders an overview diagram
/// whose hot-zones zoom into one chapter; zoomed (and always on mobile) it
/// renders the focused chapter with prev/next controls. All state decisions
/// live in `crate::timeline`; this component only draws the current state.
#[function_component(TimelineWidget)]
pub fn timeline_widget(props: &TimelineProps) -> Html {
    if props.state.is_zoomed() {
        render_focus(props)
    } else {
        render_overview(props)
    }
}

fn render_overview(props: &TimelineProps) -> Html {
    html! {
        <div class="timeline-widget">
            <div class="timeline-track">
                { for props.sections.iter().map(|section| {
                    let number = section.number;
                    let on_hot_zone = props.on_hot_zone.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_hot_zone.emit(number));
                    html! {
                        <button class="hot-zone" {onclick}>
                            <span class="hot-zone-years">{ &section.years }</span>
                            <span class="hot-zone-title">{ section.title.get(props.locale) }</span>
                        </button>
                    }
                }) }
            </div>
            <p class="timeline-hint">{ &props.labels.hint_overview }</p>
        </div>
    }
}

fn render_focus(props: &TimelineProps) -> Html {
    let state = props.state;
    let current = state.current_section();

    // Clicks on the diagram background zoom out; the focused card and its
    // controls swallow theirs so only true background clicks get through.
    let on_background = {
        let cb = props.on_background.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_prev = {
        let cb = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_zoom_out = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="timeline-widget zoomed" onclick={on_background}>
            <div class="timeline-focus" onclick={swallow}>
                { render_section(props, current) }
                <div class="timeline-controls">
                    <button class="timeline-prev" onclick={on_prev} disabled={current <= 1}>
                        { format!("← {}", props.labels.prev) }
                    </button>
                    <div class="timeline-dots">
                        { for (1..=SECTION_COUNT).map(|n| {
                            let class = if n == current { "dot active" } else { "dot" };
                            html! { <span class={class}></span> }
                        }) }
                    </div>
                    <button class="timeline-next" onclick={on_next} disabled={current >= SECTION_COUNT}>
                        { format!("{} →", props.labels.next) }
                    </button>
                    { if state.mode() == DisplayMode::Desktop {
                        html! {
                            <button class="timeline-zoom-out" onclick={on_zoom_out}>
                                { &props.labels.overview }
                            </button>
                        }
                    } else {
                        html! {}
                    } }
                </div>
                <p class="timeline-hint">{ &props.labels.hint_zoomed }</p>
            </div>
        </div>
    }
}

fn render_section(props: &TimelineProps, number: u8) -> Html {
    let Some(section) = props.sections.iter().find(|s| s.number == number) else {
        // Content still loading; keep the frame without a chapter.
        return html! { <div class="timeline-section empty"></div> };
    };

    html! {
        <div class="timeline-section">
            <span class="section-years">{ &section.years }</span>
            <h3 class="section-title">{ section.title.get(props.locale) }</h3>
            <p class="section-summary">{ section.summary.get(props.locale) }</p>
            <ul class="section-milestones">
                { for section.milestones.iter().map(|milestone| html! {
                    <li>
                        <span class="milestone-year">{ &milestone.year }</span>
                        <span class="milestone-text">{ milestone.text.get(props.locale) }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
