// src/main.rs
mod components;
mod escape;
mod i18n;
mod nav;
mod scroll;
mod site_content;
mod timeline;
mod utils;

use components::modal::Modal;
use components::navbar::{NavLink, Navbar};
use components::reveal::Reveal;
use components::sidebar::Sidebar;
use components::timeline::{TimelineLabels, TimelineWidget};
use escape::{EscapeRouter, Layer};
use gloo::events::EventListener;
use gloo::utils::{document, window};
use gloo_net::http::Request;
use i18n::{Locale, Translations};
use nav::SidebarState;
use site_content::{ModalPayload, SiteContent};
use timeline::{DisplayMode, TimelineState};
use utils::resource_url;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

pub enum AppMsg {
    ContentLoaded(SiteContent),
    ContentLoadFailed(String),
    ToggleSidebar,
    CloseSidebar,
    NavigateTo(&'static str),
    ToggleLocale,
    OpenAchievement(String),
    OpenPartner(String),
    CloseModals,
    EscapePressed,
    TimelineHotZone(u8),
    TimelinePrev,
    TimelineNext,
    TimelineZoomOut,
    TimelineArrowKey(i8),
    WindowScrolled(f64),
    ViewportResized(f64),
}

/// Root component and the one place where cross-cutting UI state lives: the
/// sidebar flag, the two modal payloads, the timeline machine and the navbar
/// style. The widgets below it are constructed with explicit props and report
/// back through callbacks; the document-level listeners (Escape, arrows,
/// scroll, resize) are registered once here.
pub struct App {
    content: SiteContent,
    loading: bool,
    translations: Translations,
    locale: Locale,
    sidebar: SidebarState,
    achievement_modal: Option<ModalPayload>,
    partner_modal: Option<ModalPayload>,
    timeline: TimelineState,
    navbar_scrolled: bool,
    escape_router: EscapeRouter,
    navbar_ref: NodeRef,
    _listeners: Vec<EventListener>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // Start loading the section content
        ctx.link().send_future(async {
            match load_site_content().await {
                Ok(content) => AppMsg::ContentLoaded(content),
                Err(e) => AppMsg::ContentLoadFailed(e),
            }
        });

        let keydown = {
            let link = ctx.link().clone();
            EventListener::new(&document(), "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                match event.key().as_str() {
                    "Escape" => link.send_message(AppMsg::EscapePressed),
                    "ArrowLeft" => link.send_message(AppMsg::TimelineArrowKey(-1)),
                    "ArrowRight" => link.send_message(AppMsg::TimelineArrowKey(1)),
                    _ => {}
                }
            })
        };
        let scrolled = {
            let link = ctx.link().clone();
            EventListener::new(&window(), "scroll", move |_| {
                let y = window().page_y_offset().unwrap_or(0.0);
                link.send_message(AppMsg::WindowScrolled(y));
            })
        };
        let resized = {
            let link = ctx.link().clone();
            EventListener::new(&window(), "resize", move |_| {
                link.send_message(AppMsg::ViewportResized(viewport_width()));
            })
        };

        Self {
            content: SiteContent::default(),
            loading: true,
            translations: Translations::load(),
            // Re-applied before the first translated render, so a returning
            // visitor never sees the other locale flash.
            locale: i18n::load_preference(),
            sidebar: SidebarState::default(),
            achievement_modal: None,
            partner_modal: None,
            timeline: TimelineState::new(DisplayMode::from_width(viewport_width())),
            navbar_scrolled: false,
            escape_router: EscapeRouter::default(),
            navbar_ref: NodeRef::default(),
            _listeners: vec![keydown, scrolled, resized],
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ContentLoaded(content) => {
                self.content = content;
                self.loading = false;
                true
            }
            AppMsg::ContentLoadFailed(error) => {
                // The sections render empty; nothing is surfaced to the visitor.
                log::error!("Failed to load site content: {}", error);
                self.loading = false;
                true
            }
            AppMsg::ToggleSidebar => {
                // Opening suspends page scroll together with showing the
                // panel and the overlay; closing restores everything.
                let open = self.sidebar.toggle();
                scroll::set_scroll_lock(open);
                true
            }
            AppMsg::CloseSidebar => {
                if self.sidebar.overlay_click() {
                    scroll::set_scroll_lock(false);
                    true
                } else {
                    false
                }
            }
            AppMsg::NavigateTo(target) => {
                let rerender = self.sidebar.link_click();
                if rerender {
                    scroll::set_scroll_lock(false);
                }
                scroll::scroll_to_anchor(target, self.header_height());
                rerender
            }
            AppMsg::ToggleLocale => {
                self.locale = self.locale.toggled();
                i18n::store_preference(self.locale);
                true
            }
            AppMsg::OpenAchievement(id) => {
                // The payload snapshots the current locale; it is not
                // re-resolved if the locale changes while the modal is open.
                if let Some(achievement) = self.content.achievement(&id) {
                    self.achievement_modal = Some(achievement.payload(self.locale));
                    scroll::set_scroll_lock(true);
                    true
                } else {
                    false
                }
            }
            AppMsg::OpenPartner(id) => {
                if let Some(partner) = self.content.partner(&id) {
                    self.partner_modal = Some(partner.payload(self.locale));
                    scroll::set_scroll_lock(true);
                    true
                } else {
                    false
                }
            }
            AppMsg::CloseModals => {
                let was_open = self.achievement_modal.is_some() || self.partner_modal.is_some();
                self.achievement_modal = None;
                self.partner_modal = None;
                if was_open {
                    scroll::set_scroll_lock(false);
                }
                was_open
            }
            AppMsg::EscapePressed => {
                let target = self.escape_router.route(|layer| self.layer_active(layer));
                match target {
                    Some(Layer::AchievementModal) => {
                        self.achievement_modal = None;
                        scroll::set_scroll_lock(false);
                        true
                    }
                    Some(Layer::PartnerModal) => {
                        self.partner_modal = None;
                        scroll::set_scroll_lock(false);
                        true
                    }
                    Some(Layer::Sidebar) => {
                        self.sidebar.close();
                        scroll::set_scroll_lock(false);
                        true
                    }
                    Some(Layer::TimelineZoom) => self.timeline.zoom_out(),
                    None => false,
                }
            }
            AppMsg::TimelineHotZone(n) => self.timeline.hot_zone_click(n),
            AppMsg::TimelinePrev => self.timeline.select_prev(),
            AppMsg::TimelineNext => self.timeline.select_next(),
            AppMsg::TimelineZoomOut => self.timeline.zoom_out(),
            AppMsg::TimelineArrowKey(direction) => {
                if !self.timeline.accepts_keyboard() {
                    return false;
                }
                if direction < 0 {
                    self.timeline.select_prev()
                } else {
                    self.timeline.select_next()
                }
            }
            AppMsg::WindowScrolled(y) => {
                match scroll::navbar_crossing(self.navbar_scrolled, y) {
                    Some(state) => {
                        self.navbar_scrolled = state;
                        true
                    }
                    // Still on the same side of the threshold: write nothing.
                    None => false,
                }
            }
            AppMsg::ViewportResized(width) => self.timeline.handle_viewport_width(width),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="loading">{ self.t("loading") }</div>
            };
        }

        let links = self.nav_links();
        let on_nav = ctx.link().callback(AppMsg::NavigateTo);

        html! {
            <>
                <Navbar
                    scrolled={self.navbar_scrolled}
                    sidebar_open={self.sidebar.is_open()}
                    locale={self.locale}
                    links={links.clone()}
                    navbar_ref={self.navbar_ref.clone()}
                    on_nav={on_nav.clone()}
                    on_toggle_sidebar={ctx.link().callback(|_| AppMsg::ToggleSidebar)}
                    on_toggle_locale={ctx.link().callback(|_| AppMsg::ToggleLocale)}
                />
                <Sidebar
                    open={self.sidebar.is_open()}
                    links={links}
                    on_nav={on_nav}
                    on_close={ctx.link().callback(|_| AppMsg::CloseSidebar)}
                />
                <main>
                    { self.render_hero(ctx) }
                    { self.render_about() }
                    { self.render_achievements(ctx) }
                    { self.render_timeline(ctx) }
                    { self.render_partners(ctx) }
                    { self.render_contact() }
                </main>
                <footer class="footer">
                    <p>{ self.t("footer.note") }</p>
                </footer>
                { self.render_modals(ctx) }
            </>
        }
    }
}

impl App {
    fn t(&self, key: &str) -> String {
        self.translations.text(self.locale, key)
    }

    fn layer_active(&self, layer: Layer) -> bool {
        match layer {
            Layer::AchievementModal => self.achievement_modal.is_some(),
            Layer::PartnerModal => self.partner_modal.is_some(),
            Layer::Sidebar => self.sidebar.is_open(),
            Layer::TimelineZoom => self.timeline.can_zoom_out(),
        }
    }

    fn header_height(&self) -> f64 {
        self.navbar_ref
            .cast::<Element>()
            .map(|el| el.get_bounding_client_rect().height())
            .unwrap_or(0.0)
    }

    fn nav_links(&self) -> Vec<NavLink> {
        [
            ("about", "nav.about"),
            ("achievements", "nav.achievements"),
            ("timeline", "nav.timeline"),
            ("partners", "nav.partners"),
            ("contact", "nav.contact"),
        ]
        .into_iter()
        .map(|(target, key)| NavLink {
            target,
            label: self.t(key),
        })
        .collect()
    }

    fn render_hero(&self, ctx: &Context<Self>) -> Html {
        let on_cta = ctx
            .link()
            .callback(|_: MouseEvent| AppMsg::NavigateTo("timeline"));
        html! {
            <section id="hero" class="hero">
                <p class="hero-kicker">{ self.t("hero.kicker") }</p>
                <h1>{"Lena Hartmann"}</h1>
                <p class="hero-tagline">{ self.t("hero.tagline") }</p>
                <button class="cta" onclick={on_cta}>{ self.t("hero.cta") }</button>
            </section>
        }
    }

    fn render_about(&self) -> Html {
        html! {
            <section id="about" class="about">
                <Reveal>
                    <h2>{ self.t("about.heading") }</h2>
                    <p>{ self.t("about.body.1") }</p>
                    <p>{ self.t("about.body.2") }</p>
                </Reveal>
            </section>
        }
    }

    fn render_achievements(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="achievements" class="achievements">
                <h2>{ self.t("achievements.heading") }</h2>
                <p class="section-hint">{ self.t("achievements.hint") }</p>
                <div class="achievement-grid">
                    { for self.content.achievements.iter().map(|achievement| {
                        let id = achievement.id.clone();
                        let onclick = ctx
                            .link()
                            .callback(move |_: MouseEvent| AppMsg::OpenAchievement(id.clone()));
                        html! {
                            <Reveal>
                                <button class="achievement-card" {onclick}>
                                    <span class="card-category">{ achievement.category.get(self.locale) }</span>
                                    <h3>{ achievement.title.get(self.locale) }</h3>
                                    <p class="card-result">{ achievement.result.get(self.locale) }</p>
                                    <p class="card-location">{ achievement.location.get(self.locale) }</p>
                                </button>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>
        }
    }

    fn render_timeline(&self, ctx: &Context<Self>) -> Html {
        let labels = TimelineLabels {
            hint_overview: self.t("timeline.hint.overview"),
            hint_zoomed: self.t("timeline.hint.zoomed"),
            prev: self.t("timeline.prev"),
            next: self.t("timeline.next"),
            overview: self.t("timeline.overview"),
        };
        html! {
            <section id="timeline" class="timeline">
                <h2>{ self.t("timeline.heading") }</h2>
                <TimelineWidget
                    state={self.timeline}
                    sections={self.content.timeline.clone()}
                    locale={self.locale}
                    {labels}
                    on_hot_zone={ctx.link().callback(AppMsg::TimelineHotZone)}
                    on_prev={ctx.link().callback(|_| AppMsg::TimelinePrev)}
                    on_next={ctx.link().callback(|_| AppMsg::TimelineNext)}
                    on_zoom_out={ctx.link().callback(|_| AppMsg::TimelineZoomOut)}
                    on_background={ctx.link().callback(|_| AppMsg::TimelineZoomOut)}
                />
            </section>
        }
    }

    fn render_partners(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="partners" class="partners">
                <h2>{ self.t("partners.heading") }</h2>
                <p class="section-hint">{ self.t("partners.hint") }</p>
                <div class="partner-grid">
                    { for self.content.partners.iter().map(|partner| {
                        let id = partner.id.clone();
                        let onclick = ctx
                            .link()
                            .callback(move |_: MouseEvent| AppMsg::OpenPartner(id.clone()));
                        html! {
                            <Reveal>
                                <button class="partner-card" {onclick}>
                                    <span class="card-category">{ partner.field.get(self.locale) }</span>
                                    <h3>{ &partner.name }</h3>
                                    <p class="card-role">{ partner.role.get(self.locale) }</p>
                                </button>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>
        }
    }

    fn render_contact(&self) -> Html {
        html! {
            <section id="contact" class="contact">
                <h2>{ self.t("contact.heading") }</h2>
                <dl class="contact-list">
                    <dt>{ self.t("contact.email") }</dt>
                    <dd><a href="mailto:mail@lena-hartmann.example">{"mail@lena-hartmann.example"}</a></dd>
                    <dt>{ self.t("contact.phone") }</dt>
                    <dd>{"+49 761 4420 881"}</dd>
                    <dt>{ self.t("contact.base") }</dt>
                    <dd>{ self.t("contact.base.value") }</dd>
                </dl>
            </section>
        }
    }

    fn render_modals(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.link().callback(|_| AppMsg::CloseModals);
        html! {
            <>
                { if let Some(payload) = &self.achievement_modal {
                    html! { <Modal payload={payload.clone()} on_close={on_close.clone()} /> }
                } else {
                    html! {}
                } }
                { if let Some(payload) = &self.partner_modal {
                    html! { <Modal payload={payload.clone()} on_close={on_close} /> }
                } else {
                    html! {}
                } }
            </>
        }
    }
}

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

async fn load_site_content() -> Result<SiteContent, String> {
    let url = resource_url("public/content/site.json");
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("failed to fetch site content: {:?}", e))?;
    if !resp.ok() {
        return Err(format!("site content request returned {}", resp.status()));
    }
    resp.json::<SiteContent>()
        .await
        .map_err(|e| format!("failed to parse site content: {:?}", e))
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
