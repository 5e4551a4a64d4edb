// src/escape.rs
//
// Routing for the global Escape key. Every dismissable piece of UI is a
// layer; the router walks them in a fixed visual-stacking order and closes
// exactly the first one that reports itself active. Layers below the first
// active one are never touched, so one key press closes one thing.

/// Dismissable UI layers, listed from topmost to bottommost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    AchievementModal,
    PartnerModal,
    Sidebar,
    TimelineZoom,
}

pub const LAYER_ORDER: [Layer; 4] = [
    Layer::AchievementModal,
    Layer::PartnerModal,
    Layer::Sidebar,
    Layer::TimelineZoom,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeRouter {
    order: Vec<Layer>,
}

impl Default for EscapeRouter {
    fn default() -> Self {
        Self {
            order: LAYER_ORDER.to_vec(),
        }
    }
}

impl EscapeRouter {
    /// Find the topmost active layer. The caller supplies the activity check
    /// so the router never reaches into module internals.
    pub fn route<F>(&self, is_active: F) -> Option<Layer>
    where
        F: Fn(Layer) -> bool,
    {
        self.order.iter().copied().find(|layer| is_active(*layer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_active_routes_nowhere() {
        let router = EscapeRouter::default();
        assert_eq!(router.route(|_| false), None);
    }

    #[test]
    fn modal_wins_over_sidebar() {
        let router = EscapeRouter::default();
        let open = [Layer::AchievementModal, Layer::Sidebar];
        let routed = router.route(|layer| open.contains(&layer));
        assert_eq!(routed, Some(Layer::AchievementModal));
    }

    #[test]
    fn sidebar_wins_over_timeline_zoom() {
        let router = EscapeRouter::default();
        let open = [Layer::Sidebar, Layer::TimelineZoom];
        let routed = router.route(|layer| open.contains(&layer));
        assert_eq!(routed, Some(Layer::Sidebar));
    }

    #[test]
    fn timeline_zoom_is_the_last_resort() {
        let router = EscapeRouter::default();
        let routed = router.route(|layer| layer == Layer::TimelineZoom);
        assert_eq!(routed, Some(Layer::TimelineZoom));
    }

    #[test]
    fn only_one_layer_is_reported_per_press() {
        let router = EscapeRouter::default();
        let routed = router.route(|_| true);
        assert_eq!(routed, Some(Layer::AchievementModal));
    }
}
