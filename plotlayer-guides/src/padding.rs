use indexmap::IndexMap;
use plotlayer_common::types::Padding;
use serde::{Deserialize, Serialize};

use crate::component::{AuxiliaryComponent, ComponentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingSide {
    /// Space between the canvas edge and the view
    Outer,
    /// Space inside the view
    Inner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddingRegistration {
    pub component: ComponentId,
    pub name: String,
    pub side: PaddingSide,
    /// Request captured when the component registered
    pub request: Padding,
}

/// Collects the space auxiliary components reserve around the view.
///
/// Holds at most one registration per component.
#[derive(Debug, Clone, Default)]
pub struct PaddingController {
    registrations: IndexMap<ComponentId, PaddingRegistration>,
}

impl PaddingController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or re-register) a component's current padding request
    pub fn register_padding(&mut self, component: &dyn AuxiliaryComponent, side: PaddingSide) {
        let registration = PaddingRegistration {
            component: component.id(),
            name: component.name().to_string(),
            side,
            request: component.padding_request(),
        };
        tracing::trace!(
            component = %registration.name,
            ?side,
            request = ?registration.request,
            "register padding"
        );
        self.registrations.insert(component.id(), registration);
    }

    /// Drop a component's registration, returning whether one existed
    pub fn release(&mut self, id: ComponentId) -> bool {
        let released = self.registrations.shift_remove(&id);
        if let Some(registration) = &released {
            tracing::trace!(component = %registration.name, "release padding");
        }
        released.is_some()
    }

    pub fn is_registered(&self, id: ComponentId) -> bool {
        self.registrations.contains_key(&id)
    }

    pub fn registrations(&self) -> impl Iterator<Item = &PaddingRegistration> {
        self.registrations.values()
    }

    pub fn outer_padding(&self) -> Padding {
        self.sum_side(PaddingSide::Outer)
    }

    pub fn inner_padding(&self) -> Padding {
        self.sum_side(PaddingSide::Inner)
    }

    fn sum_side(&self, side: PaddingSide) -> Padding {
        self.registrations
            .values()
            .filter(|registration| registration.side == side)
            .fold(Padding::default(), |acc, registration| {
                acc + registration.request
            })
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn clear(&mut self) {
        self.registrations.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentContext, ComponentState};
    use crate::error::PlotLayerGuidesError;
    use plotlayer_common::types::Rect;

    #[derive(Debug)]
    struct FixedRequest {
        id: ComponentId,
        request: Padding,
    }

    impl FixedRequest {
        fn new(request: Padding) -> Self {
            Self {
                id: ComponentId::next(),
                request,
            }
        }
    }

    impl AuxiliaryComponent for FixedRequest {
        fn id(&self) -> ComponentId {
            self.id
        }

        fn name(&self) -> &str {
            "fixed"
        }

        fn state(&self) -> ComponentState {
            ComponentState::Absent
        }

        fn bbox(&self) -> Option<Rect> {
            None
        }

        fn padding_request(&self) -> Padding {
            self.request
        }

        fn render(&mut self, _ctx: &mut ComponentContext) -> Result<(), PlotLayerGuidesError> {
            Ok(())
        }

        fn destroy(&mut self, _ctx: &mut ComponentContext) {}
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut controller = PaddingController::new();
        let mut legend = FixedRequest::new(Padding::new(0.0, 0.0, 30.0, 0.0));

        controller.register_padding(&legend, PaddingSide::Outer);
        controller.register_padding(&legend, PaddingSide::Outer);
        assert_eq!(controller.len(), 1);
        assert_eq!(controller.outer_padding(), Padding::new(0.0, 0.0, 30.0, 0.0));

        // Re-registering replaces the snapshot
        legend.request = Padding::new(0.0, 0.0, 40.0, 0.0);
        controller.register_padding(&legend, PaddingSide::Outer);
        assert_eq!(controller.len(), 1);
        assert_eq!(controller.outer_padding(), Padding::new(0.0, 0.0, 40.0, 0.0));
    }

    #[test]
    fn test_sides_are_summed_separately() {
        let mut controller = PaddingController::new();
        let a = FixedRequest::new(Padding::new(10.0, 0.0, 0.0, 0.0));
        let b = FixedRequest::new(Padding::new(5.0, 0.0, 0.0, 7.0));
        let c = FixedRequest::new(Padding::uniform(1.0));

        controller.register_padding(&a, PaddingSide::Outer);
        controller.register_padding(&b, PaddingSide::Outer);
        controller.register_padding(&c, PaddingSide::Inner);

        assert_eq!(controller.outer_padding(), Padding::new(15.0, 0.0, 0.0, 7.0));
        assert_eq!(controller.inner_padding(), Padding::uniform(1.0));
    }

    #[test]
    fn test_release() {
        let mut controller = PaddingController::new();
        let a = FixedRequest::new(Padding::uniform(3.0));
        controller.register_padding(&a, PaddingSide::Outer);

        assert!(controller.release(a.id()));
        assert!(!controller.release(a.id()));
        assert!(controller.is_empty());
        assert_eq!(controller.outer_padding(), Padding::default());
    }
}
