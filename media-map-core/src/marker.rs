//! Marker descriptors and their bound click actions.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::capability::Navigator;
use crate::classify::Style;
use crate::config::LatLng;
use crate::error::Result;
use crate::popup::Popup;
use crate::record::RecordType;

/// Request to open one record's form view in the current view context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetailRequest {
    pub record_type: RecordType,
    pub id: i64,
}

/// Odoo window action equivalent of a [`DetailRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowAction<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub res_model: &'a str,
    pub res_id: i64,
    pub views: [(bool, &'static str); 1],
    pub target: &'static str,
}

impl DetailRequest {
    pub fn new(record_type: RecordType, id: i64) -> Self {
        Self { record_type, id }
    }

    pub fn model(&self) -> &str {
        self.record_type.model()
    }

    /// Form view, opened in place rather than in a new tab.
    pub fn window_action(&self) -> WindowAction<'_> {
        WindowAction {
            kind: "ir.actions.act_window",
            res_model: self.model(),
            res_id: self.id,
            views: [(false, "form")],
            target: "current",
        }
    }
}

/// Click handler of a single marker.
///
/// Captures its own record type and id when the marker is created, so it
/// keeps opening the right record no matter what later passes display.
#[derive(Clone)]
pub struct MarkerAction {
    request: DetailRequest,
    open: Rc<dyn Fn(&DetailRequest) -> Result<()>>,
}

impl MarkerAction {
    pub fn bind<N: Navigator + 'static>(navigator: Rc<N>, request: DetailRequest) -> Self {
        Self {
            request,
            open: Rc::new(move |request| navigator.open_detail(request)),
        }
    }

    pub fn request(&self) -> &DetailRequest {
        &self.request
    }

    /// Open the record. Failures are logged; a click has nowhere to
    /// propagate them.
    pub fn trigger(&self) {
        if let Err(e) = (self.open)(&self.request) {
            log::error!(
                "[MediaMap] marker: failed to open {} #{}: {}",
                self.request.model(),
                self.request.id,
                e
            );
        }
    }
}

impl fmt::Debug for MarkerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerAction")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

/// What a marker shows, independent of any backend handle.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub record_id: i64,
    pub record_type: RecordType,
    pub position: LatLng,
    pub style: Style,
    pub popup: Popup,
}

/// A marker currently placed on the surface.
#[derive(Debug)]
pub struct MarkerDescriptor<H> {
    pub spec: MarkerSpec,
    pub handle: H,
    pub action: MarkerAction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<DetailRequest>>);

    impl Navigator for Recorder {
        fn open_detail(&self, request: &DetailRequest) -> Result<()> {
            self.0.borrow_mut().push(request.clone());
            Ok(())
        }
    }

    struct Broken;

    impl Navigator for Broken {
        fn open_detail(&self, _request: &DetailRequest) -> Result<()> {
            Err(crate::SiteMapError::Navigation("no action service".into()))
        }
    }

    #[test]
    fn window_action_targets_current_form_view() {
        let request = DetailRequest::new(RecordType::DigitalScreen, 17);
        let json = serde_json::to_value(request.window_action()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "ir.actions.act_window",
                "res_model": "media.digital.screen",
                "res_id": 17,
                "views": [[false, "form"]],
                "target": "current",
            })
        );
    }

    #[test]
    fn action_forwards_its_own_request() {
        let recorder = Rc::new(Recorder::default());
        let site = MarkerAction::bind(
            Rc::clone(&recorder),
            DetailRequest::new(RecordType::Site, 1),
        );
        let screen = MarkerAction::bind(
            Rc::clone(&recorder),
            DetailRequest::new(RecordType::DigitalScreen, 1),
        );

        screen.trigger();
        site.trigger();

        assert_eq!(
            *recorder.0.borrow(),
            vec![
                DetailRequest::new(RecordType::DigitalScreen, 1),
                DetailRequest::new(RecordType::Site, 1),
            ]
        );
    }

    #[test]
    fn navigation_failure_does_not_panic() {
        let action = MarkerAction::bind(Rc::new(Broken), DetailRequest::new(RecordType::Site, 5));
        action.trigger();
        assert_eq!(action.request().id, 5);
    }
}
