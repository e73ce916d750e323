//! View models for the contact page.
//!
//! Nothing here touches the DOM: the browser crate feeds events in and
//! renders the resulting state, which keeps every decision testable natively.

pub mod analytics;
pub mod config;
pub mod counter;
pub mod form;
pub mod submit;
pub mod widget;

pub use analytics::{AnalyticsEvent, AnalyticsSink, ClickSource};
pub use config::{ContactConfig, Timings, Transport};
pub use counter::{CharCounter, CounterLevel, CounterReading};
pub use form::{
    Banner, BannerKind, Completion, ContactFormModel, FallbackOffer, FieldState, FormPhase,
    SubmitAttempt,
};
pub use submit::{SubmitError, Submitter, deliver};
pub use widget::{
    AfterHoursNotice, FloatPose, FloatWidgetModel, SectionBox, WidgetUpdate, after_hours_notice,
};
